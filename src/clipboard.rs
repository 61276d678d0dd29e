//! System clipboard access through the platform's clipboard utility

use std::io::Write;
use std::process::{Command, Stdio};

#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CANDIDATES: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Place `text` on the clipboard
///
/// Returns whether some utility accepted it. Failures are never errors.
pub fn copy_to_clipboard(text: &str) -> bool {
    CANDIDATES
        .iter()
        .any(|(program, args)| match pipe_to(program, args, text) {
            Ok(true) => true,
            Ok(false) => {
                tracing::debug!("{} exited unsuccessfully", program);
                false
            }
            Err(err) => {
                tracing::debug!("{} unavailable: {}", program, err);
                false
            }
        })
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(err) = stdin.write_all(text.as_bytes()) {
            drop(stdin);
            // reap the child before reporting the write failure
            let _ = child.wait();
            return Err(err);
        }
    }

    Ok(child.wait()?.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_not_success() {
        assert!(!pipe_to("ai-playbook-no-such-clipboard-tool", &[], "x").unwrap_or(false));
    }

    #[cfg(unix)]
    #[test]
    fn test_child_that_exits_early_is_not_success() {
        // `false` never reads stdin, so a large write hits a closed pipe
        let text = "x".repeat(1 << 20);
        assert!(!matches!(pipe_to("false", &[], &text), Ok(true)));
    }
}
