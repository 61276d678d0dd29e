//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable overriding the store location
pub const STORE_ENV: &str = "AI_PLAYBOOK_STORE";

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "AI_PLAYBOOK_LOG";

/// Get the default store file
/// - macOS: ~/Library/Application Support/ai-playbook/storage.json
/// - Linux: ~/.local/share/ai-playbook/storage.json
/// - Windows: %APPDATA%/ai-playbook/storage.json
pub fn default_store_path() -> Result<PathBuf> {
    let data = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data.join("ai-playbook").join("storage.json"))
}

/// Resolve the store file: explicit flag, then environment, then default
pub fn store_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    resolve_store_path(flag, std::env::var_os(STORE_ENV).map(PathBuf::from))
}

fn resolve_store_path(flag: Option<PathBuf>, env: Option<PathBuf>) -> Result<PathBuf> {
    match flag.or(env.filter(|p| !p.as_os_str().is_empty())) {
        Some(path) => Ok(path),
        None => default_store_path(),
    }
}

/// Default log level for a count of `-v` flags
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flag_or_env_uses_default() {
        let resolved = resolve_store_path(None, None).ok();
        assert_eq!(resolved, default_store_path().ok());
        if let Some(path) = resolved {
            assert!(path.ends_with("ai-playbook/storage.json"));
        }
    }

    #[test]
    fn test_flag_wins_over_env() {
        let path = resolve_store_path(
            Some(PathBuf::from("/tmp/flag.json")),
            Some(PathBuf::from("/tmp/env.json")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/flag.json"));
    }

    #[test]
    fn test_env_used_without_flag() {
        let path = resolve_store_path(None, Some(PathBuf::from("/tmp/env.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/env.json"));
    }

    #[test]
    fn test_empty_env_ignored() {
        let resolved = resolve_store_path(None, Some(PathBuf::new())).ok();
        assert_ne!(resolved, Some(PathBuf::new()));
        assert_eq!(resolved, default_store_path().ok());
    }

    #[test]
    fn test_flag_wins_over_empty_env() {
        let path = resolve_store_path(Some(PathBuf::from("/tmp/flag.json")), Some(PathBuf::new()))
            .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/flag.json"));
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(5), "debug");
    }
}
