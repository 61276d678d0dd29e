//! Copy command - Put a prompt on the system clipboard

use ai_playbook::catalog::UseCase;
use ai_playbook::clipboard;
use owo_colors::OwoColorize;

/// Copy the record's prompt, printing an acknowledgement
///
/// When no clipboard utility works the prompt is printed instead so it can
/// still be copied by hand.
pub fn execute(record: &UseCase) {
    if clipboard::copy_to_clipboard(&record.prompt) {
        println!("{} {}", "Copied:".green(), record.title);
    } else {
        println!(
            "{}",
            "Clipboard unavailable; prompt printed below.".yellow()
        );
        println!("{}", record.prompt);
    }
}
