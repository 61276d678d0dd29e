//! State and reset commands - Inspect or clear the persisted session

use ai_playbook::engine::Playbook;
use ai_playbook::store::KeyValueStore;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::Path;

/// Format the persisted view state for display
pub fn format_state<S: KeyValueStore>(playbook: &Playbook<S>, store_path: &Path) -> String {
    let state = playbook.filter();
    let mut lines = vec![];

    lines.push(format!("Store: {}", store_path.display()));
    lines.push(String::new());
    lines.push(format!("Role: {}", state.role.label()));
    lines.push(format!(
        "Tool: {}",
        state.tool.map_or("All tools", |t| t.label())
    ));
    if state.query.is_empty() {
        lines.push("Search: (none)".to_string());
    } else {
        lines.push(format!("Search: \"{}\"", state.query));
    }
    lines.push(format!(
        "Favorites: {} ({} for {})",
        playbook.favorites().len(),
        playbook.role_favorites().len(),
        state.role.label()
    ));

    lines.join("\n")
}

/// Execute the reset command
pub fn reset<S: KeyValueStore>(playbook: &mut Playbook<S>, yes: bool) -> Result<()> {
    if !yes {
        print!(
            "Reset view state and remove {} favorite(s)? (y/N) ",
            playbook.favorites().len()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    playbook.reset();
    println!("{}", "Playbook reset to defaults.".green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_playbook::catalog::{all_records, RoleId, ToolId};
    use ai_playbook::store::MemoryStore;

    #[test]
    fn test_format_state_defaults() {
        let playbook = Playbook::load(MemoryStore::new());
        let output = format_state(&playbook, Path::new("/tmp/storage.json"));
        assert!(output.contains("Store: /tmp/storage.json"));
        assert!(output.contains("Role: Students"));
        assert!(output.contains("Tool: All tools"));
        assert!(output.contains("Search: (none)"));
        assert!(output.contains("Favorites: 0 (0 for Students)"));
    }

    #[test]
    fn test_format_state_after_changes() {
        let mut playbook = Playbook::load(MemoryStore::new());
        playbook.set_favorite(&all_records()[0], true);
        playbook.set_role(RoleId::Faculty);
        playbook.set_tool(Some(ToolId::Copilot));
        playbook.set_query("tests");

        let output = format_state(&playbook, Path::new("s.json"));
        assert!(output.contains("Role: Faculty"));
        assert!(output.contains("Tool: Microsoft Copilot"));
        assert!(output.contains("Search: \"tests\""));
        assert!(output.contains("Favorites: 1 (0 for Faculty)"));
    }

    #[test]
    fn test_reset_with_yes() {
        let mut playbook = Playbook::load(MemoryStore::new());
        playbook.set_role(RoleId::Faculty);
        reset(&mut playbook, true).unwrap();
        assert_eq!(playbook.filter().role, RoleId::Student);
    }
}
