//! List command - Show the use cases visible under the current view

use ai_playbook::catalog::{self, RoleId, ToolId, UseCase};
use ai_playbook::engine::{self, Playbook};
use ai_playbook::store::KeyValueStore;
use owo_colors::OwoColorize;

use super::utils;

/// Options for the list command
///
/// Each `Some` overrides the persisted view state for this run only.
#[derive(Debug, Default)]
pub struct ListOptions {
    pub role: Option<RoleId>,
    /// `Some(None)` means all tools
    pub tool: Option<Option<ToolId>>,
    pub query: Option<String>,
    /// Limit number of results
    pub limit: Option<usize>,
    /// List the role's favorites instead of the catalog
    pub favorites: bool,
}

/// Build the list output for `playbook` under `options`
pub fn execute<S: KeyValueStore>(playbook: &Playbook<S>, options: &ListOptions) -> String {
    let state = playbook.filter();
    let role = options.role.unwrap_or(state.role);
    let tool = options.tool.unwrap_or(state.tool);
    let query = options.query.as_deref().unwrap_or(&state.query);

    let mut records: Vec<&UseCase> = if options.favorites {
        engine::favorites_for_role(playbook.favorites(), role)
    } else {
        engine::visible(catalog::all_records(), role, tool, query)
    };

    let total_count = records.len();
    if let Some(n) = options.limit {
        records.truncate(n);
    }

    let mut lines = vec![
        format!("{}", role.headline().bold()),
        format!("{}", role.tagline().dimmed()),
        String::new(),
    ];

    if !options.favorites {
        lines.push(describe_filter(role, tool, query));
    }

    if total_count == 0 {
        lines.push(if options.favorites {
            format!("No favorites for {} yet.", role.label())
        } else {
            "No use cases match.".to_string()
        });
        return lines.join("\n");
    }

    let favorites = playbook.favorites();
    lines.push(
        utils::records_table(&records, |r| engine::is_favorite(favorites, r)).to_string(),
    );
    lines.push(String::new());

    let noun = if options.favorites {
        "favorites"
    } else {
        "use cases"
    };
    if records.len() < total_count {
        lines.push(format!(
            "Showing {} of {} {}",
            records.len(),
            total_count,
            noun
        ));
    } else {
        lines.push(format!("{} {}", total_count, noun));
    }

    lines.join("\n")
}

fn describe_filter(role: RoleId, tool: Option<ToolId>, query: &str) -> String {
    let tool = tool.map_or("All tools", |t| t.label());
    let mut line = format!("{} · {}", role.label(), tool);
    if !query.is_empty() {
        line.push_str(&format!(" · \"{}\"", query));
    }
    line
}
