//! Shared utilities for commands

use ai_playbook::catalog::{self, RoleId, ToolId, UseCase};
use ai_playbook::config;
use ai_playbook::engine::Playbook;
use ai_playbook::store::JsonFileStore;
use anyhow::{bail, Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use std::path::PathBuf;

/// Number of tags shown per row, matching the card view
pub const TAGS_SHOWN: usize = 3;

/// Open the persisted session at the resolved store path
pub fn open_playbook(store: Option<PathBuf>) -> Result<Playbook<JsonFileStore>> {
    let path = config::store_path(store).context("Failed to determine store location")?;
    tracing::debug!("Using store {}", path.display());
    Ok(Playbook::load(JsonFileStore::open(path)))
}

/// Parse a tool filter argument; "all" clears the filter
pub fn parse_tool_filter(s: &str) -> Result<Option<ToolId>> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    let tool = s.parse::<ToolId>()?;
    Ok(Some(tool))
}

/// Resolve a title named on the command line to exactly one catalog record
///
/// `role` falls back to the session's current role. Ambiguous and missing
/// titles are errors with a hint listing what would have matched.
pub fn resolve_record(
    title: &str,
    tool: Option<&str>,
    role: Option<RoleId>,
    current_role: RoleId,
) -> Result<&'static UseCase> {
    let tool = tool.map(parse_tool_filter).transpose()?.flatten();
    let role = role.unwrap_or(current_role);
    let records = catalog::all_records();

    let hits = catalog::find_by_title(records, title, tool, Some(role));
    match hits.as_slice() {
        [record] => Ok(*record),
        [] => {
            let elsewhere = catalog::find_by_title(records, title, tool, None);
            if elsewhere.is_empty() {
                bail!(
                    "No use case titled '{}'\n\
                     Hint: Use 'ai-playbook list --query <text>' to search titles",
                    title
                );
            }
            bail!(
                "No {} use case titled '{}'\n\
                 Hint: Found it under {}; pass --role",
                role,
                title,
                describe(&elsewhere)
            );
        }
        many => bail!(
            "'{}' matches {} use cases: {}\n\
             Hint: Narrow it with --tool",
            title,
            many.len(),
            describe(many)
        ),
    }
}

fn describe(records: &[&UseCase]) -> String {
    records
        .iter()
        .map(|r| format!("{}/{}", r.tool, r.role))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render records as a table; `favorite` marks the heart column
pub fn records_table<F>(records: &[&UseCase], favorite: F) -> Table
where
    F: Fn(&UseCase) -> bool,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Tool"),
        Cell::new("Title"),
        Cell::new("Tags"),
        Cell::new("Fav"),
    ]);

    for &record in records {
        table.add_row(vec![
            Cell::new(record.tool.label()),
            Cell::new(&record.title),
            Cell::new(top_tags(record)),
            Cell::new(if favorite(record) { "♥" } else { "" }),
        ]);
    }

    table
}

/// First few tags, comma separated
pub fn top_tags(record: &UseCase) -> String {
    record
        .tags
        .iter()
        .take(TAGS_SHOWN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tool_filter() {
        assert_eq!(parse_tool_filter("all").unwrap(), None);
        assert_eq!(parse_tool_filter("ALL").unwrap(), None);
        assert_eq!(parse_tool_filter("gemini").unwrap(), Some(ToolId::Gemini));
        assert!(parse_tool_filter("bard").is_err());
    }

    #[test]
    fn test_resolve_record_current_role() {
        let record = resolve_record("thesis builder", None, None, RoleId::Student).unwrap();
        assert_eq!(record.title, "Thesis Builder");
        assert_eq!(record.tool, ToolId::Chatgpt);
    }

    #[test]
    fn test_resolve_record_wrong_role_hints() {
        let err = resolve_record("Thesis Builder", None, None, RoleId::Faculty).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("No faculty use case"));
        assert!(msg.contains("chatgpt/student"));
    }

    #[test]
    fn test_resolve_record_explicit_role() {
        let record =
            resolve_record("Rubric Designer", Some("chatgpt"), Some(RoleId::Faculty), RoleId::Student)
                .unwrap();
        assert_eq!(record.role, RoleId::Faculty);
    }

    #[test]
    fn test_resolve_record_unknown() {
        let err = resolve_record("Nope", None, None, RoleId::Student).unwrap_err();
        assert!(err.to_string().contains("No use case titled 'Nope'"));
    }

    #[test]
    fn test_resolve_record_bad_tool() {
        assert!(resolve_record("Thesis Builder", Some("bard"), None, RoleId::Student).is_err());
    }

    #[test]
    fn test_top_tags_limits() {
        let record = UseCase {
            tool: ToolId::Zoom,
            role: RoleId::Student,
            title: "t".to_string(),
            prompt: "p".to_string(),
            tags: ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect(),
            details: None,
        };
        assert_eq!(top_tags(&record), "a, b, c");
    }

    #[test]
    fn test_records_table_marks_favorites() {
        let records: Vec<&UseCase> = catalog::all_records().iter().take(2).collect();
        let table = records_table(&records, |r| r.title == "Thesis Builder").to_string();
        assert!(table.contains("Thesis Builder"));
        assert!(table.contains("Paper Summarizer"));
        assert_eq!(table.matches('♥').count(), 1);
    }
}
