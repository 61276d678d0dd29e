//! Static catalog of AI use cases
//!
//! The table is compiled into the binary and built once on first access.
//! Nothing here mutates after that.

mod data;
pub mod model;

use std::sync::OnceLock;

pub use model::{FavoriteKey, ParseIdError, RoleId, ToolId, UseCase};

static RECORDS: OnceLock<Vec<UseCase>> = OnceLock::new();

/// Every record in catalog order (tool order, students before faculty)
pub fn all_records() -> &'static [UseCase] {
    RECORDS.get_or_init(data::build)
}

/// Look up records by title, case-insensitively
///
/// Titles are only unique within a tool and role, so callers narrow with
/// `tool` and `role` and decide what to do with several hits.
pub fn find_by_title<'a>(
    records: &'a [UseCase],
    title: &str,
    tool: Option<ToolId>,
    role: Option<RoleId>,
) -> Vec<&'a UseCase> {
    let wanted = title.trim().to_lowercase();
    records
        .iter()
        .filter(|r| r.title.to_lowercase() == wanted)
        .filter(|r| tool.map_or(true, |t| r.tool == t))
        .filter(|r| role.map_or(true, |ro| r.role == ro))
        .collect()
}
