//! Favorites commands - add, remove, toggle, export, clear

use ai_playbook::catalog::{RoleId, UseCase};
use ai_playbook::engine::{self, Playbook};
use ai_playbook::store::KeyValueStore;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fs;

/// What to do with a named favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    Add,
    Remove,
    Toggle,
}

/// Apply `action` to `record` and describe the outcome
pub fn apply<S: KeyValueStore>(
    playbook: &mut Playbook<S>,
    record: &UseCase,
    action: FavoriteAction,
) -> String {
    let was = playbook.is_favorite(record);
    let now = match action {
        FavoriteAction::Add => true,
        FavoriteAction::Remove => false,
        FavoriteAction::Toggle => !was,
    };
    playbook.set_favorite(record, now);

    let label = format!("{} ({} · {})", record.title, record.tool.label(), record.role.label());
    match (was, now) {
        (false, true) => format!("{} {}", "Favorited:".green(), label),
        (true, false) => format!("{} {}", "Unfavorited:".yellow(), label),
        (true, true) => format!("Already a favorite: {}", label),
        (false, false) => format!("Not a favorite: {}", label),
    }
}

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Json,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct FavoritesExport<'a> {
    exported_at: String,
    /// None when every role was exported
    role: Option<RoleId>,
    favorites: Vec<&'a UseCase>,
}

/// Export favorites for `role` (or all roles) to a file or stdout
pub fn export<S: KeyValueStore>(
    playbook: &Playbook<S>,
    role: Option<RoleId>,
    format: ExportFormat,
    output: Option<&str>,
) -> Result<()> {
    let content = render_export(playbook.favorites(), role, format, Utc::now())?;

    if let Some(output_path) = output {
        fs::write(output_path, &content)
            .with_context(|| format!("Failed to write: {}", output_path))?;
        println!("Exported to: {}", output_path);
    } else {
        println!("{}", content);
    }

    Ok(())
}

fn render_export(
    favorites: &[UseCase],
    role: Option<RoleId>,
    format: ExportFormat,
    exported_at: DateTime<Utc>,
) -> Result<String> {
    let export = FavoritesExport {
        exported_at: exported_at.to_rfc3339(),
        role,
        favorites: match role {
            Some(role) => engine::favorites_for_role(favorites, role),
            None => favorites.iter().collect(),
        },
    };

    Ok(match format {
        ExportFormat::Markdown => format_as_markdown(&export, exported_at),
        ExportFormat::Json => serde_json::to_string_pretty(&export)?,
    })
}

fn format_as_markdown(export: &FavoritesExport<'_>, exported_at: DateTime<Utc>) -> String {
    let mut md = String::new();

    let scope = export.role.map_or("All roles", |r| r.label());
    md.push_str(&format!("# AI Playbook Favorites: {}\n\n", scope));
    md.push_str(&format!(
        "_Exported: {}_\n\n",
        exported_at.format("%Y-%m-%d %H:%M UTC")
    ));
    md.push_str("---\n\n");

    if export.favorites.is_empty() {
        md.push_str("_No favorites yet._\n");
        return md;
    }

    for item in &export.favorites {
        md.push_str(&format!("## {}\n\n", item.title));
        md.push_str(&format!(
            "**{}** · {}\n\n",
            item.tool.label(),
            item.role.label()
        ));
        md.push_str("```text\n");
        md.push_str(&item.prompt);
        md.push_str("\n```\n\n");

        if !item.tags.is_empty() {
            let tags: Vec<String> = item.tags.iter().map(|t| format!("`{}`", t)).collect();
            md.push_str(&format!("Tags: {}\n\n", tags.join(" ")));
        }

        if let Some(details) = item.details.as_deref().filter(|d| !d.is_empty()) {
            md.push_str(details);
            md.push_str("\n\n");
        }
    }

    md
}
