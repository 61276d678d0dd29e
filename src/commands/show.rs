//! Show command - Details view for a single use case

use ai_playbook::catalog::UseCase;
use owo_colors::OwoColorize;

/// Format the details view
pub fn format_details(record: &UseCase, favorite: bool) -> String {
    let mut lines = vec![];

    let heart = if favorite { " ♥" } else { "" };
    lines.push(format!("{}{}", record.title.bold(), heart));
    lines.push(format!(
        "{} · {}",
        record.tool.label(),
        record.role.label()
    ));
    lines.push(String::new());

    lines.push(format!("{}", "Sample prompt".dimmed()));
    lines.push(record.prompt.clone());

    if !record.tags.is_empty() {
        lines.push(String::new());
        lines.push(format!("Tags: {}", record.tags.join(", ")));
    }

    if let Some(details) = record.details.as_deref().filter(|d| !d.is_empty()) {
        lines.push(String::new());
        lines.push(details.to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_playbook::catalog::{all_records, RoleId, ToolId};

    #[test]
    fn test_format_details() {
        let output = format_details(&all_records()[0], false);
        assert!(output.contains("Thesis Builder"));
        assert!(output.contains("ChatGPT · Students"));
        assert!(output.contains("propose 3 clear thesis statements"));
        assert!(output.contains("Tags: writing, planning"));
        assert!(!output.contains('♥'));
    }

    #[test]
    fn test_format_details_favorite_and_extra_text() {
        let record = UseCase {
            tool: ToolId::Firefly,
            role: RoleId::Faculty,
            title: "Print Prep".to_string(),
            prompt: "Export CMYK.".to_string(),
            tags: vec![],
            details: Some("Check bleed settings with the print shop.".to_string()),
        };
        let output = format_details(&record, true);
        assert!(output.contains('♥'));
        assert!(output.contains("Adobe Firefly · Faculty"));
        assert!(!output.contains("Tags:"));
        assert!(output.ends_with("Check bleed settings with the print shop."));
    }
}
