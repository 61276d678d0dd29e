//! Catalog record types
//!
//! Field names and enum spellings here are the persisted wire format, so
//! changing them breaks stores written by earlier versions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// AI tool a use case is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    Chatgpt,
    Copilot,
    Firefly,
    Gemini,
    Zoom,
}

impl ToolId {
    /// All tools in display order
    pub const ALL: [ToolId; 5] = [
        Self::Chatgpt,
        Self::Copilot,
        Self::Firefly,
        Self::Gemini,
        Self::Zoom,
    ];

    /// Identifier as stored and accepted on the command line
    pub fn id(self) -> &'static str {
        match self {
            Self::Chatgpt => "chatgpt",
            Self::Copilot => "copilot",
            Self::Firefly => "firefly",
            Self::Gemini => "gemini",
            Self::Zoom => "zoom",
        }
    }

    /// Human-readable product name
    pub fn label(self) -> &'static str {
        match self {
            Self::Chatgpt => "ChatGPT",
            Self::Copilot => "Microsoft Copilot",
            Self::Firefly => "Adobe Firefly",
            Self::Gemini => "Google Gemini",
            Self::Zoom => "Zoom AI Companion",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Error returned when parsing an unknown tool or role spelling
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseIdError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl FromStr for ToolId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.id() == wanted)
            .ok_or_else(|| ParseIdError {
                kind: "tool",
                value: s.to_string(),
                expected: Self::ALL.map(|t| t.id()).join(", "),
            })
    }
}

/// Audience a use case is written for
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RoleId {
    #[default]
    Student,
    Faculty,
}

impl RoleId {
    pub const ALL: [RoleId; 2] = [Self::Student, Self::Faculty];

    pub fn id(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Students",
            Self::Faculty => "Faculty",
        }
    }

    /// Banner headline shown above the list
    pub fn headline(self) -> &'static str {
        match self {
            Self::Student => "Do more, stress less.",
            Self::Faculty => "Teach smarter, not harder.",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Self::Student => "Explore AI workflows for studying, projects, and career prep.",
            Self::Faculty => "Design and deliver learning with responsibly applied AI.",
        }
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for RoleId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "students" is what the role label reads, so accept it too
        match s.trim().to_lowercase().as_str() {
            "student" | "students" => Ok(Self::Student),
            "faculty" => Ok(Self::Faculty),
            _ => Err(ParseIdError {
                kind: "role",
                value: s.to_string(),
                expected: Self::ALL.map(|r| r.id()).join(", "),
            }),
        }
    }
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCase {
    pub tool: ToolId,
    pub role: RoleId,
    pub title: String,
    pub prompt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl UseCase {
    /// Composite identity used for favorites
    pub fn key(&self) -> FavoriteKey<'_> {
        FavoriteKey {
            title: &self.title,
            tool: self.tool,
            role: self.role,
        }
    }

    /// Text the search query is matched against, already lowercased
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.prompt, self.tags.join(" ")).to_lowercase()
    }
}

/// The `(title, tool, role)` triple that identifies a favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FavoriteKey<'a> {
    pub title: &'a str,
    pub tool: ToolId,
    pub role: RoleId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_parse() {
        assert_eq!("chatgpt".parse::<ToolId>().unwrap(), ToolId::Chatgpt);
        assert_eq!(" Zoom ".parse::<ToolId>().unwrap(), ToolId::Zoom);
        assert!("bard".parse::<ToolId>().is_err());
    }

    #[test]
    fn test_tool_parse_error_lists_choices() {
        let err = "bard".parse::<ToolId>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown tool 'bard' (expected one of: chatgpt, copilot, firefly, gemini, zoom)"
        );
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("student".parse::<RoleId>().unwrap(), RoleId::Student);
        assert_eq!("Students".parse::<RoleId>().unwrap(), RoleId::Student);
        assert_eq!("FACULTY".parse::<RoleId>().unwrap(), RoleId::Faculty);
        assert!("staff".parse::<RoleId>().is_err());
    }

    #[test]
    fn test_role_default() {
        assert_eq!(RoleId::default(), RoleId::Student);
    }

    #[test]
    fn test_enum_wire_spelling() {
        assert_eq!(serde_json::to_string(&ToolId::Chatgpt).unwrap(), "\"chatgpt\"");
        assert_eq!(serde_json::to_string(&RoleId::Faculty).unwrap(), "\"faculty\"");
        for tool in ToolId::ALL {
            assert_eq!(serde_json::to_string(&tool).unwrap(), format!("\"{}\"", tool.id()));
        }
    }

    #[test]
    fn test_use_case_missing_optional_fields() {
        let json = r#"{"tool":"zoom","role":"faculty","title":"Meeting Notes","prompt":"p"}"#;
        let item: UseCase = serde_json::from_str(json).unwrap();
        assert!(item.tags.is_empty());
        assert!(item.details.is_none());
    }

    #[test]
    fn test_search_text_joins_fields() {
        let item = UseCase {
            tool: ToolId::Chatgpt,
            role: RoleId::Student,
            title: "Thesis Builder".to_string(),
            prompt: "Propose THREE statements".to_string(),
            tags: vec!["Writing".to_string(), "planning".to_string()],
            details: None,
        };
        assert_eq!(
            item.search_text(),
            "thesis builder propose three statements writing planning"
        );
    }
}
