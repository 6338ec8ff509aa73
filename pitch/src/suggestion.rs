//! Critique output: discrete edits plus one distinguished full rewrite.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        })
    }
}

/// A single proposed phrase change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub original: String,
    pub issue: String,
    pub replacement: String,
    pub priority: Priority,
}

/// One entry of the suggestion list.
///
/// `Rewrite` is kept apart from `Edit` so callers can render the full replacement pitch
/// differently ("use this" instead of "apply").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Suggestion {
    Edit(Edit),
    Rewrite { improved_version: String },
}

impl Suggestion {
    pub fn as_edit(&self) -> Option<&Edit> {
        match self {
            Suggestion::Edit(e) => Some(e),
            Suggestion::Rewrite { .. } => None,
        }
    }

    pub fn as_rewrite(&self) -> Option<&str> {
        match self {
            Suggestion::Rewrite { improved_version } => Some(improved_version),
            Suggestion::Edit(_) => None,
        }
    }
}
