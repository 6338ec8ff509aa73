//! Response interpreter: turns the Messages API JSON relayed by the gateway into a pitch
//! or a suggestion list.
//!
//! - **Generate**: first text block, trimmed, one pair of surrounding quotes removed.
//! - **Iterate**: two stages. [`strip_code_fence`] removes the ```` ```json ```` wrapper the
//!   model sometimes adds, then the text is parsed strictly (`suggestions` is required).
//!   The result is a typed [`Critique`]; failure is a value, never a panic.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::suggestion::{Edit, Priority, Suggestion};

/// Issue text of the synthetic suggestion produced when a critique cannot be read.
pub const CRITIQUE_FAILED_ISSUE: &str = "Could not analyze pitch. Please try again.";

const QUOTE_CHARS: [char; 6] = ['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterpretError {
    #[error("model response has no text block")]
    NoTextBlock,
    #[error("model response text is empty")]
    EmptyText,
}

/// Text of the first `content[]` block whose `type` is `text`.
pub fn first_text_block(response: &Value) -> Option<&str> {
    response
        .get("content")?
        .as_array()?
        .iter()
        .find(|block| block.get("type").and_then(Value::as_str) == Some("text"))?
        .get("text")?
        .as_str()
}

/// Removes one leading and one trailing quote character when both ends are quotes.
fn strip_surrounding_quotes(text: &str) -> &str {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if QUOTE_CHARS.contains(&first) && QUOTE_CHARS.contains(&last) => {
            &text[first.len_utf8()..text.len() - last.len_utf8()]
        }
        _ => text,
    }
}

/// Extracts the drafted pitch from a generate response.
pub fn interpret_pitch(response: &Value) -> Result<String, InterpretError> {
    let text = first_text_block(response).ok_or(InterpretError::NoTextBlock)?;
    let pitch = strip_surrounding_quotes(text.trim()).trim();
    if pitch.is_empty() {
        return Err(InterpretError::EmptyText);
    }
    Ok(pitch.to_string())
}

/// Removes a surrounding Markdown code fence (```` ```json ```` or ```` ``` ````) and trims.
/// Text without a fence is returned trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let mut s = text.trim();
    if let Some(rest) = s.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        s = rest.trim_start_matches([' ', '\t']);
        s = s.strip_prefix("\r\n").or_else(|| s.strip_prefix('\n')).unwrap_or(s);
    }
    if let Some(rest) = s.trim_end().strip_suffix("```") {
        s = rest;
    }
    s.trim()
}

#[derive(Debug, Deserialize)]
struct RawSuggestion {
    original: String,
    issue: String,
    #[serde(default)]
    replacement: String,
    priority: Priority,
}

/// Strict shape of the critique JSON. `suggestions` is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CritiqueReply {
    suggestions: Vec<RawSuggestion>,
    #[serde(default)]
    improved_version: Option<String>,
}

/// Outcome of interpreting a critique response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Critique {
    Parsed(Vec<Suggestion>),
    Failed(String),
}

impl Critique {
    /// Suggestion list to show. A failure becomes exactly one high-priority suggestion.
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        match self {
            Critique::Parsed(list) => list,
            Critique::Failed(_) => vec![failure_suggestion()],
        }
    }
}

/// The single synthetic suggestion shown when a critique failed.
pub fn failure_suggestion() -> Suggestion {
    Suggestion::Edit(Edit {
        original: "Error".to_string(),
        issue: CRITIQUE_FAILED_ISSUE.to_string(),
        replacement: String::new(),
        priority: Priority::High,
    })
}

/// Parses critique text (possibly fenced). `improvedVersion`, when present and non-empty,
/// is appended as [`Suggestion::Rewrite`].
pub fn parse_critique_text(text: &str) -> Critique {
    let body = strip_code_fence(text);
    let reply: CritiqueReply = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return Critique::Failed(format!("parse error: {}", e)),
    };

    let mut list: Vec<Suggestion> = reply
        .suggestions
        .into_iter()
        .map(|s| {
            Suggestion::Edit(Edit {
                original: s.original,
                issue: s.issue,
                replacement: s.replacement,
                priority: s.priority,
            })
        })
        .collect();
    if let Some(improved) = reply.improved_version.filter(|v| !v.trim().is_empty()) {
        list.push(Suggestion::Rewrite {
            improved_version: improved,
        });
    }
    Critique::Parsed(list)
}

/// Interprets an iterate response relayed by the gateway.
pub fn interpret_critique(response: &Value) -> Critique {
    match first_text_block(response) {
        Some(text) => parse_critique_text(text),
        None => Critique::Failed(InterpretError::NoTextBlock.to_string()),
    }
}
