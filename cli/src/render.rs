//! Plain-text and JSON rendering for session state. Numbering shown to users is 1-based.

use pitch::{DraftStore, Field, Session, Suggestion, Warning, WarningKind};
use serde_json::{json, Value};

fn kind_tag(kind: WarningKind) -> &'static str {
    match kind {
        WarningKind::Jargon => "jargon",
        WarningKind::Superlative => "superlative",
        WarningKind::Vague => "vague",
    }
}

pub fn warnings(list: &[Warning]) -> String {
    if list.is_empty() {
        return "No warnings.".to_string();
    }
    list.iter()
        .map(|w| format!("! [{}] {}", kind_tag(w.kind), w.message))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn clarity_questions(questions: &[&str]) -> String {
    if questions.is_empty() {
        return String::new();
    }
    let mut out = String::from("A reader might ask:");
    for q in questions {
        out.push_str("\n  - ");
        out.push_str(q);
    }
    out
}

pub fn suggestions(list: &[Suggestion]) -> String {
    if list.is_empty() {
        return "No suggestions.".to_string();
    }
    list.iter()
        .enumerate()
        .map(|(i, s)| match s {
            Suggestion::Edit(e) => format!(
                "{}. [{}] \"{}\" -> \"{}\"\n     {}",
                i + 1,
                e.priority,
                e.original,
                e.replacement,
                e.issue
            ),
            Suggestion::Rewrite { improved_version } => {
                format!("{}. rewrite: {}", i + 1, improved_version)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn drafts(store: &DraftStore) -> String {
    if store.is_empty() {
        return "No saved drafts.".to_string();
    }
    store
        .iter()
        .enumerate()
        .map(|(i, d)| {
            format!(
                "{}. {} [{}/{}] {}\n     id {}",
                i + 1,
                d.saved_at.format("%Y-%m-%d %H:%M"),
                d.audience,
                d.length,
                d.pitch,
                d.id
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Word count line, flagged when over the length mode's hint.
pub fn word_count(session: &Session) -> String {
    let words = session.word_count();
    let max = session.length.max_words();
    if words > max {
        format!("{} words (over the ~{} word target)", words, max)
    } else {
        format!("{} words", words)
    }
}

/// Every field with its question, tip and example; required ones marked `*`.
pub fn fields() -> String {
    Field::ALL
        .iter()
        .map(|f| {
            let marker = if f.is_required() { "*" } else { " " };
            format!(
                "{}{:<16} {} {}\n                  {}",
                marker,
                f.id(),
                f.label(),
                f.tip(),
                f.placeholder()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn session(session: &Session) -> String {
    let mut lines = Vec::new();
    for field in Field::ALL {
        let value = session.inputs.get(field);
        let marker = if field.is_required() { "*" } else { " " };
        let shown = if value.is_empty() { "-" } else { value };
        lines.push(format!("{}{:<16} {}", marker, field.id(), shown));
    }
    lines.push(format!(
        " audience mode    {} ({})",
        session.audience,
        session.audience.description()
    ));
    lines.push(format!(
        " length mode      {} ({})",
        session.length,
        session.length.description()
    ));
    if session.pitch.is_empty() {
        lines.push("\nNo pitch yet.".to_string());
    } else {
        lines.push(format!("\nPitch: {}\n{}", session.pitch, word_count(session)));
    }
    lines.join("\n")
}

pub fn lint_json(list: &[Warning], questions: &[&str]) -> Value {
    json!({ "warnings": list, "clarity_questions": questions })
}

pub fn generate_json(session: &Session, ok: bool) -> Value {
    json!({
        "ok": ok,
        "pitch": session.pitch,
        "words": session.word_count(),
        "audience": session.audience,
        "length": session.length,
    })
}

pub fn iterate_json(list: &[Suggestion]) -> Value {
    json!({ "suggestions": list })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitch::{Edit, LengthMode, Priority};

    #[test]
    fn suggestions_are_numbered_from_one() {
        let list = vec![
            Suggestion::Edit(Edit {
                original: "calendar".into(),
                issue: "vague".into(),
                replacement: "booking calendar".into(),
                priority: Priority::High,
            }),
            Suggestion::Rewrite {
                improved_version: "Acme ends double-booked shoots.".into(),
            },
        ];
        let out = suggestions(&list);
        assert!(out.starts_with("1. [high] \"calendar\" -> \"booking calendar\""));
        assert!(out.contains("2. rewrite: Acme ends double-booked shoots."));
    }

    #[test]
    fn empty_lists_have_a_message() {
        assert_eq!(warnings(&[]), "No warnings.");
        assert_eq!(suggestions(&[]), "No suggestions.");
        assert_eq!(drafts(&DraftStore::new()), "No saved drafts.");
        assert_eq!(clarity_questions(&[]), "");
    }

    #[test]
    fn word_count_flags_overlong_pitch() {
        let mut s = Session::new();
        s.length = LengthMode::SixWords;
        s.pitch = "one two three four five six seven".into();
        assert_eq!(word_count(&s), "7 words (over the ~6 word target)");
        s.pitch = "one two".into();
        assert_eq!(word_count(&s), "2 words");
    }

    #[test]
    fn lint_json_shape() {
        let v = lint_json(&[], &["Who specifically are you targeting?"]);
        assert_eq!(v["warnings"], json!([]));
        assert_eq!(v["clarity_questions"][0], "Who specifically are you targeting?");
    }

    #[test]
    fn generate_json_uses_mode_ids() {
        let mut s = Session::new();
        s.pitch = "Acme ends double-booked shoots.".into();
        let v = generate_json(&s, true);
        assert_eq!(v["audience"], "investor");
        assert_eq!(v["length"], "sentence");
        assert_eq!(v["words"], 4);
    }
}
