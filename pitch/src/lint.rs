//! Heuristic linter: advisory warnings from static wordlists.
//!
//! Wordlists are static tables of `{category, strategy, terms}`. The matching strategy is
//! a property of the wordlist, not of the call site:
//!
//! - [`MatchStrategy::Substring`]: case-insensitive substring over all fields joined.
//! - [`MatchStrategy::WholeWord`]: case-insensitive word-boundary match over the same text
//!   (`firstly` does not match `first`).
//! - [`MatchStrategy::AudienceToken`]: audience field only; equals the term or contains it
//!   as a whitespace-separated token.
//!
//! [`lint`] is pure: identical inputs yield identical warnings. Output is grouped by pass
//! in [`WORDLISTS`] order and, within a pass, follows wordlist order.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::input::InputSet;

/// Warning category; serialized as `jargon`, `superlative`, `vague`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningKind {
    Jargon,
    Superlative,
    Vague,
}

/// How a wordlist's terms are matched against input text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStrategy {
    Substring,
    WholeWord,
    AudienceToken,
}

/// One static wordlist.
#[derive(Debug)]
pub struct Wordlist {
    pub kind: WarningKind,
    pub strategy: MatchStrategy,
    pub terms: &'static [&'static str],
}

pub const JARGON_TERMS: &[&str] = &[
    "platform",
    "leverage",
    "synergy",
    "disrupt",
    "paradigm",
    "ecosystem",
    "scalable",
    "innovative",
    "cutting-edge",
    "revolutionary",
    "game-changing",
    "world-class",
    "next-gen",
    "ai-powered",
    "blockchain",
    "web3",
    "holistic",
    "robust",
    "seamless",
];

pub const SUPERLATIVE_TERMS: &[&str] = &[
    "first",
    "only",
    "best",
    "biggest",
    "fastest",
    "cheapest",
    "most",
    "leading",
    "top",
    "premier",
    "ultimate",
    "unrivaled",
    "unique",
];

pub const VAGUE_AUDIENCE_TERMS: &[&str] = &[
    "everyone",
    "businesses",
    "companies",
    "people",
    "users",
    "consumers",
    "customers",
    "organizations",
    "individuals",
];

/// Passes in output order.
pub static WORDLISTS: [Wordlist; 3] = [
    Wordlist {
        kind: WarningKind::Jargon,
        strategy: MatchStrategy::Substring,
        terms: JARGON_TERMS,
    },
    Wordlist {
        kind: WarningKind::Superlative,
        strategy: MatchStrategy::WholeWord,
        terms: SUPERLATIVE_TERMS,
    },
    Wordlist {
        kind: WarningKind::Vague,
        strategy: MatchStrategy::AudienceToken,
        terms: VAGUE_AUDIENCE_TERMS,
    },
];

/// Word-boundary patterns for every term of every whole-word list, compiled once.
static WHOLE_WORD_PATTERNS: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    WORDLISTS
        .iter()
        .filter(|list| list.strategy == MatchStrategy::WholeWord)
        .flat_map(|list| list.terms.iter())
        .filter_map(|term| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
                .ok()
                .map(|re| (*term, re))
        })
        .collect()
});

/// One advisory warning. Owned snapshot; never borrows from the input set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub term: String,
    pub message: String,
}

impl Warning {
    fn new(kind: WarningKind, term: &str) -> Self {
        let message = match kind {
            WarningKind::Jargon => format!("\"{}\" is jargon, be more specific", term),
            WarningKind::Superlative => {
                format!("\"{}\" signals inexperience, let others say it", term)
            }
            WarningKind::Vague => format!("\"{}\" is too vague as an audience", term),
        };
        Self {
            kind,
            term: term.to_string(),
            message,
        }
    }
}

/// Text a wordlist is matched against, lowercased once per call.
struct LintText {
    all: String,
    audience: String,
}

impl LintText {
    fn new(inputs: &InputSet) -> Self {
        Self {
            all: inputs.joined().to_lowercase(),
            audience: inputs.audience.trim().to_lowercase(),
        }
    }
}

fn term_matches(strategy: MatchStrategy, term: &str, text: &LintText) -> bool {
    match strategy {
        MatchStrategy::Substring => text.all.contains(term),
        MatchStrategy::WholeWord => WHOLE_WORD_PATTERNS
            .get(term)
            .is_some_and(|re| re.is_match(&text.all)),
        MatchStrategy::AudienceToken => {
            !text.audience.is_empty()
                && (text.audience == term || text.audience.split_whitespace().any(|w| w == term))
        }
    }
}

/// Runs every pass over the input set and returns all warnings.
pub fn lint(inputs: &InputSet) -> Vec<Warning> {
    let text = LintText::new(inputs);
    WORDLISTS
        .iter()
        .flat_map(|list| {
            let text = &text;
            list.terms
                .iter()
                .filter(move |term| term_matches(list.strategy, term, text))
                .map(move |term| Warning::new(list.kind, term))
        })
        .collect()
}
