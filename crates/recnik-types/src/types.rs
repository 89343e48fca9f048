use serde::{Deserialize, Serialize};

/// One glossary pair, exactly as the user entered it.
///
/// The term keeps its original casing; case folding happens only on the
/// lookup key, so results render what was typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub term: String,
    pub translation: String,
}

impl Entry {
    pub fn new(term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
        }
    }
}

/// User actions the host forwards to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    AddEntry { term: String, translation: String },
    Search(String),
    Clear,
    Count,
    Quit,
}
