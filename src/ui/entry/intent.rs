use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryIntent {
    /// Replace the field with `text` verbatim.
    Changed { text: String },
    Insert(char),
    /// Bracketed paste; newlines are dropped, everything else kept.
    Paste(String),
    Backspace,
    Clear,
}

impl Intent for EntryIntent {}
