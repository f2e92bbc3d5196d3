use crate::api::ArtRecord;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsIntent {
    /// Screen became active with the search term from navigation.
    Mount { search: String },
    /// Search finished; records are stored unfiltered.
    Loaded { records: Vec<ArtRecord> },
    /// Search failed with a user-facing message.
    Failed { message: String },
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    PageDown { rows: usize },
    PageUp { rows: usize },
}

impl Intent for ResultsIntent {}
