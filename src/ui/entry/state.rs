use crate::ui::mvi::UiState;

/// Search-entry screen state: the text field's current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryState {
    pub query: String,
}

impl UiState for EntryState {}

impl EntryState {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}
