use crate::api::ArtRecord;
use crate::ui::mvi::UiState;

/// Where the one search of a results screen stands.
///
/// `Pending` moves to `Loaded` or `Failed` once and never returns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Pending,
    Loaded,
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultsState {
    /// Search term received from the entry screen.
    pub search: String,
    /// `artObjects` exactly as parsed, unfiltered.
    pub records: Vec<ArtRecord>,
    pub phase: FetchPhase,
    /// Index into `visible()`.
    pub selected: usize,
}

impl UiState for ResultsState {}

impl ResultsState {
    pub fn mounted(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    /// Records that get a list item: those with `has_image` set.
    pub fn visible(&self) -> impl Iterator<Item = &ArtRecord> {
        self.records.iter().filter(|record| record.has_image)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    pub fn selected_record(&self) -> Option<&ArtRecord> {
        self.visible().nth(self.selected)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, FetchPhase::Pending)
    }
}
