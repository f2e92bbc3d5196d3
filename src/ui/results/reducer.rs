use crate::ui::mvi::Reducer;
use crate::ui::results::intent::ResultsIntent;
use crate::ui::results::state::{FetchPhase, ResultsState};

pub struct ResultsReducer;

impl Reducer for ResultsReducer {
    type State = ResultsState;
    type Intent = ResultsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ResultsIntent::Mount { search } => ResultsState::mounted(search),
            ResultsIntent::Loaded { records } => match state.phase {
                FetchPhase::Pending => ResultsState {
                    records,
                    phase: FetchPhase::Loaded,
                    selected: 0,
                    ..state
                },
                // Only one fetch per screen lifetime
                _ => state,
            },
            ResultsIntent::Failed { message } => match state.phase {
                FetchPhase::Pending => ResultsState {
                    phase: FetchPhase::Failed { message },
                    ..state
                },
                _ => state,
            },
            ResultsIntent::SelectNext => {
                let selected = state.selected.saturating_add(1);
                with_selection(state, selected)
            }
            ResultsIntent::SelectPrevious => {
                let selected = state.selected.saturating_sub(1);
                with_selection(state, selected)
            }
            ResultsIntent::SelectFirst => with_selection(state, 0),
            ResultsIntent::SelectLast => with_selection(state, usize::MAX),
            ResultsIntent::PageDown { rows } => {
                let selected = state.selected.saturating_add(rows.max(1));
                with_selection(state, selected)
            }
            ResultsIntent::PageUp { rows } => {
                let selected = state.selected.saturating_sub(rows.max(1));
                with_selection(state, selected)
            }
        }
    }
}

/// Store `selected`, clamped to the visible list.
fn with_selection(state: ResultsState, selected: usize) -> ResultsState {
    let max = state.visible_count().saturating_sub(1);
    ResultsState {
        selected: selected.min(max),
        ..state
    }
}
