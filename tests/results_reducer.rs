mod common;

use artsearch::ui::mvi::Reducer;
use artsearch::ui::results::{FetchPhase, ResultsIntent, ResultsReducer, ResultsState};
use common::canned_records;

fn loaded() -> ResultsState {
    ResultsReducer::reduce(
        ResultsState::mounted("x"),
        ResultsIntent::Loaded {
            records: canned_records(),
        },
    )
}

#[test]
fn mount_starts_pending_and_empty() {
    let state = ResultsReducer::reduce(
        ResultsState::default(),
        ResultsIntent::Mount {
            search: "rembrandt".to_string(),
        },
    );
    assert_eq!(state.search, "rembrandt");
    assert!(state.records.is_empty());
    assert_eq!(state.phase, FetchPhase::Pending);
}

#[test]
fn loaded_stores_records_unfiltered() {
    let state = loaded();
    assert_eq!(state.phase, FetchPhase::Loaded);
    assert_eq!(state.records.len(), 2);
    let ids: Vec<&str> = state.visible().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);
}

#[test]
fn second_load_is_ignored() {
    let state = ResultsReducer::reduce(loaded(), ResultsIntent::Loaded { records: vec![] });
    assert_eq!(state.records.len(), 2);
}

#[test]
fn failure_after_load_is_ignored() {
    let state = ResultsReducer::reduce(
        loaded(),
        ResultsIntent::Failed {
            message: "late".to_string(),
        },
    );
    assert_eq!(state.phase, FetchPhase::Loaded);
}

#[test]
fn failure_while_pending_keeps_search() {
    let state = ResultsReducer::reduce(
        ResultsState::mounted("vermeer"),
        ResultsIntent::Failed {
            message: "The search timed out".to_string(),
        },
    );
    assert_eq!(state.search, "vermeer");
    assert_eq!(
        state.phase,
        FetchPhase::Failed {
            message: "The search timed out".to_string()
        }
    );
}

#[test]
fn load_after_failure_is_ignored() {
    let failed = ResultsReducer::reduce(
        ResultsState::mounted("x"),
        ResultsIntent::Failed {
            message: "boom".to_string(),
        },
    );
    let state = ResultsReducer::reduce(
        failed,
        ResultsIntent::Loaded {
            records: canned_records(),
        },
    );
    assert!(state.records.is_empty());
}

#[test]
fn empty_result_has_no_visible_records() {
    let state = ResultsReducer::reduce(
        ResultsState::mounted("zzz"),
        ResultsIntent::Loaded { records: vec![] },
    );
    assert_eq!(state.visible_count(), 0);
    assert!(state.selected_record().is_none());
}
