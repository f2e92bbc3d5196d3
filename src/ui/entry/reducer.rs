use crate::ui::entry::intent::EntryIntent;
use crate::ui::entry::state::EntryState;
use crate::ui::mvi::Reducer;

pub struct EntryReducer;

impl Reducer for EntryReducer {
    type State = EntryState;
    type Intent = EntryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let EntryState { mut query } = state;
        match intent {
            EntryIntent::Changed { text } => query = text,
            EntryIntent::Insert(ch) => query.push(ch),
            EntryIntent::Paste(text) => {
                query.extend(text.chars().filter(|ch| !matches!(ch, '\n' | '\r')));
            }
            EntryIntent::Backspace => {
                query.pop();
            }
            EntryIntent::Clear => query.clear(),
        }
        EntryState { query }
    }
}
