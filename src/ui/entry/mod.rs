mod intent;
mod reducer;
mod state;
mod view;

pub use intent::EntryIntent;
pub use reducer::EntryReducer;
pub use state::EntryState;
pub use view::{render_entry, APP_TITLE};
