mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ResultsIntent;
pub use reducer::ResultsReducer;
pub use state::{FetchPhase, ResultsState};
pub use view::{render_results, visible_window};
