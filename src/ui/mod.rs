pub mod app;
pub mod entry;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod list_item;
pub mod mvi;
pub mod navigation;
pub mod render;
pub mod results;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod thumbnail;

pub use runtime::run;
