//! artsearch: search the Rijksmuseum collection from a terminal.
//!
//! An entry screen takes a search term; a results screen runs one search and
//! lists the matching artworks that have an image.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
pub mod worker;
