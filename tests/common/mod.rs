//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_collection;

use artsearch::api::{ArtRecord, CollectionResponse};
use artsearch::config::{Config, SecureString};
use artsearch::ui::app::{App, UiCommand};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use tokio::sync::mpsc;

/// Response body used throughout the suite: id "1" has an image, id "2" does not.
pub const CANNED_BODY: &str = r#"{"artObjects":[
    {"id":"1","title":"A","hasImage":true,"webImage":{"url":"http://x/1.jpg"},"principalOrFirstMaker":"M"},
    {"id":"2","title":"B","hasImage":false,"webImage":{"url":"http://x/2.jpg"},"principalOrFirstMaker":"N"}
]}"#;

pub fn canned_records() -> Vec<ArtRecord> {
    serde_json::from_str::<CollectionResponse>(CANNED_BODY)
        .expect("canned body parses")
        .art_objects
}

pub fn test_key() -> SecureString {
    SecureString::new("test-key".to_string())
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    App::new(Config::default(), test_key())
}

/// App wired to a command channel the test can drain.
pub fn make_app_with_commands() -> (App, mpsc::Receiver<UiCommand>) {
    let mut app = make_app();
    let (tx, rx) = mpsc::channel(64);
    app.set_command_sender(tx);
    (app, rx)
}

pub fn drain(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        artsearch::ui::input::handle_key(app, key(KeyCode::Char(ch)));
    }
}

// -- Render helpers -----------------------------------------------------------

/// Buffer contents, one line per row.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}
