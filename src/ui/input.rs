use crate::ui::app::App;
use crate::ui::entry::EntryIntent;
use crate::ui::navigation::Route;
use crate::ui::results::ResultsIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if matches!(app.route(), Route::Entry) {
        handle_entry_key(app, key);
    } else {
        handle_results_key(app, key);
    }
}

fn handle_entry_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.dispatch_entry(EntryIntent::Clear);
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Enter => app.submit_search(),
        KeyCode::Backspace => app.dispatch_entry(EntryIntent::Backspace),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.dispatch_entry(EntryIntent::Insert(ch));
        }
        _ => {}
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => {
            app.go_back();
        }
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_results(ResultsIntent::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_results(ResultsIntent::SelectNext),
        KeyCode::Home | KeyCode::Char('g') => app.dispatch_results(ResultsIntent::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => app.dispatch_results(ResultsIntent::SelectLast),
        KeyCode::PageDown => {
            let rows = app.page_rows();
            app.dispatch_results(ResultsIntent::PageDown { rows });
        }
        KeyCode::PageUp => {
            let rows = app.page_rows();
            app.dispatch_results(ResultsIntent::PageUp { rows });
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
