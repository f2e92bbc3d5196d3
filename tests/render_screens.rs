mod common;

use artsearch::api::ArtRecord;
use artsearch::ui::entry::{render_entry, EntryState};
use artsearch::ui::events::AppEvent;
use artsearch::ui::mvi::Reducer;
use artsearch::ui::render::draw;
use artsearch::ui::results::{render_results, ResultsIntent, ResultsReducer, ResultsState};
use artsearch::ui::thumbnail::ThumbnailSize;
use common::{buffer_lines, canned_records, make_app_with_commands, type_text};
use ratatui::backend::TestBackend;
use ratatui::layout::Position;
use ratatui::Terminal;
use std::collections::HashMap;

fn loaded(records: Vec<ArtRecord>) -> ResultsState {
    ResultsReducer::reduce(
        ResultsState::mounted("query"),
        ResultsIntent::Loaded { records },
    )
}

fn render(state: &ResultsState, image_size: Option<ThumbnailSize>) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            render_results(frame, area, state, &HashMap::new(), image_size);
        })
        .unwrap();
    buffer_lines(terminal.backend().buffer())
}

fn count_rows_containing(lines: &[String], needle: &str) -> usize {
    lines.iter().filter(|line| line.contains(needle)).count()
}

#[test]
fn canned_response_renders_one_card() {
    let lines = render(&loaded(canned_records()), None);

    assert!(lines[0].contains("Search Results for: query"));
    // One card: a top and a bottom border
    assert_eq!(count_rows_containing(&lines, "┌"), 1);
    assert_eq!(count_rows_containing(&lines, "└"), 1);
    assert_eq!(count_rows_containing(&lines, "│A"), 1);
    assert_eq!(count_rows_containing(&lines, "│M"), 1);
    assert_eq!(count_rows_containing(&lines, "│B"), 0);
    assert_eq!(count_rows_containing(&lines, "│N"), 0);
}

#[test]
fn empty_response_renders_no_cards() {
    let lines = render(&loaded(vec![]), Some(ThumbnailSize::new(8, 4)));
    assert_eq!(count_rows_containing(&lines, "┌"), 0);
    assert!(lines.iter().any(|l| l.contains("No artworks with images found.")));
}

#[test]
fn title_and_attribution_render_verbatim() {
    let records: Vec<ArtRecord> = serde_json::from_str(
        r#"[{"id":"x","title":"Self-Portrait (1887)","hasImage":true,"principalOrFirstMaker":"Vincent van Gogh"}]"#,
    )
    .unwrap();
    let lines = render(&loaded(records), Some(ThumbnailSize::new(8, 4)));
    assert!(lines.iter().any(|l| l.contains("Self-Portrait (1887)")));
    assert!(lines.iter().any(|l| l.contains("Vincent van Gogh")));
}

#[test]
fn has_image_false_is_hidden_even_with_url() {
    let records: Vec<ArtRecord> = serde_json::from_str(
        r#"[{"id":"h","title":"Hidden","hasImage":false,"webImage":{"url":"http://x/h.jpg"},"principalOrFirstMaker":"Nobody"}]"#,
    )
    .unwrap();
    let lines = render(&loaded(records), None);
    assert_eq!(count_rows_containing(&lines, "Hidden"), 0);
}

#[test]
fn has_image_true_without_url_still_renders() {
    let records: Vec<ArtRecord> = serde_json::from_str(
        r#"[{"id":"n","title":"No Url","hasImage":true,"principalOrFirstMaker":"Someone"}]"#,
    )
    .unwrap();
    let lines = render(&loaded(records), Some(ThumbnailSize::new(8, 4)));
    assert_eq!(count_rows_containing(&lines, "No Url"), 1);
}

#[test]
fn pending_shows_searching() {
    let lines = render(&ResultsState::mounted("query"), None);
    assert!(lines[1].contains("Searching..."));
}

#[test]
fn full_frame_entry_then_results() {
    let (mut app, _rx) = make_app_with_commands();
    type_text(&mut app, "milkmaid");

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| draw(frame, &app)).unwrap();
    let lines = buffer_lines(terminal.backend().buffer());
    assert!(lines.iter().any(|l| l.contains("ART SEARCH")));
    assert!(lines.iter().any(|l| l.contains("milkmaid")));
    assert!(lines.iter().any(|l| l.contains("Enter: Search")));

    app.submit_search();
    let generation = app.mounted_generation().unwrap();
    app.on_event(AppEvent::SearchCompleted {
        generation,
        result: Ok(canned_records()),
    });
    terminal.draw(|frame| draw(frame, &app)).unwrap();
    let lines = buffer_lines(terminal.backend().buffer());
    assert!(lines.iter().any(|l| l.contains("Search Results for: milkmaid")));
    assert!(lines.iter().any(|l| l.contains("1 shown")));
    assert!(lines.iter().any(|l| l.contains("Esc: Back")));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let (mut app, _rx) = make_app_with_commands();
    app.submit_search();
    let generation = app.mounted_generation().unwrap();
    app.on_event(AppEvent::SearchCompleted {
        generation,
        result: Ok(canned_records()),
    });
    for (w, h) in [(1, 1), (5, 3), (10, 7), (20, 8)] {
        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}

#[test]
fn wide_query_keeps_latest_chars_and_cursor_after_them() {
    let state = EntryState::with_query("東京国立博物館の浮世絵コレクション");
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            render_entry(frame, area, &state);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let last = (0..buf.area.height)
        .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
        .find(|&(x, y)| buf[(x, y)].symbol() == "ン")
        .expect("last typed character is on screen");
    let field_row = buffer_lines(&buf)[last.1 as usize].clone();
    assert!(field_row.contains("シ"));
    assert!(!field_row.contains("東"));

    // Field is 30 cells wide and centered; its right border sits at x = 44
    let cursor = terminal.get_cursor_position().unwrap();
    assert_eq!(cursor, Position::new(last.0 + 2, last.1));
    assert!(cursor.x < 44);
    assert_eq!(buf[(44, last.1)].symbol(), "│");
}
