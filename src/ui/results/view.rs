use std::collections::HashMap;
use std::ops::Range;

use crate::ui::list_item::ArtCard;
use crate::ui::results::state::{FetchPhase, ResultsState};
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::ui::thumbnail::{Thumbnail, ThumbnailSize};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render_results(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &ResultsState,
    thumbnails: &HashMap<String, Thumbnail>,
    image_size: Option<ThumbnailSize>,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Search Results for: ", Style::default().fg(HEADER_TEXT)),
        Span::styled(
            state.search.as_str(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(title, Rect { height: 1, ..area });

    let mut list = Rect {
        y: area.y + 1,
        height: area.height - 1,
        ..area
    };

    if let Some(status) = status_line(state) {
        if list.height > 0 {
            frame.render_widget(Paragraph::new(status), Rect { height: 1, ..list });
            list.y += 1;
            list.height -= 1;
        }
    }

    let card_height = ArtCard::height(image_size);
    let window = visible_window(state.selected, state.visible_count(), list.height, card_height);
    let mut y = list.y;
    for (index, record) in state
        .visible()
        .enumerate()
        .skip(window.start)
        .take(window.len())
    {
        let bottom = list.y + list.height;
        let card = Rect {
            y,
            height: card_height.min(bottom - y),
            ..list
        };
        let widget = ArtCard::new(record)
            .image_size(image_size)
            .thumbnail(thumbnails.get(&record.id))
            .selected(index == state.selected);
        frame.render_widget(widget, card);
        y += card.height;
    }
}

/// Indices of the visible records that fit in `list_height` rows while
/// keeping `selected` on screen. At least one card is drawn (clipped) when
/// the list is not empty.
pub fn visible_window(
    selected: usize,
    count: usize,
    list_height: u16,
    card_height: u16,
) -> Range<usize> {
    if count == 0 || list_height == 0 {
        return 0..0;
    }
    let per_page = ((list_height / card_height.max(1)) as usize).max(1);
    let selected = selected.min(count - 1);
    let start = (selected + 1).saturating_sub(per_page);
    start..(start + per_page).min(count)
}

fn status_line(state: &ResultsState) -> Option<Line<'static>> {
    match &state.phase {
        FetchPhase::Pending => Some(Line::styled(
            " Searching...",
            Style::default().fg(MUTED_TEXT),
        )),
        FetchPhase::Failed { message } => Some(Line::styled(
            format!(" {message}"),
            Style::default().fg(STATUS_ERROR),
        )),
        FetchPhase::Loaded if state.visible_count() == 0 => Some(Line::styled(
            " No artworks with images found.",
            Style::default().fg(MUTED_TEXT),
        )),
        FetchPhase::Loaded => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_starts_at_top() {
        assert_eq!(visible_window(0, 10, 20, 4), 0..5);
    }

    #[test]
    fn window_follows_selection() {
        assert_eq!(visible_window(7, 10, 20, 4), 3..8);
        assert_eq!(visible_window(9, 10, 20, 4), 5..10);
    }

    #[test]
    fn window_never_exceeds_count() {
        assert_eq!(visible_window(0, 2, 40, 4), 0..2);
        assert_eq!(visible_window(5, 2, 40, 4), 0..2);
    }

    #[test]
    fn window_shows_one_card_when_too_short() {
        assert_eq!(visible_window(3, 10, 2, 10), 3..4);
    }

    #[test]
    fn window_empty_cases() {
        assert_eq!(visible_window(0, 0, 20, 4), 0..0);
        assert_eq!(visible_window(0, 5, 0, 4), 0..0);
    }
}
