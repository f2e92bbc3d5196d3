use crate::ui::entry::state::EntryState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const APP_TITLE: &str = "ART SEARCH";

const FORM_HEIGHT: u16 = 7;
const MIN_FIELD_WIDTH: u16 = 20;

pub fn render_entry(frame: &mut Frame<'_>, area: Rect, state: &EntryState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let field_width = (area.width / 2).max(MIN_FIELD_WIDTH);
    let form = centered_rect_by_size(area, field_width, FORM_HEIGHT);

    let title = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, Rect { height: form.height.min(1), ..form });

    let field = Rect {
        y: form.y + 2,
        height: 3,
        ..form
    }
    .intersection(area);
    let inner_width = field.width.saturating_sub(2) as usize;
    // One cell stays free for the cursor
    let visible = visible_tail(&state.query, inner_width.saturating_sub(1));
    let input = Paragraph::new(Span::styled(
        visible.to_string(),
        Style::default().fg(HEADER_TEXT),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(input, field);

    if field.height == 3 && field.width > 2 {
        let x = field.x + 1 + visible.width() as u16;
        frame.set_cursor_position(Position::new(x, field.y + 1));
    }

    let button = Rect {
        y: form.y + 6,
        height: 1,
        ..form
    }
    .intersection(area);
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("[ Search ]", Style::default().fg(ACCENT)),
        Span::styled("  Enter", Style::default().fg(MUTED_TEXT)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, button);
}

/// Longest trailing slice of `text` that fits in `max_cells` terminal cells.
fn visible_tail(text: &str, max_cells: usize) -> &str {
    if text.width() <= max_cells {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > max_cells {
            break;
        }
        start = idx;
    }
    &text[start..]
}
