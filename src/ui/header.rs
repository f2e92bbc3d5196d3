use crate::ui::entry::APP_TITLE;
use crate::ui::navigation::Route;
use crate::ui::results::{FetchPhase, ResultsState};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    route: &'a Route,
    results: &'a ResultsState,
}

impl<'a> Header<'a> {
    pub fn new(route: &'a Route, results: &'a ResultsState) -> Self {
        Self { route, results }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                APP_TITLE,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ];

        if let Route::Results { params } = self.route {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(format!("\"{}\"", params.search), text_style));
            spans.push(Span::styled("  │  ", separator_style));
            let status = match &self.results.phase {
                FetchPhase::Pending => "searching".to_string(),
                FetchPhase::Loaded => format!("{} shown", self.results.visible_count()),
                FetchPhase::Failed { .. } => "failed".to_string(),
            };
            spans.push(Span::styled(status, text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
