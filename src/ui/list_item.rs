//! One search result: thumbnail, title, and attribution.

use crate::api::ArtRecord;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PLACEHOLDER};
use crate::ui::thumbnail::{Thumbnail, ThumbnailSize};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Cells between the image slot and the text column.
const IMAGE_GAP: u16 = 2;
/// Text rows reserved when images are disabled.
const MIN_TEXT_ROWS: u16 = 2;

pub struct ArtCard<'a> {
    record: &'a ArtRecord,
    thumbnail: Option<&'a Thumbnail>,
    image_size: Option<ThumbnailSize>,
    selected: bool,
}

impl<'a> ArtCard<'a> {
    pub fn new(record: &'a ArtRecord) -> Self {
        Self {
            record,
            thumbnail: None,
            image_size: None,
            selected: false,
        }
    }

    /// Reserve an image slot of `size`; `None` renders a text-only card.
    pub fn image_size(mut self, size: Option<ThumbnailSize>) -> Self {
        self.image_size = size;
        self
    }

    pub fn thumbnail(mut self, thumbnail: Option<&'a Thumbnail>) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Total rows a card occupies, borders included.
    pub fn height(image_size: Option<ThumbnailSize>) -> u16 {
        let content = image_size
            .map(|size| size.height)
            .unwrap_or(0)
            .max(MIN_TEXT_ROWS);
        content + 2
    }
}

impl Widget for ArtCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.selected { ACCENT } else { GLOBAL_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut text_area = inner;
        if let Some(size) = self.image_size {
            let image_area = Rect {
                width: size.width.min(inner.width),
                height: size.height.min(inner.height),
                ..inner
            };
            match self.thumbnail {
                Some(thumbnail) => thumbnail.render(image_area, buf),
                None => buf.set_style(image_area, Style::default().bg(PLACEHOLDER)),
            }
            let offset = size.width.saturating_add(IMAGE_GAP).min(inner.width);
            text_area = Rect {
                x: inner.x + offset,
                width: inner.width - offset,
                ..inner
            };
        }

        let mut title_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        if self.selected {
            title_style = title_style.fg(ACCENT);
        }
        let lines = vec![
            Line::styled(self.record.title.as_str(), title_style),
            Line::styled(
                self.record.principal_or_first_maker.as_str(),
                Style::default().fg(MUTED_TEXT),
            ),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }
}
