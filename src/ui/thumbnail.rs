//! Half-block thumbnails.
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as
//! the foreground of `▀`, the lower one as the background.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageReader, Limits};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::api::ApiError;
use crate::config::UiConfig;

const UPPER_HALF_BLOCK: &str = "▀";
/// Decoder allocation ceiling for one image.
const MAX_DECODE_ALLOC: u64 = 128 * 1024 * 1024;

/// Thumbnail size in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailSize {
    pub width: u16,
    pub height: u16,
}

impl ThumbnailSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_config(ui: &UiConfig) -> Self {
        Self::new(ui.thumbnail_width, ui.thumbnail_height)
    }

    /// Pixel dimensions: one column per cell, two rows per cell.
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32 * 2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    size: ThumbnailSize,
    /// Row-major RGB, `width * height * 2` entries.
    pixels: Vec<[u8; 3]>,
}

impl Thumbnail {
    /// Scale `image` to exactly fill `size`.
    pub fn from_image(image: &DynamicImage, size: ThumbnailSize) -> Self {
        let (width, height) = size.pixel_dimensions();
        let resized = image
            .resize_exact(width.max(1), height.max(1), FilterType::Triangle)
            .to_rgb8();
        let pixels = resized.pixels().map(|pixel| pixel.0).collect();
        Self { size, pixels }
    }

    /// Decode PNG or JPEG bytes.
    pub fn decode(bytes: &[u8], size: ThumbnailSize) -> Result<Self, ApiError> {
        let mut reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(ImageError::IoError)?;
        let mut limits = Limits::default();
        limits.max_alloc = Some(MAX_DECODE_ALLOC);
        reader.limits(limits);
        let image = reader.decode()?;
        Ok(Self::from_image(&image, size))
    }

    pub fn size(&self) -> ThumbnailSize {
        self.size
    }

    fn pixel(&self, x: u16, y: u16) -> Color {
        let index = y as usize * self.size.width as usize + x as usize;
        match self.pixels.get(index) {
            Some([r, g, b]) => Color::Rgb(*r, *g, *b),
            None => Color::Reset,
        }
    }
}

impl Widget for &Thumbnail {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.size.width.min(area.width);
        let height = self.size.height.min(area.height);
        for row in 0..height {
            for col in 0..width {
                let top = self.pixel(col, row * 2);
                let bottom = self.pixel(col, row * 2 + 1);
                if let Some(cell) = buf.cell_mut(Position::new(area.x + col, area.y + row)) {
                    cell.set_symbol(UPPER_HALF_BLOCK).set_fg(top).set_bg(bottom);
                }
            }
        }
    }
}
