//! # Label Compositor
//!
//! Renders one [`Record`] into a fixed-size RGB label: the display name as a
//! title, the wrapped tag text with `#` words emphasized, and one or two QR
//! codes for the record's links.
//!
//! Composition runs in two steps so the layout can be inspected without
//! rasterizing anything:
//!
//! ```text
//! Record ──► LabelLayout::plan ──► render ──► RgbImage
//!            (lines, words,        (fonts,
//!             QR payloads/anchors)  QR rasters)
//! ```
//!
//! ## Example
//!
//! ```
//! use siroco::compose::{compose, Record};
//! use siroco::config::LayoutConfig;
//! use siroco::font::FontSet;
//!
//! let record = Record {
//!     display_name: "La Banda".to_string(),
//!     tag_text: "#cumbia #música en vivo".to_string(),
//!     link1: Some("https://example.com".to_string()),
//!     link2: None,
//! };
//!
//! let label = compose(&record, &LayoutConfig::default(), &FontSet::embedded()).unwrap();
//! assert_eq!(label.dimensions(), (800, 400));
//! ```

use image::{DynamicImage, Rgb, RgbImage, imageops};

use crate::config::LayoutConfig;
use crate::error::SirocoError;
use crate::font::FontSet;
use crate::qr;
use crate::text::{self, Word};

/// One row of the input table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub display_name: String,
    pub tag_text: String,
    pub link1: Option<String>,
    pub link2: Option<String>,
}

/// Where a QR code goes and what it encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrPlacement {
    pub payload: String,
    pub x: i32,
    pub y: i32,
}

/// Everything about a label that does not depend on fonts or pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelLayout {
    pub title: String,
    /// Tag lines, each a list of classified words (never empty)
    pub lines: Vec<Vec<Word>>,
    /// One centered QR, or two side by side
    pub qr: Vec<QrPlacement>,
}

impl LabelLayout {
    pub fn plan(record: &Record, config: &LayoutConfig) -> Self {
        let lines = text::layout_lines(&record.tag_text, config.chars_per_line, config.max_lines);
        let y = config.qr_y(lines.len());

        let payload = |link: &Option<String>| {
            qr::resolve_link(link.as_deref(), &config.fallback_payload, &config.search_url)
        };

        let qr = if qr::is_blank(record.link2.as_deref()) {
            vec![QrPlacement {
                payload: payload(&record.link1),
                x: config.single_qr_x(),
                y,
            }]
        } else {
            vec![
                QrPlacement {
                    payload: payload(&record.link1),
                    x: config.qr_pair_x[0],
                    y,
                },
                QrPlacement {
                    payload: payload(&record.link2),
                    x: config.qr_pair_x[1],
                    y,
                },
            ]
        };

        Self {
            title: record.display_name.clone(),
            lines,
            qr,
        }
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Compose the label for `record`.
pub fn compose(
    record: &Record,
    config: &LayoutConfig,
    fonts: &FontSet,
) -> Result<RgbImage, SirocoError> {
    render(&LabelLayout::plan(record, config), config, fonts)
}

/// Rasterize a planned layout onto a fresh canvas.
pub fn render(
    layout: &LabelLayout,
    config: &LayoutConfig,
    fonts: &FontSet,
) -> Result<RgbImage, SirocoError> {
    let mut canvas = RgbImage::from_pixel(
        config.canvas_width,
        config.canvas_height,
        Rgb(config.background),
    );

    let (title_x, title_y) = config.title_origin;
    fonts.regular.draw(
        &mut canvas,
        title_x,
        title_y,
        config.title_px,
        &layout.title,
        config.text_rgb(),
    );

    let (origin_x, mut y) = config.tag_origin;
    for line in &layout.lines {
        let mut x = origin_x;
        for word in line {
            let (face, color) = if word.is_emphasized() {
                (&fonts.bold, config.emphasis_rgb())
            } else {
                (&fonts.regular, config.text_rgb())
            };
            face.draw(&mut canvas, x, y, config.tag_px, &word.text, color);
            x += face.measure(&word.text, config.tag_px) as i32 + config.word_gap;
        }
        y += config.line_height;
    }

    for placement in &layout.qr {
        let code = qr::render(&placement.payload, config.qr_module_px, config.qr_size)?;
        let code = DynamicImage::ImageLuma8(code).to_rgb8();
        imageops::replace(
            &mut canvas,
            &code,
            i64::from(placement.x),
            i64::from(placement.y),
        );
    }

    Ok(canvas)
}
