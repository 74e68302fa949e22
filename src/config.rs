//! # Layout Configuration
//!
//! Every dimension, anchor and literal used to compose a label lives here.
//!
//! ## Default Layout
//!
//! ```text
//! (0,0) ┌──────────────────────────────────────────────────┐
//!       │ (20,20) DISPLAY NAME                             │
//!       │ (20,60) #tag plain words #tag ...                │
//!       │         second tag line                          │
//!       │                                                  │
//!       │   ┌────────┐ (50,y)             ┌────────┐ (450,y)│
//!       │   │  QR 1  │                    │  QR 2  │       │
//!       │   └────────┘                    └────────┘       │
//!       └──────────────────────────────────────────────────┘ (800,400)
//!
//! y = qr_top + lines * margin_per_line
//! ```
//!
//! A single QR is centered horizontally instead of using the pair anchors.
//!
//! ## Usage
//!
//! ```
//! use siroco::config::LayoutConfig;
//!
//! let config = LayoutConfig::default();
//! assert_eq!(config.canvas_width, 800);
//! assert_eq!(config.single_qr_x(), 250);
//! ```

use image::Rgb;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::SirocoError;

/// Paths to the TTF/OTF faces used for text.
///
/// Unset (or unreadable) faces fall back to the embedded bitmap font.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Face for the title and plain tag words
    pub regular: Option<PathBuf>,
    /// Face for `#` words
    pub bold: Option<PathBuf>,
}

/// # Label Layout Configuration
///
/// All fields are optional when deserializing; missing fields take the
/// defaults from [`LayoutConfig::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Canvas fill color
    pub background: [u8; 3],

    /// Top-left anchor of the display name
    pub title_origin: (i32, i32),
    /// Title font height in pixels
    pub title_px: f32,

    /// Top-left anchor of the first tag line
    pub tag_origin: (i32, i32),
    /// Tag font height in pixels
    pub tag_px: f32,
    /// Vertical advance between tag lines
    pub line_height: i32,
    /// Horizontal gap after each word
    pub word_gap: i32,
    /// Wrapping threshold, in characters
    pub chars_per_line: usize,
    /// Maximum number of tag lines
    pub max_lines: usize,

    /// Extra vertical offset for the QR codes per tag line
    pub margin_per_line: i32,
    /// Base vertical offset of the QR codes
    pub qr_top: i32,
    /// Final QR edge length in pixels
    pub qr_size: u32,
    /// Pixels per QR module before resizing
    pub qr_module_px: u32,
    /// Left anchors when two QR codes are placed side by side
    pub qr_pair_x: [i32; 2],

    /// Color of the title and plain words
    pub text_color: [u8; 3],
    /// Color of `#` words
    pub emphasis_color: [u8; 3],

    /// Payload encoded when a link is missing
    pub fallback_payload: String,
    /// Prefix prepended to non-URL link text
    pub search_url: String,

    pub fonts: FontConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 400,
            background: [255, 255, 255],
            title_origin: (20, 20),
            title_px: 30.0,
            tag_origin: (20, 60),
            tag_px: 20.0,
            line_height: 30,
            word_gap: 10,
            chars_per_line: 80,
            max_lines: 2,
            margin_per_line: 5,
            qr_top: 100,
            qr_size: 300,
            qr_module_px: 10,
            qr_pair_x: [50, 450],
            text_color: [0, 0, 0],
            emphasis_color: [0, 0, 255],
            fallback_payload: "No disponible".to_string(),
            search_url: "https://www.google.com/search?q=".to_string(),
            fonts: FontConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, SirocoError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SirocoError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
            .map_err(|e| SirocoError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SirocoError> {
        serde_json::from_str(json).map_err(|e| SirocoError::Config(e.to_string()))
    }

    /// Left anchor that centers a single QR code on the canvas.
    #[inline]
    pub fn single_qr_x(&self) -> i32 {
        (self.canvas_width as i32 - self.qr_size as i32) / 2
    }

    /// Vertical anchor of the QR codes for a label with `line_count` tag lines.
    #[inline]
    pub fn qr_y(&self, line_count: usize) -> i32 {
        self.qr_top + line_count as i32 * self.margin_per_line
    }

    #[inline]
    pub fn text_rgb(&self) -> Rgb<u8> {
        Rgb(self.text_color)
    }

    #[inline]
    pub fn emphasis_rgb(&self) -> Rgb<u8> {
        Rgb(self.emphasis_color)
    }
}
