//! # Label Fonts
//!
//! Text on a label comes from one of two kinds of face:
//!
//! - **TTF/OTF** files named in [`FontConfig`], rendered anti-aliased with ab_glyph
//! - the **embedded Spleen 12x24** bitmap font, used when no file is
//!   configured or a configured file cannot be loaded
//!
//! Loading never fails: any problem with a configured file silently selects
//! the embedded face for every role, so a label never mixes the two kinds.

mod bitmap;
mod ttf;

pub use ttf::load_font;

use ab_glyph::FontArc;
use image::{Rgb, RgbImage};

use crate::config::FontConfig;

/// A font face that can measure and draw a run of text.
#[derive(Clone)]
pub enum Face {
    Ttf(FontArc),
    Embedded { bold: bool },
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Ttf(_) => f.write_str("Face::Ttf"),
            Face::Embedded { bold } => write!(f, "Face::Embedded {{ bold: {} }}", bold),
        }
    }
}

impl Face {
    /// Rendered width of `text` in pixels.
    pub fn measure(&self, text: &str, pixel_height: f32) -> u32 {
        match self {
            Face::Ttf(font) => ttf::measure(font, pixel_height, text),
            Face::Embedded { bold } => bitmap::measure(pixel_height, *bold, text),
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`).
    pub fn draw(
        &self,
        canvas: &mut RgbImage,
        x: i32,
        y: i32,
        pixel_height: f32,
        text: &str,
        color: Rgb<u8>,
    ) {
        match self {
            Face::Ttf(font) => ttf::draw(font, canvas, x, y, pixel_height, text, color),
            Face::Embedded { bold } => {
                bitmap::draw(canvas, x, y, pixel_height, *bold, text, color)
            }
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, Face::Embedded { .. })
    }
}

/// The faces used by one label: title and plain words share `regular`.
#[derive(Debug, Clone)]
pub struct FontSet {
    pub regular: Face,
    pub bold: Face,
}

impl Default for FontSet {
    fn default() -> Self {
        Self::embedded()
    }
}

impl FontSet {
    /// The embedded bitmap faces.
    pub fn embedded() -> Self {
        Self {
            regular: Face::Embedded { bold: false },
            bold: Face::Embedded { bold: true },
        }
    }

    /// Load the configured faces, falling back to [`FontSet::embedded`].
    ///
    /// A bold path without a regular path is ignored. When only `regular`
    /// is set it is used for `#` words as well.
    pub fn load(config: &FontConfig) -> Self {
        let Some(regular_path) = &config.regular else {
            return Self::embedded();
        };

        let regular = match load_font(regular_path) {
            Ok(font) => font,
            Err(e) => {
                tracing::debug!("Using embedded font: {}", e);
                return Self::embedded();
            }
        };

        let bold = match &config.bold {
            Some(path) => match load_font(path) {
                Ok(font) => font,
                Err(e) => {
                    tracing::debug!("Using embedded font: {}", e);
                    return Self::embedded();
                }
            },
            None => regular.clone(),
        };

        Self {
            regular: Face::Ttf(regular),
            bold: Face::Ttf(bold),
        }
    }
}
