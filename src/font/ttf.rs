//! TTF/OTF text rendering with ab_glyph.
//!
//! Glyphs are rasterized straight onto the RGB canvas, blending the text
//! color by coverage so edges stay anti-aliased.

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use std::path::Path;

use crate::error::SirocoError;

/// Load a font face from a file on disk.
pub fn load_font(path: &Path) -> Result<FontArc, SirocoError> {
    let bytes = std::fs::read(path)?;
    FontArc::try_from_vec(bytes)
        .map_err(|e| SirocoError::Config(format!("Invalid font {}: {}", path.display(), e)))
}

/// Width of `text` in pixels at `pixel_height`, including kerning.
pub fn measure(font: &FontArc, pixel_height: f32, text: &str) -> u32 {
    let scaled = font.as_scaled(PxScale::from(pixel_height));
    let mut width = 0.0f32;
    let mut prev = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev = Some(glyph_id);
    }

    width.ceil().max(0.0) as u32
}

/// Draw `text` with its top-left corner at (`x`, `y`).
pub fn draw(
    font: &FontArc,
    canvas: &mut RgbImage,
    x: i32,
    y: i32,
    pixel_height: f32,
    text: &str,
    color: Rgb<u8>,
) {
    let scale = PxScale::from(pixel_height);
    let scaled = font.as_scaled(scale);
    let baseline_y = y as f32 + scaled.ascent();

    let mut caret_x = x as f32;
    let mut prev = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev {
            caret_x += scaled.kern(prev, glyph_id);
        }
        let glyph = glyph_id.with_scale_and_position(scale, ab_glyph::point(caret_x, baseline_y));
        caret_x += scaled.h_advance(glyph_id);
        prev = Some(glyph_id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|px, py, coverage| {
                let cx = px as i32 + bounds.min.x as i32;
                let cy = py as i32 + bounds.min.y as i32;
                blend(canvas, cx, cy, color, coverage);
            });
        }
    }
}

/// Mix `color` into the pixel at (`x`, `y`) by `coverage` (0.0..=1.0).
fn blend(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }
    let alpha = coverage.clamp(0.0, 1.0);
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in pixel.0.iter_mut().zip(color.0) {
        *dst = (*dst as f32 * (1.0 - alpha) + src as f32 * alpha).round() as u8;
    }
}
