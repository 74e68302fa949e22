//! Embedded bitmap text using the Spleen 12x24 font.
//!
//! Glyphs are scaled nearest-neighbour to the requested pixel height. Bold
//! is a one-pixel overstrike.

use image::{Rgb, RgbImage};
use spleen_font::{FONT_12X24, PSF2Font};

const SPLEEN_WIDTH: usize = 12;
const SPLEEN_HEIGHT: usize = 24;

/// Size of one character cell at `pixel_height`.
pub fn cell_size(pixel_height: f32) -> (u32, u32) {
    let height = pixel_height.round().max(1.0) as u32;
    let width = ((height as usize * SPLEEN_WIDTH + SPLEEN_HEIGHT / 2) / SPLEEN_HEIGHT).max(1);
    (width as u32, height)
}

/// Width of `text` in pixels at `pixel_height`.
pub fn measure(pixel_height: f32, bold: bool, text: &str) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0;
    }
    let (cell_w, _) = cell_size(pixel_height);
    count * cell_w + u32::from(bold)
}

/// Draw `text` with its top-left corner at (`x`, `y`).
pub fn draw(
    canvas: &mut RgbImage,
    x: i32,
    y: i32,
    pixel_height: f32,
    bold: bool,
    text: &str,
    color: Rgb<u8>,
) {
    let (cell_w, cell_h) = cell_size(pixel_height);
    // Parsed once per run; glyph lookup needs a mutable font.
    let mut spleen = PSF2Font::new(FONT_12X24).ok();

    for (i, ch) in text.chars().enumerate() {
        let utf8 = ch.to_string();
        let glyph = match spleen
            .as_mut()
            .and_then(|font| font.glyph_for_utf8(utf8.as_bytes()))
        {
            Some(rows) => cells_from_rows(rows),
            None => missing_glyph(),
        };
        let origin_x = x + (i as u32 * cell_w) as i32;

        for dy in 0..cell_h {
            for dx in 0..cell_w {
                let sx = dx as usize * SPLEEN_WIDTH / cell_w as usize;
                let sy = dy as usize * SPLEEN_HEIGHT / cell_h as usize;
                if !glyph[sy * SPLEEN_WIDTH + sx] {
                    continue;
                }
                let px = origin_x + dx as i32;
                let py = y + dy as i32;
                put(canvas, px, py, color);
                if bold {
                    put(canvas, px + 1, py, color);
                }
            }
        }
    }
}

fn put(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

/// Copy a Spleen glyph into row-major on/off cells.
fn cells_from_rows<R>(rows: R) -> Vec<bool>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = bool>,
{
    let mut cells = vec![false; SPLEEN_WIDTH * SPLEEN_HEIGHT];
    for (row_y, row) in rows.into_iter().enumerate() {
        for (col_x, on) in row.into_iter().enumerate() {
            if row_y < SPLEEN_HEIGHT && col_x < SPLEEN_WIDTH {
                cells[row_y * SPLEEN_WIDTH + col_x] = on;
            }
        }
    }
    cells
}

/// Box outline drawn for characters missing from the font.
fn missing_glyph() -> Vec<bool> {
    let mut cells = vec![false; SPLEEN_WIDTH * SPLEEN_HEIGHT];
    draw_box(&mut cells);
    cells
}

/// Outline the cell, used for characters missing from the font.
fn draw_box(cells: &mut [bool]) {
    for x in 0..SPLEEN_WIDTH {
        cells[x] = true;
        cells[(SPLEEN_HEIGHT - 1) * SPLEEN_WIDTH + x] = true;
    }
    for y in 0..SPLEEN_HEIGHT {
        cells[y * SPLEEN_WIDTH] = true;
        cells[y * SPLEEN_WIDTH + SPLEEN_WIDTH - 1] = true;
    }
}
