//! Compact bitmap text for raster label rendering.
//!
//! Net labels are numeric, so a built-in 5x7 glyph set covering digits,
//! sign, decimal point and the exponent marker is enough; characters
//! outside the set advance the pen without drawing.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;

/// Glyph cell width in font units (plus one unit of spacing when advancing).
const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in font units.
const GLYPH_HEIGHT: u32 = 7;

/// 5x7 glyph rows, most significant of the low five bits leftmost.
fn glyph(c: char) -> Option<[u8; 7]> {
    Some(match c {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '-' => [0x00, 0x00, 0x00, 0x0E, 0x00, 0x00, 0x00],
        '+' => [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        'e' => [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E],
        ' ' => [0x00; 7],
        _ => return None,
    })
}

/// Integer scale factor for a requested pixel size.
fn scale_for(size: f32) -> u32 {
    ((size / GLYPH_HEIGHT as f32).round() as u32).max(1)
}

/// Draw `text` with its baseline at `(x, y)`.
///
/// `size` is the requested glyph height in pixels, quantized to a whole
/// multiple of the 7-unit glyph grid.
pub fn draw_text(fb: &mut Framebuffer, text: &str, x: f32, y: f32, size: f32, color: Rgba) {
    let scale = scale_for(size);
    let mut pen_x = x.round() as i32;
    let top = y.round() as i32 - (GLYPH_HEIGHT * scale) as i32;

    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row_idx, row) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if row & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        let px = pen_x + (col * scale) as i32;
                        let py = top + (row_idx as u32 * scale) as i32;
                        if px >= 0 && py >= 0 {
                            fb.fill_rect(px as u32, py as u32, scale, scale, color);
                        }
                    }
                }
            }
        }
        pen_x += ((GLYPH_WIDTH + 1) * scale) as i32;
    }
}

/// Pixel width `text` will occupy at `size`.
#[must_use]
pub fn text_width(text: &str, size: f32) -> f32 {
    let scale = scale_for(size);
    (text.chars().count() as u32 * (GLYPH_WIDTH + 1) * scale) as f32
}
