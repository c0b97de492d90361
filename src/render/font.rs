//! Embedded 5x7 bitmap font.
//!
//! Covers digits, basic punctuation and the uppercase alphabet — enough for
//! win-amount captions and the placeholder glyph. Lowercase letters fold to
//! uppercase. Glyphs are rasterized as a grayscale coverage mask that the
//! compositor colors (gradient fill, outline, shadow) afterwards.

use image::{GrayImage, Luma};

/// Glyph cell width in font units (5 data bits per row).
pub const GLYPH_WIDTH: u32 = 5;

/// Glyph cell height in font units.
pub const GLYPH_HEIGHT: u32 = 7;

/// Horizontal advance in font units (glyph plus one unit of spacing).
const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// One row per byte, most significant of the low 5 bits is the left pixel.
type Glyph = [u8; GLYPH_HEIGHT as usize];

const GLYPH_SPACE: Glyph = [0x00; 7];
const GLYPH_COMMA: Glyph = [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08];
const GLYPH_PERIOD: Glyph = [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C];
const GLYPH_QUESTION: Glyph = [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04];
const GLYPH_MINUS: Glyph = [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00];

const GLYPH_DIGITS: [Glyph; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
];

const GLYPH_UPPER: [Glyph; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

fn glyph_for(c: char) -> &'static Glyph {
    match c.to_ascii_uppercase() {
        '0'..='9' => &GLYPH_DIGITS[(c as u8 - b'0') as usize],
        c @ 'A'..='Z' => &GLYPH_UPPER[(c as u8 - b'A') as usize],
        ',' => &GLYPH_COMMA,
        '.' => &GLYPH_PERIOD,
        '-' => &GLYPH_MINUS,
        ' ' => &GLYPH_SPACE,
        _ => &GLYPH_QUESTION,
    }
}

/// Pixel width of `text` rendered at `height` pixels.
pub fn text_width(text: &str, height: u32) -> u32 {
    let scale = scale_for(height);
    let n = text.chars().count() as u32;
    if n == 0 {
        return 0;
    }
    (n * ADVANCE - 1) * scale
}

fn scale_for(height: u32) -> u32 {
    (height / GLYPH_HEIGHT).max(1)
}

/// Rasterize `text` into a coverage mask (255 = glyph, 0 = background).
///
/// The mask height is the largest multiple of the glyph height that fits
/// within `height`, so an 80px caption renders at 77px.
pub fn text_mask(text: &str, height: u32) -> GrayImage {
    let scale = scale_for(height);
    let width = text_width(text, height).max(1);
    let mut mask = GrayImage::new(width, GLYPH_HEIGHT * scale);

    let mut pen_x = 0u32;
    for c in text.chars() {
        let glyph = glyph_for(c);
        for (gy, row_bits) in glyph.iter().enumerate() {
            for gx in 0..GLYPH_WIDTH {
                if (row_bits & (0x10 >> gx)) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let x = pen_x + gx * scale + dx;
                        let y = gy as u32 * scale + dy;
                        if x < mask.width() {
                            mask.put_pixel(x, y, Luma([255]));
                        }
                    }
                }
            }
        }
        pen_x += ADVANCE * scale;
    }

    mask
}
