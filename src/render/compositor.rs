//! Layered raster compositing.
//!
//! # Layers, bottom to top
//! ```text
//! opaque black background
//!     → symbol tiles (sprites scaled to the cell, placeholders for
//!       failed cells), Gaussian-blurred as one layer
//!     → full-canvas translucent black panel
//!     → caption: drop shadow, dark-gold outline, gradient fill
//! ```
//!
//! The caption gradient runs across the full canvas width, not the text
//! box, matching the original layout.

use std::io::Cursor;

use image::{imageops, imageops::FilterType, GrayImage, Rgba, RgbaImage};
use thiserror::Error;

use crate::config::RenderConfig;
use crate::render::font;
use crate::render::plan::{CellArt, DrawPlan};

/// Caption used when no win amount is supplied.
pub const DEFAULT_CAPTION: &str = "Golden Text";

const PLACEHOLDER_GRAY: [u8; 3] = [128, 128, 128];
const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];

const GOLD: [u8; 3] = [0xFF, 0xD7, 0x00];
const LIGHT_GOLD: [u8; 3] = [0xFF, 0xEC, 0x8B];
const DARK_GOLD: [u8; 3] = [0xFF, 0xA5, 0x00];
const OUTLINE_GOLD: [u8; 3] = [0xB8, 0x86, 0x0B];

const GRADIENT_STOPS: [(f32, [u8; 3]); 5] = [
    (0.0, GOLD),
    (0.3, LIGHT_GOLD),
    (0.5, GOLD),
    (0.7, DARK_GOLD),
    (1.0, GOLD),
];

/// Alpha of the translucent panel over the blurred symbol layer.
const PANEL_ALPHA: f32 = 0.4;

const OUTLINE_WIDTH: i64 = 2;
const SHADOW_OFFSET: i64 = 4;
const SHADOW_SIGMA: f32 = 10.0 / 3.0;
const SHADOW_ALPHA: f32 = 0.5;

/// Errors fatal to the whole composition.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid reelMatrix structure")]
    EmptyMatrix,

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Rasterize a draw plan into encoded PNG bytes.
///
/// Output dimensions are exactly `(cols * cell_size) x (rows * cell_size)`.
pub fn compose(plan: &DrawPlan, caption: &str, cfg: &RenderConfig) -> Result<Vec<u8>, RenderError> {
    let rows = plan.rows();
    let cols = plan.cols();
    if rows == 0 || cols == 0 {
        return Err(RenderError::EmptyMatrix);
    }

    tracing::debug!(rows, cols, caption, "Compositing matrix image");

    let cell = cfg.cell_size;
    let width = cols as u32 * cell;
    let height = rows as u32 * cell;

    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));

    for row in 0..rows {
        for col in 0..cols {
            let x = col as u32 * cell;
            let y = row as u32 * cell;
            match plan.cell(row, col) {
                CellArt::Sprite(sprite) => {
                    let tile = imageops::resize(sprite, cell, cell, FilterType::Triangle);
                    imageops::overlay(&mut canvas, &tile, i64::from(x), i64::from(y));
                }
                CellArt::Placeholder => draw_placeholder(&mut canvas, x, y, cell),
            }
        }
    }

    // The symbols are backdrop, not focal content.
    if cfg.blur_sigma > 0.0 {
        canvas = imageops::blur(&canvas, cfg.blur_sigma);
    }

    shade(&mut canvas, BLACK, PANEL_ALPHA);

    draw_caption(&mut canvas, caption, cfg.caption_height);

    let mut buf = Cursor::new(Vec::new());
    canvas.write_to(&mut buf, image::ImageOutputFormat::Png)?;
    Ok(buf.into_inner())
}

/// Gray tile with a centered white question mark.
fn draw_placeholder(canvas: &mut RgbaImage, x: u32, y: u32, cell: u32) {
    fill_rect(canvas, x, y, cell, cell, PLACEHOLDER_GRAY);

    let mask = font::text_mask("?", (cell / 2).max(font::GLYPH_HEIGHT));
    let ox = i64::from(x) + (i64::from(cell) - i64::from(mask.width())) / 2;
    let oy = i64::from(y) + (i64::from(cell) - i64::from(mask.height())) / 2;
    tint_mask(canvas, &mask, ox, oy, |_| WHITE);
}

/// Shadow, outline and gradient fill for the centered caption.
fn draw_caption(canvas: &mut RgbaImage, text: &str, caption_height: u32) {
    let mask = font::text_mask(text, caption_height);
    let ox = (i64::from(canvas.width()) - i64::from(mask.width())) / 2;
    let oy = (i64::from(canvas.height()) - i64::from(mask.height())) / 2;

    // Soft drop shadow: the mask offset down-right, blurred, then blended
    // in as semi-transparent black.
    let mut shadow = GrayImage::new(canvas.width(), canvas.height());
    stamp_mask(&mut shadow, &mask, ox + SHADOW_OFFSET, oy + SHADOW_OFFSET);
    let shadow = imageops::blur(&shadow, SHADOW_SIGMA);
    for (x, y, p) in shadow.enumerate_pixels() {
        let alpha = f32::from(p.0[0]) / 255.0 * SHADOW_ALPHA;
        if alpha > 0.0 {
            blend(canvas.get_pixel_mut(x, y), BLACK, alpha);
        }
    }

    // Outline: the mask stamped at every offset within the stroke radius.
    for dy in -OUTLINE_WIDTH..=OUTLINE_WIDTH {
        for dx in -OUTLINE_WIDTH..=OUTLINE_WIDTH {
            if (dx == 0 && dy == 0) || dx * dx + dy * dy > OUTLINE_WIDTH * OUTLINE_WIDTH {
                continue;
            }
            tint_mask(canvas, &mask, ox + dx, oy + dy, |_| OUTLINE_GOLD);
        }
    }

    let full_width = canvas.width() as f32;
    tint_mask(canvas, &mask, ox, oy, |x| gradient_at(x as f32 / full_width));
}

/// Sample the gold gradient at `t` in `[0, 1]`.
fn gradient_at(t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    for pair in GRADIENT_STOPS.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            return [
                lerp(c0[0], c1[0], f),
                lerp(c0[1], c1[1], f),
                lerp(c0[2], c1[2], f),
            ];
        }
    }
    GOLD
}

fn lerp(a: u8, b: u8, f: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * f).round() as u8
}

/// Blend `rgb` over one pixel at the given alpha. The canvas stays opaque.
fn blend(px: &mut Rgba<u8>, rgb: [u8; 3], alpha: f32) {
    for i in 0..3 {
        px.0[i] = (f32::from(rgb[i]) * alpha + f32::from(px.0[i]) * (1.0 - alpha)).round() as u8;
    }
    px.0[3] = 255;
}

/// Blend `rgb` over the whole canvas at the given alpha.
fn shade(canvas: &mut RgbaImage, rgb: [u8; 3], alpha: f32) {
    for px in canvas.pixels_mut() {
        blend(px, rgb, alpha);
    }
}

fn fill_rect(canvas: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, rgb: [u8; 3]) {
    for yy in y..(y + h).min(canvas.height()) {
        for xx in x..(x + w).min(canvas.width()) {
            *canvas.get_pixel_mut(xx, yy) = Rgba([rgb[0], rgb[1], rgb[2], 255]);
        }
    }
}

/// Copy `mask` coverage into `dst` at the offset, clipped to the canvas.
fn stamp_mask(dst: &mut GrayImage, mask: &GrayImage, ox: i64, oy: i64) {
    for (mx, my, p) in mask.enumerate_pixels() {
        if p.0[0] == 0 {
            continue;
        }
        let x = ox + i64::from(mx);
        let y = oy + i64::from(my);
        if x >= 0 && y >= 0 && (x as u32) < dst.width() && (y as u32) < dst.height() {
            dst.put_pixel(x as u32, y as u32, *p);
        }
    }
}

/// Paint `mask` coverage onto the canvas, coloring each pixel by its
/// canvas x coordinate.
fn tint_mask(
    canvas: &mut RgbaImage,
    mask: &GrayImage,
    ox: i64,
    oy: i64,
    color: impl Fn(u32) -> [u8; 3],
) {
    for (mx, my, p) in mask.enumerate_pixels() {
        if p.0[0] == 0 {
            continue;
        }
        let x = ox + i64::from(mx);
        let y = oy + i64::from(my);
        if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
            let alpha = f32::from(p.0[0]) / 255.0;
            blend(canvas.get_pixel_mut(x as u32, y as u32), color(x as u32), alpha);
        }
    }
}
