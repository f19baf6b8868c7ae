use ab_glyph::{Font, FontVec, PxScale};
use anyhow::{Context, Result, anyhow};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::path::Path;

use crate::config::Layout;
use crate::document::{DisplayDocument, Line};
use crate::theme::ThemeColors;

const LOG_TARGET: &str = "render";

/// Loads the monospace font. There is no fallback font.
pub fn load_font(path: &Path) -> Result<FontVec> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Font file {} not found", path.display()))?;
    FontVec::try_from_vec(bytes)
        .map_err(|e| anyhow!("Invalid font file {}: {e}", path.display()))
}

/// Pixel scale for an em size, as point-size font APIs measure it.
fn em_scale(font: &impl Font, size: f32) -> PxScale {
    let scale = match font.units_per_em() {
        Some(upem) if upem > 0.0 => size * font.height_unscaled() / upem,
        _ => size,
    };
    PxScale::from(scale)
}

/// Scale to cover `width × height`, then crop around the center.
pub fn fit(img: RgbImage, width: u32, height: u32) -> RgbImage {
    let (w, h) = img.dimensions();
    if (w, h) == (width, height) {
        return img;
    }
    if w == 0 || h == 0 {
        return RgbImage::new(width, height);
    }

    let scale = f64::max(width as f64 / w as f64, height as f64 / h as f64);
    let sw = ((w as f64 * scale).round() as u32).max(width);
    let sh = ((h as f64 * scale).round() as u32).max(height);
    let scaled = imageops::resize(&img, sw, sh, FilterType::Triangle);

    imageops::crop_imm(&scaled, (sw - width) / 2, (sh - height) / 2, width, height).to_image()
}

/// Color runs for one line, drawn left to right.
pub fn segments<'a>(line: &Line<'a>, colors: &ThemeColors) -> Vec<(&'a str, Rgb<u8>)> {
    match *line {
        Line::Field { label, value } => vec![
            (label, colors.key),
            (":", colors.separator),
            (value, colors.value),
        ],
        Line::Item(text) => vec![(text, colors.value)],
        Line::Plain(text) => vec![(text, colors.text)],
    }
}

/// Art column: drawn at full size on its own canvas, then fitted to the
/// left half. Lines past the bottom are clipped.
fn draw_art(art: &str, font: &FontVec, layout: &Layout, colors: &ThemeColors) -> RgbImage {
    let (width, height) = (layout.half_width(), layout.height);
    let mut canvas = RgbImage::from_pixel(width, height, colors.bg);
    let scale = em_scale(font, layout.ascii_font_size);

    let mut y = 0.0f32;
    for line in art.lines() {
        if y >= height as f32 {
            break;
        }
        draw_text_mut(&mut canvas, colors.text, 0, y.round() as i32, scale, font, line);
        y += layout.ascii_font_size;
    }

    fit(canvas, width, height)
}

fn draw_document(
    canvas: &mut RgbImage,
    document: &DisplayDocument<'_>,
    font: &FontVec,
    layout: &Layout,
    colors: &ThemeColors,
) {
    let scale = em_scale(font, layout.stats_font_size);
    let left = (layout.half_width() + layout.stats_margin) as i32;
    let mut y = layout.stats_margin as f32;

    for line in &document.lines {
        let mut x = left;
        for (text, color) in segments(line, colors) {
            draw_text_mut(canvas, color, x, y.round() as i32, scale, font, text);
            x += text_size(scale, font, text).0 as i32;
        }
        y += layout.stats_font_size;
    }
}

/// Draws the art on the left half and the document on the right half.
pub fn render(
    art: &str,
    document: &DisplayDocument<'_>,
    font: &FontVec,
    layout: &Layout,
    colors: &ThemeColors,
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(layout.width, layout.height, colors.bg);

    let art_column = draw_art(art, font, layout, colors);
    imageops::replace(&mut canvas, &art_column, 0, 0);

    draw_document(&mut canvas, document, font, layout, colors);

    log::debug!(
        target: LOG_TARGET,
        "Rendered {} art lines and {} text lines",
        art.lines().count(),
        document.lines.len()
    );
    canvas
}

/// Writes the image, replacing any existing file. Format follows the extension.
pub fn save(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save(path)
        .with_context(|| format!("Failed to write image to {}", path.display()))
}
