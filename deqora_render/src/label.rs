//! Text painting for frame labels.
//!
//! A label is cosmetic, so this module cannot fail: it probes a few well
//! known system font locations once and falls back to a built-in 5x7
//! uppercase face when none parses. Only the label's looks change.

use std::path::Path;
use std::sync::OnceLock;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use fontdue::{Font, FontSettings};
use image::RgbImage;

use deqora_core::Rgb;

use crate::draw;

/// Candidate font files, probed in order. The first one that parses wins.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

enum Typeface {
    System(Font),
    Builtin,
}

static TYPEFACE: OnceLock<Typeface> = OnceLock::new();

fn typeface() -> &'static Typeface {
    TYPEFACE.get_or_init(|| {
        FONT_CANDIDATES
            .iter()
            .find_map(|path| load_font(Path::new(path)))
            .map(Typeface::System)
            .unwrap_or(Typeface::Builtin)
    })
}

fn load_font(path: &Path) -> Option<Font> {
    let bytes = std::fs::read(path).ok()?;
    Font::from_bytes(bytes, FontSettings::default()).ok()
}

/// Draw `text` horizontally centered on `center_x`, with its top edge at
/// `top_y`, at roughly `px` pixels tall. Clipped to `img`.
pub(crate) fn draw_label(
    img: &mut RgbImage,
    text: &str,
    px: f32,
    color: Rgb,
    center_x: u32,
    top_y: u32,
) {
    match typeface() {
        Typeface::System(font) => draw_with_font(img, font, text, px, color, center_x, top_y),
        Typeface::Builtin => draw_with_builtin(img, text, px, color, center_x, top_y),
    }
}

fn draw_with_font(
    img: &mut RgbImage,
    font: &Font,
    text: &str,
    px: f32,
    color: Rgb,
    center_x: u32,
    top_y: u32,
) {
    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(&[font], &TextStyle::new(text, px, 0));
    let width = layout
        .glyphs()
        .iter()
        .map(|glyph| glyph.x + glyph.width as f32)
        .fold(0.0, f32::max);
    let left = center_x as f32 - width / 2.0;
    for glyph in layout.glyphs() {
        if glyph.width == 0 {
            continue;
        }
        let (metrics, coverage) = font.rasterize_config(glyph.key);
        let ox = (left + glyph.x).round() as i64;
        let oy = top_y as i64 + glyph.y.round() as i64;
        for (index, &alpha) in coverage.iter().enumerate() {
            let gx = (index % metrics.width) as i64;
            let gy = (index / metrics.width) as i64;
            draw::blend(img, ox + gx, oy + gy, color, alpha);
        }
    }
}

/// Columns per built-in glyph.
const GLYPH_WIDTH: i64 = 5;
/// Rows per built-in glyph.
const GLYPH_HEIGHT: i64 = 7;

fn draw_with_builtin(
    img: &mut RgbImage,
    text: &str,
    px: f32,
    color: Rgb,
    center_x: u32,
    top_y: u32,
) {
    // Integer upscale closest to the requested height.
    let unit = ((px / GLYPH_HEIGHT as f32).round() as i64).max(1);
    let advance = (GLYPH_WIDTH + 1) * unit;
    let width = advance * text.chars().count() as i64 - unit;
    let mut x = center_x as i64 - width / 2;
    for c in text.chars() {
        if let Some(rows) = builtin_glyph(c) {
            for (gy, row) in rows.iter().enumerate() {
                for gx in 0..GLYPH_WIDTH {
                    if row & (0b10000 >> gx) == 0 {
                        continue;
                    }
                    draw::fill_rect(
                        img,
                        x + gx * unit,
                        top_y as i64 + gy as i64 * unit,
                        unit as u32,
                        unit as u32,
                        color,
                    );
                }
            }
        }
        x += advance;
    }
}

/// Row bitmap of the built-in face, 5 columns in the low bits, leftmost
/// column in bit 4. Uppercase Latin and space only; anything else renders
/// as a gap.
fn builtin_glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        ' ' => [0b00000; 7],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_builtin_glyphs_cover_the_label_alphabet() {
        for c in "SCAN ME".chars() {
            assert!(builtin_glyph(c).is_some(), "missing glyph for {:?}", c);
        }
        assert!(builtin_glyph('é').is_none());
    }

    #[test]
    fn test_builtin_label_inks_something() {
        let mut img = RgbImage::from_pixel(200, 60, image::Rgb([255, 255, 255]));
        draw_with_builtin(&mut img, "SCAN ME", 36.0, Rgb::BLACK, 100, 10);
        assert!(img.pixels().any(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_builtin_label_clips_on_tiny_canvas() {
        // Far wider than the canvas; must clip, not panic.
        let mut img = RgbImage::from_pixel(10, 10, image::Rgb([255, 255, 255]));
        draw_with_builtin(&mut img, "SCAN ME", 36.0, Rgb::BLACK, 5, 2);
    }

    #[test]
    fn test_label_dispatch_does_not_panic() {
        let mut img = RgbImage::from_pixel(300, 100, image::Rgb([255, 255, 255]));
        draw_label(&mut img, "SCAN ME", 36.0, Rgb(30, 30, 30), 150, 20);
        assert!(img.pixels().any(|p| p.0 != [255, 255, 255]));
    }
}
