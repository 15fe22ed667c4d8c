//! Clipped pixel primitives shared by the rasterizer, the frames and the
//! label painter. Coordinates are `i64` and anything outside the target
//! image is silently dropped, so callers never bounds-check.

use deqora_core::Rgb;
use image::RgbImage;

/// Convert a style color into an image pixel.
#[inline]
pub(crate) fn pixel(color: Rgb) -> image::Rgb<u8> {
    image::Rgb([color.0, color.1, color.2])
}

/// Put `color` at `(x, y)` if the position is inside `img`.
#[inline]
pub(crate) fn put(img: &mut RgbImage, x: i64, y: i64, color: image::Rgb<u8>) {
    if x >= 0 && y >= 0 && x < img.width() as i64 && y < img.height() as i64 {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Blend `color` over the pixel at `(x, y)` with the given coverage, where
/// 255 is fully opaque.
pub(crate) fn blend(img: &mut RgbImage, x: i64, y: i64, color: Rgb, coverage: u8) {
    if coverage == 0 || x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    if coverage == u8::MAX {
        img.put_pixel(x as u32, y as u32, pixel(color));
        return;
    }
    let alpha = coverage as u32;
    let target = img.get_pixel_mut(x as u32, y as u32);
    for (channel, ink) in target.0.iter_mut().zip([color.0, color.1, color.2]) {
        *channel = ((*channel as u32 * (255 - alpha) + ink as u32 * alpha) / 255) as u8;
    }
}

/// Fill the axis-aligned rectangle with top-left corner `(x, y)`.
pub(crate) fn fill_rect(img: &mut RgbImage, x: i64, y: i64, width: u32, height: u32, color: Rgb) {
    let color = pixel(color);
    for dy in 0..height as i64 {
        for dx in 0..width as i64 {
            put(img, x + dx, y + dy, color);
        }
    }
}

/// Stroke the rectangle outline, `stroke` pixels thick, drawn inward from
/// the given bounds.
pub(crate) fn stroke_rect(
    img: &mut RgbImage,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
    stroke: u32,
    color: Rgb,
) {
    let stroke = stroke.min(width).min(height);
    fill_rect(img, x, y, width, stroke, color);
    fill_rect(img, x, y + height as i64 - stroke as i64, width, stroke, color);
    fill_rect(img, x, y, stroke, height, color);
    fill_rect(img, x + width as i64 - stroke as i64, y, stroke, height, color);
}

/// Whether the point `(px + 0.5, py + 0.5)` lies inside a `width x height`
/// rounded rectangle anchored at the origin with the given corner radius.
fn inside_rounded(px: i64, py: i64, width: u32, height: u32, radius: f64) -> bool {
    let (px, py) = (px as f64 + 0.5, py as f64 + 0.5);
    // Clamp the point to the inner rectangle; within `radius` of it is in.
    let cx = px.clamp(radius, width as f64 - radius);
    let cy = py.clamp(radius, height as f64 - radius);
    let (dx, dy) = (px - cx, py - cy);
    dx * dx + dy * dy <= radius * radius
}

/// Fill a rectangle with rounded corners. The radius is capped at half the
/// shorter edge; radius 0 gives a plain rectangle.
pub(crate) fn fill_rounded_rect(
    img: &mut RgbImage,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
    radius: u32,
    color: Rgb,
) {
    let radius = f64::from(radius).min(f64::from(width.min(height)) / 2.0);
    let color = pixel(color);
    for dy in 0..height as i64 {
        for dx in 0..width as i64 {
            if inside_rounded(dx, dy, width, height, radius) {
                put(img, x + dx, y + dy, color);
            }
        }
    }
}

/// Stroke a rounded-rectangle outline, `stroke` pixels thick, drawn inward.
pub(crate) fn stroke_rounded_rect(
    img: &mut RgbImage,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
    radius: u32,
    stroke: u32,
    color: Rgb,
) {
    let outer_radius = f64::from(radius).min(f64::from(width.min(height)) / 2.0);
    let inner_width = width.saturating_sub(2 * stroke);
    let inner_height = height.saturating_sub(2 * stroke);
    let inner_radius = f64::from(radius.saturating_sub(stroke))
        .min(f64::from(inner_width.min(inner_height)) / 2.0);
    let color = pixel(color);
    for dy in 0..height as i64 {
        for dx in 0..width as i64 {
            if !inside_rounded(dx, dy, width, height, outer_radius) {
                continue;
            }
            let inside_inner = inside_rounded(
                dx - stroke as i64,
                dy - stroke as i64,
                inner_width,
                inner_height,
                inner_radius,
            );
            if !inside_inner {
                put(img, x + dx, y + dy, color);
            }
        }
    }
}

/// Fill the ellipse inscribed in the rectangle with top-left corner
/// `(x, y)`.
pub(crate) fn fill_ellipse(
    img: &mut RgbImage,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
    color: Rgb,
) {
    let (rx, ry) = (f64::from(width) / 2.0, f64::from(height) / 2.0);
    let color = pixel(color);
    for dy in 0..height as i64 {
        for dx in 0..width as i64 {
            // Sample at the pixel center, normalized to the unit circle.
            let nx = (dx as f64 + 0.5 - rx) / rx;
            let ny = (dy as f64 + 0.5 - ry) / ry;
            if nx * nx + ny * ny <= 1.0 {
                put(img, x + dx, y + dy, color);
            }
        }
    }
}

/// Fill a circle centered at `(cx, cy)`.
pub(crate) fn fill_circle(img: &mut RgbImage, cx: i64, cy: i64, radius: u32, color: Rgb) {
    let d = 2 * radius;
    fill_ellipse(img, cx - radius as i64, cy - radius as i64, d, d, color);
}
