use deqora_core::{Module, ModuleMatrix, PatternKind, StyleSpec};
use image::RgbImage;
use itertools::Itertools;

use crate::draw;

/// Inset of the circle pattern, in percent of the module edge.
const CIRCLE_MARGIN: u32 = 10;
/// Inset of the heart pattern, in percent of the module edge.
const HEART_MARGIN: u32 = 15;
/// Inset of the dot pattern, in percent of the module edge.
const DOT_MARGIN: u32 = 30;

/// Rasterizes a module matrix into a styled RGB image.
///
/// The rasterizer holds nothing but its style: every call allocates a fresh
/// buffer, so rendering the same matrix twice yields identical images.
///
/// The output is exactly `size * scale` pixels on each side. No quiet zone
/// is added; compositing margins is the frame's job.
/// # Example
/// ```
/// use deqora_core::{Module, ModuleMatrix, StyleSpec};
/// use deqora_render::Rasterizer;
///
/// let matrix = ModuleMatrix::from_bits(2, [true, false, false, true]).unwrap();
/// let rasterizer = Rasterizer::with_style(StyleSpec::new().with_scale(4));
/// let image = rasterizer.rasterize(&matrix);
/// assert_eq!(image.dimensions(), (8, 8));
/// ```
pub struct Rasterizer {
    style: StyleSpec,
}

impl Rasterizer {
    /// Construct a rasterizer with the default style.
    pub fn new() -> Self {
        Self::with_style(StyleSpec::new())
    }

    /// Construct a rasterizer that renders with `style`.
    pub fn with_style(style: StyleSpec) -> Self {
        Self { style }
    }

    /// Get the style this rasterizer renders with.
    #[inline]
    pub fn style(&self) -> &StyleSpec {
        &self.style
    }

    /// Render `matrix`: paint the whole canvas in the light color, then
    /// draw the pattern shape in the dark color over every dark module's
    /// box. Light modules get no shape of their own.
    pub fn rasterize<M: AsRef<ModuleMatrix>>(&self, matrix: M) -> RgbImage {
        let matrix = matrix.as_ref();
        let scale = self.style.scale;
        let pixels = matrix.size() as u32 * scale;
        let mut img = RgbImage::from_pixel(pixels, pixels, draw::pixel(self.style.light));
        for (i, j) in (0..matrix.size()).cartesian_product(0..matrix.size()) {
            if matrix.get(i, j) != Some(Module::Dark) {
                continue;
            }
            let x = j as i64 * scale as i64;
            let y = i as i64 * scale as i64;
            self.paint_module(&mut img, x, y);
        }
        img
    }

    /// Draw one dark module into its box with top-left corner `(x, y)`.
    fn paint_module(&self, img: &mut RgbImage, x: i64, y: i64) {
        let s = self.style.scale;
        let dark = self.style.dark;
        match self.style.pattern {
            PatternKind::Squares => draw::fill_rect(img, x, y, s, s, dark),
            // Radius s/4 is 0 below scale 4, which degenerates to a square.
            PatternKind::Rounded => draw::fill_rounded_rect(img, x, y, s, s, s / 4, dark),
            PatternKind::Circles => self.paint_inset_ellipse(img, x, y, CIRCLE_MARGIN),
            PatternKind::Flowers => self.paint_petals(img, x, y),
            PatternKind::Hearts => self.paint_inset_ellipse(img, x, y, HEART_MARGIN),
            PatternKind::Dots => self.paint_inset_ellipse(img, x, y, DOT_MARGIN),
        }
    }

    /// Draw the ellipse inscribed in the module box shrunk by `margin`
    /// percent of the edge on every side.
    fn paint_inset_ellipse(&self, img: &mut RgbImage, x: i64, y: i64, margin: u32) {
        let s = self.style.scale;
        let inset = s * margin / 100;
        let d = s - 2 * inset;
        draw::fill_ellipse(img, x + inset as i64, y + inset as i64, d, d, self.style.dark);
    }

    /// Draw four petals centered on the quarter points of the module box.
    fn paint_petals(&self, img: &mut RgbImage, x: i64, y: i64) {
        let s = self.style.scale as i64;
        let radius = (self.style.scale / 6).max(1);
        for (px, py) in [(s / 4, s / 4), (3 * s / 4, s / 4), (s / 4, 3 * s / 4), (3 * s / 4, 3 * s / 4)] {
            draw::fill_circle(img, x + px, y + py, radius, self.style.dark);
        }
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use deqora_core::Rgb;

    /// A 3x3 checker with a dark center, dark corners.
    fn checker() -> ModuleMatrix {
        ModuleMatrix::from_bits(
            3,
            [true, false, true, false, true, false, true, false, true],
        )
        .unwrap()
    }

    fn style(pattern: PatternKind, scale: u32) -> StyleSpec {
        StyleSpec::new().with_pattern(pattern).with_scale(scale)
    }

    #[test]
    fn test_output_side_is_size_times_scale() {
        for pattern in PatternKind::all() {
            for scale in [1, 3, 10] {
                let img = Rasterizer::with_style(style(pattern, scale)).rasterize(checker());
                let side = 3 * scale;
                assert_eq!(
                    img.dimensions(),
                    (side, side),
                    "wrong dimensions for {} at scale {}",
                    pattern.name(),
                    scale
                );
            }
        }
    }

    #[test]
    fn test_squares_map_colors_exactly() {
        let style = style(PatternKind::Squares, 4)
            .with_dark(Rgb(200, 10, 10))
            .with_light(Rgb(240, 240, 240));
        let img = Rasterizer::with_style(style).rasterize(checker());
        for (x, y, pixel) in img.enumerate_pixels() {
            let (i, j) = (y / 4, x / 4);
            let dark = (i + j) % 2 == 0;
            let expected = if dark { [200, 10, 10] } else { [240, 240, 240] };
            assert_eq!(pixel.0, expected, "wrong color at ({}, {})", x, y);
        }
    }

    #[test]
    fn test_all_dark_matrix_is_a_solid_dark_canvas() {
        let style = style(PatternKind::Squares, 10).with_dark(Rgb(255, 0, 0));
        let matrix = ModuleMatrix::filled(3, Module::Dark);
        let img = Rasterizer::with_style(style).rasterize(matrix);
        assert_eq!(img.dimensions(), (30, 30));
        assert!(img.pixels().all(|p| p.0 == [255, 0, 0]));
    }

    #[test]
    fn test_rasterize_is_deterministic() {
        for pattern in PatternKind::all() {
            let rasterizer = Rasterizer::with_style(style(pattern, 7));
            let matrix = checker();
            assert_eq!(
                rasterizer.rasterize(&matrix),
                rasterizer.rasterize(&matrix),
                "{} is not deterministic",
                pattern.name()
            );
        }
    }

    #[test]
    fn test_rounded_below_minimum_scale_matches_squares() {
        let matrix = checker();
        let rounded = Rasterizer::with_style(style(PatternKind::Rounded, 3)).rasterize(&matrix);
        let squares = Rasterizer::with_style(style(PatternKind::Squares, 3)).rasterize(&matrix);
        assert_eq!(rounded, squares);
    }

    #[test]
    fn test_rounded_at_scale_clips_corners() {
        let matrix = ModuleMatrix::filled(1, Module::Dark);
        let img = Rasterizer::with_style(style(PatternKind::Rounded, 8)).rasterize(matrix);
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(4, 0).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(4, 4).0, [0, 0, 0]);
    }

    #[test]
    fn test_dots_leave_wide_margin() {
        let matrix = ModuleMatrix::filled(1, Module::Dark);
        let img = Rasterizer::with_style(style(PatternKind::Dots, 10)).rasterize(matrix);
        // 30% margin: rows 0..3 stay light, the center is inked.
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(5, 1).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(5, 5).0, [0, 0, 0]);
    }

    #[test]
    fn test_circles_ink_less_than_squares() {
        let matrix = ModuleMatrix::filled(1, Module::Dark);
        let circles = Rasterizer::with_style(style(PatternKind::Circles, 10)).rasterize(&matrix);
        let squares = Rasterizer::with_style(style(PatternKind::Squares, 10)).rasterize(&matrix);
        let ink = |img: &RgbImage| img.pixels().filter(|p| p.0 == [0, 0, 0]).count();
        assert!(ink(&circles) > 0);
        assert!(ink(&circles) < ink(&squares));
    }

    #[test]
    fn test_flowers_ink_four_petals() {
        let matrix = ModuleMatrix::filled(1, Module::Dark);
        let img = Rasterizer::with_style(style(PatternKind::Flowers, 12)).rasterize(matrix);
        // Petal centers at the quarter points.
        assert_eq!(img.get_pixel(3, 3).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(9, 3).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(3, 9).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(9, 9).0, [0, 0, 0]);
        // The box corner stays light.
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_every_pattern_keeps_light_modules_untouched() {
        for pattern in PatternKind::all() {
            let img = Rasterizer::with_style(style(pattern, 6)).rasterize(checker());
            // Module (0, 1) is light; its whole box must stay background.
            for y in 0..6 {
                for x in 6..12 {
                    assert_eq!(
                        img.get_pixel(x, y).0,
                        [255, 255, 255],
                        "{} leaked into a light module at ({}, {})",
                        pattern.name(),
                        x,
                        y
                    );
                }
            }
        }
    }
}
