use deqora_core::{FrameKind, Rgb};
use image::{imageops, RgbImage};

use crate::draw;
use crate::label;

/// Side margin of the label and icon frames.
const SIDE_MARGIN: u32 = 20;
/// Height of the band holding a "SCAN ME" label.
const LABEL_BAND: u32 = 80;
/// Height of the band holding an icon plus its label.
const ICON_BAND: u32 = 100;
/// Border width of the simple solid frame.
const SIMPLE_BORDER: u32 = 10;
/// Border width of the rounded panel frame.
const ROUNDED_BORDER: u32 = 15;
/// Corner radius of the rounded panel.
const ROUNDED_RADIUS: u32 = 20;
/// Border width of the elegant frame.
const ELEGANT_BORDER: u32 = 30;

const SCAN_ME: &str = "SCAN ME";
/// Label height in a plain label band.
const LABEL_PX: f32 = 36.0;
/// Label height under an icon.
const ICON_LABEL_PX: f32 = 28.0;
/// Top offset of the label inside its band.
const LABEL_TOP: u32 = 20;

/// Diameter of the camera lens.
const LENS_DIAMETER: u32 = 50;
/// Top offset of the camera lens.
const LENS_TOP: u32 = 30;
/// Phone outline size and placement.
const PHONE_WIDTH: u32 = 40;
const PHONE_HEIGHT: u32 = 60;
const PHONE_TOP: u32 = 20;
const PHONE_RADIUS: u32 = 8;
const PHONE_STROKE: u32 = 3;
/// Gap between an icon and its label.
const ICON_GAP: u32 = 10;

/// Elegant frame: outline insets, widths and corner marks.
const OUTER_INSET: u32 = 5;
const OUTER_STROKE: u32 = 3;
const INNER_INSET: u32 = 25;
const INNER_STROKE: u32 = 2;
const CORNER_INSET: u32 = 10;
const CORNER_SIZE: u32 = 15;

/// Fixed pixel margins a frame kind adds around the pasted render.
///
/// Margins are constants of the kind, never derived from the render, so
/// framed output sizes are predictable.
/// # Example
/// ```
/// use deqora_core::FrameKind;
/// use deqora_render::FrameGeometry;
///
/// let geometry = FrameGeometry::of(FrameKind::ScanMeTop);
/// assert_eq!(geometry.top, 80);
/// assert_eq!(geometry.canvas(210, 210), (250, 310));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameGeometry {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl FrameGeometry {
    /// Get the margins of `kind`. [FrameKind::None] has none.
    pub fn of(kind: FrameKind) -> Self {
        let (top, right, bottom, left) = match kind {
            FrameKind::None => (0, 0, 0, 0),
            FrameKind::ScanMeTop => (LABEL_BAND, SIDE_MARGIN, SIDE_MARGIN, SIDE_MARGIN),
            FrameKind::ScanMeBottom => (SIDE_MARGIN, SIDE_MARGIN, LABEL_BAND, SIDE_MARGIN),
            FrameKind::SimpleBorder => {
                (SIMPLE_BORDER, SIMPLE_BORDER, SIMPLE_BORDER, SIMPLE_BORDER)
            }
            FrameKind::RoundedBorder => {
                (ROUNDED_BORDER, ROUNDED_BORDER, ROUNDED_BORDER, ROUNDED_BORDER)
            }
            FrameKind::CameraIcon | FrameKind::SmartphoneIcon => {
                (ICON_BAND, SIDE_MARGIN, SIDE_MARGIN, SIDE_MARGIN)
            }
            FrameKind::Elegant => {
                (ELEGANT_BORDER, ELEGANT_BORDER, ELEGANT_BORDER, ELEGANT_BORDER)
            }
        };
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Get the position at which the render is pasted.
    #[inline]
    pub fn origin(&self) -> (u32, u32) {
        (self.left, self.top)
    }

    /// Get the framed canvas size around a `width x height` render.
    #[inline]
    pub fn canvas(&self, width: u32, height: u32) -> (u32, u32) {
        (
            width + self.left + self.right,
            height + self.top + self.bottom,
        )
    }
}

/// Composites a decorative frame around a finished render.
///
/// Compositing is strictly additive: the composer allocates a larger
/// canvas, draws the decoration, then pastes the render on top. The pasted
/// region is byte-identical to the input, whatever the frame does around it.
/// # Example
/// ```
/// use deqora_core::{FrameKind, Module, ModuleMatrix, Rgb, StyleSpec};
/// use deqora_render::{FrameComposer, Rasterizer};
///
/// let matrix = ModuleMatrix::filled(2, Module::Dark);
/// let image = Rasterizer::new().rasterize(&matrix);
/// let framed = FrameComposer::new(FrameKind::SimpleBorder, Rgb::BLACK).compose(image);
/// assert_eq!(framed.dimensions(), (40, 40));
/// ```
pub struct FrameComposer {
    kind: FrameKind,
    accent: Rgb,
}

impl FrameComposer {
    /// Construct a composer for `kind`, decorating in the `accent` color.
    pub fn new(kind: FrameKind, accent: Rgb) -> Self {
        Self { kind, accent }
    }

    /// Get the frame kind.
    #[inline]
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Get the accent color.
    #[inline]
    pub fn accent(&self) -> Rgb {
        self.accent
    }

    /// Apply the frame to `image`. [FrameKind::None] hands the image back
    /// untouched, without reallocating.
    pub fn compose(&self, image: RgbImage) -> RgbImage {
        if self.kind == FrameKind::None {
            return image;
        }
        let geometry = FrameGeometry::of(self.kind);
        let (width, height) = geometry.canvas(image.width(), image.height());
        let mut canvas = RgbImage::from_pixel(width, height, draw::pixel(self.background()));
        self.decorate(&mut canvas, image.height());
        let (x, y) = geometry.origin();
        imageops::replace(&mut canvas, &image, x as i64, y as i64);
        canvas
    }

    /// Base color of the framed canvas.
    fn background(&self) -> Rgb {
        match self.kind {
            FrameKind::SimpleBorder => self.accent,
            _ => Rgb::WHITE,
        }
    }

    /// Draw the kind's decoration onto the empty canvas. The render is
    /// pasted afterwards, so anything a decoration spills into the paste
    /// area is covered up.
    fn decorate(&self, canvas: &mut RgbImage, render_height: u32) {
        let (width, height) = canvas.dimensions();
        match self.kind {
            // The solid border is the canvas background itself.
            FrameKind::None | FrameKind::SimpleBorder => {}
            FrameKind::ScanMeTop => {
                label::draw_label(canvas, SCAN_ME, LABEL_PX, self.accent, width / 2, LABEL_TOP);
            }
            FrameKind::ScanMeBottom => {
                let top = SIDE_MARGIN + render_height + LABEL_TOP;
                label::draw_label(canvas, SCAN_ME, LABEL_PX, self.accent, width / 2, top);
            }
            FrameKind::RoundedBorder => {
                draw::fill_rounded_rect(canvas, 0, 0, width, height, ROUNDED_RADIUS, self.accent);
            }
            FrameKind::CameraIcon => {
                let lens_x = width as i64 / 2 - LENS_DIAMETER as i64 / 2;
                draw::fill_ellipse(
                    canvas,
                    lens_x,
                    LENS_TOP as i64,
                    LENS_DIAMETER,
                    LENS_DIAMETER,
                    self.accent,
                );
                let top = LENS_TOP + LENS_DIAMETER + ICON_GAP;
                label::draw_label(canvas, SCAN_ME, ICON_LABEL_PX, self.accent, width / 2, top);
            }
            FrameKind::SmartphoneIcon => {
                let phone_x = width as i64 / 2 - PHONE_WIDTH as i64 / 2;
                draw::stroke_rounded_rect(
                    canvas,
                    phone_x,
                    PHONE_TOP as i64,
                    PHONE_WIDTH,
                    PHONE_HEIGHT,
                    PHONE_RADIUS,
                    PHONE_STROKE,
                    self.accent,
                );
                let top = PHONE_TOP + PHONE_HEIGHT + ICON_GAP;
                label::draw_label(canvas, SCAN_ME, ICON_LABEL_PX, self.accent, width / 2, top);
            }
            FrameKind::Elegant => {
                draw::stroke_rect(
                    canvas,
                    OUTER_INSET as i64,
                    OUTER_INSET as i64,
                    width - 2 * OUTER_INSET,
                    height - 2 * OUTER_INSET,
                    OUTER_STROKE,
                    self.accent,
                );
                draw::stroke_rect(
                    canvas,
                    INNER_INSET as i64,
                    INNER_INSET as i64,
                    width - 2 * INNER_INSET,
                    height - 2 * INNER_INSET,
                    INNER_STROKE,
                    self.accent,
                );
                let far_x = width - CORNER_INSET - CORNER_SIZE;
                let far_y = height - CORNER_INSET - CORNER_SIZE;
                for (x, y) in [
                    (CORNER_INSET, CORNER_INSET),
                    (far_x, CORNER_INSET),
                    (CORNER_INSET, far_y),
                    (far_x, far_y),
                ] {
                    draw::fill_rect(canvas, x as i64, y as i64, CORNER_SIZE, CORNER_SIZE, self.accent);
                }
            }
        }
    }
}
