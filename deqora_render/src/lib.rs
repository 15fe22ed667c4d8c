//! Rendering for deqora: rasterizes an encoded module matrix into a styled
//! RGB image, composites decorative frames around it, and renders text
//! previews.
//!
//! Everything here is a pure transform over its inputs: the same matrix and
//! style always produce the same bytes.

mod ascii;
mod draw;
mod frame;
mod label;
mod raster;

pub use ascii::AsciiArt;
pub use frame::{FrameComposer, FrameGeometry};
pub use raster::Rasterizer;

// The pixel buffer type every renderer here produces.
pub use image::RgbImage;
