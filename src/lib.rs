//! Styled QR code rendering.
//!
//! deqora turns an externally encoded module matrix into a styled bitmap:
//! patterned modules, custom colors, a decorative frame, then a PNG, SVG or
//! ASCII rendition. This facade re-exports the member crates so most users
//! only depend on `deqora` itself.
//!
//! # Example
//! ```
//! use deqora::{FrameComposer, FrameKind, ModuleMatrix, Rasterizer, Rgb, StyleSpec};
//!
//! // A module matrix normally comes from a QR encoder.
//! let matrix = ModuleMatrix::from_bits(2, [true, false, false, true]).unwrap();
//! let style = StyleSpec::new().with_scale(8);
//! let image = Rasterizer::with_style(style).rasterize(&matrix);
//! let framed = FrameComposer::new(FrameKind::SimpleBorder, Rgb::BLACK).compose(image);
//! assert_eq!(framed.dimensions(), (36, 36));
//! ```

pub use deqora_core::{
    content, Ecl, FrameKind, Module, ModuleMatrix, PatternKind, Rgb, StyleError, StyleSpec,
};
pub use deqora_export::{
    png_bytes, suggested_filename, svg_document, write_png, write_svg, ExportError,
};
pub use deqora_render::{AsciiArt, FrameComposer, FrameGeometry, Rasterizer, RgbImage};
