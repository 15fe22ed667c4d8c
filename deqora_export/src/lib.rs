//! File output for deqora renders: PNG for any style, SVG for the patterns
//! that have a vector form, and export filename suggestions.

mod name;
mod png;
mod svg;

pub use name::suggested_filename;
pub use png::{png_bytes, write_png};
pub use svg::{svg_document, write_svg};

use deqora_core::PatternKind;

/// An error while exporting a render.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The pattern only exists as a bitmap.
    #[error("pattern '{}' has no vector form; export a PNG instead", .0.name())]
    VectorUnsupported(PatternKind),
    /// The image could not be encoded or written.
    #[error("cannot write image: {0}")]
    Image(#[from] image::ImageError),
    /// The file could not be written.
    #[error("cannot write file: {0}")]
    Io(#[from] std::io::Error),
}
