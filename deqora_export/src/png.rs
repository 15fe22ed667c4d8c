use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::ExportError;

/// Write `image` to `path` as a PNG file. The format is fixed; the path's
/// extension is not consulted.
pub fn write_png(image: &RgbImage, path: &Path) -> Result<(), ExportError> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Encode `image` into an in-memory PNG, for callers that stream or embed
/// the result instead of writing a file.
pub fn png_bytes(image: &RgbImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_png_bytes_have_a_png_signature() {
        let image = RgbImage::from_pixel(4, 4, image::Rgb([0, 0, 0]));
        let bytes = png_bytes(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_png_encoding_is_deterministic() {
        let image = RgbImage::from_pixel(6, 6, image::Rgb([10, 200, 40]));
        assert_eq!(png_bytes(&image).unwrap(), png_bytes(&image).unwrap());
    }
}
