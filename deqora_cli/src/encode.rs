//! The boundary to the QR encoder. Everything downstream works on a plain
//! [ModuleMatrix]; which encoder produced it is this module's business only.

use anyhow::Result;
use qrcode::{EcLevel, QrCode};

use deqora_core::{Ecl, ModuleMatrix};

/// Encode `content` at the requested error correction level. Version and
/// mask selection are the encoder's own; a payload too large for any
/// version is an error.
pub fn encode(content: &str, ecl: Ecl) -> Result<ModuleMatrix> {
    let code = QrCode::with_error_correction_level(content.as_bytes(), ec_level(ecl))?;
    let size = code.width();
    let bits = code
        .to_colors()
        .into_iter()
        .map(|color| color == qrcode::Color::Dark);
    ModuleMatrix::from_bits(size, bits)
        .ok_or_else(|| anyhow::Error::msg("encoder produced a malformed module grid"))
}

fn ec_level(ecl: Ecl) -> EcLevel {
    match ecl {
        Ecl::L => EcLevel::L,
        Ecl::M => EcLevel::M,
        Ecl::Q => EcLevel::Q,
        Ecl::H => EcLevel::H,
    }
}
