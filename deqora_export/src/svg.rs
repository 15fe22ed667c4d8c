use std::path::Path;

use deqora_core::{Module, ModuleMatrix, PatternKind, StyleSpec};

use crate::ExportError;

/// Corner radius of a rounded module, in module units.
const ROUNDED_RX: &str = "0.25";

/// Build an SVG document for `matrix` with one scalable shape per dark
/// module, in the style's colors.
///
/// The viewBox is in module units and the document's pixel size honors the
/// style's scale, so the output matches the bitmap renderer at 1:1 while
/// staying crisp at any zoom. Only [PatternKind::Squares] and
/// [PatternKind::Rounded] have a vector form; any other pattern is refused
/// and must be exported as a bitmap. Frames are bitmap-only and are not part
/// of the document.
pub fn svg_document(matrix: &ModuleMatrix, style: &StyleSpec) -> Result<String, ExportError> {
    if !style.pattern.vector_capable() {
        return Err(ExportError::VectorUnsupported(style.pattern));
    }
    let size = matrix.size();
    let pixels = size as u32 * style.scale;
    let mut svg = String::new();
    svg += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    svg += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{0}\" height=\"{0}\" viewBox=\"0 0 {1} {1}\" stroke=\"none\">\n",
        pixels, size
    );
    svg += &format!(
        "\t<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        style.light.to_hex()
    );
    match style.pattern {
        PatternKind::Rounded => svg += &rounded_modules(matrix, style),
        _ => svg += &square_modules(matrix, style),
    }
    svg += "</svg>\n";
    Ok(svg)
}

/// All dark modules as a single path of unit boxes.
fn square_modules(matrix: &ModuleMatrix, style: &StyleSpec) -> String {
    let mut path = String::from("\t<path d=\"");
    let mut first = true;
    for_each_dark(matrix, |i, j| {
        if !first {
            path += " ";
        }
        first = false;
        path += &format!("M{},{}h1v1h-1z", j, i);
    });
    path += &format!("\" fill=\"{}\"/>\n", style.dark.to_hex());
    path
}

/// One rounded unit rect per dark module.
fn rounded_modules(matrix: &ModuleMatrix, style: &StyleSpec) -> String {
    let fill = style.dark.to_hex();
    let mut rects = String::new();
    for_each_dark(matrix, |i, j| {
        rects += &format!(
            "\t<rect x=\"{}\" y=\"{}\" width=\"1\" height=\"1\" rx=\"{}\" fill=\"{}\"/>\n",
            j, i, ROUNDED_RX, fill
        );
    });
    rects
}

fn for_each_dark<F: FnMut(usize, usize)>(matrix: &ModuleMatrix, mut f: F) {
    for i in 0..matrix.size() {
        for j in 0..matrix.size() {
            if matrix.get(i, j) == Some(Module::Dark) {
                f(i, j);
            }
        }
    }
}

/// Write the SVG document for `matrix` to `path`.
pub fn write_svg(matrix: &ModuleMatrix, style: &StyleSpec, path: &Path) -> Result<(), ExportError> {
    let svg = svg_document(matrix, style)?;
    std::fs::write(path, svg)?;
    Ok(())
}
