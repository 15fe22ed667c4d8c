use std::io::Write;

use deqora_core::{Module, ModuleMatrix};

/// Renders a module matrix as ASCII art, one pattern string per module.
/// # Example
/// ```
/// use deqora_core::ModuleMatrix;
/// use deqora_render::AsciiArt;
///
/// let matrix = ModuleMatrix::from_bits(2, [true, false, false, true]).unwrap();
/// let mut out = Vec::new();
/// AsciiArt::new()
///     .with_dark_pattern("#")
///     .with_light_pattern(".")
///     .render(&mut out, &matrix)
///     .unwrap();
/// assert_eq!(out, b"#.\n.#\n");
/// ```
pub struct AsciiArt {
    light_pattern: Box<str>,
    dark_pattern: Box<str>,
    quiet_zone: usize,
}

impl AsciiArt {
    /// Construct a new [AsciiArt] renderer that uses "██" to render dark
    /// modules and "  " to print light ones, with no quiet zone.
    pub fn new() -> Self {
        Self {
            light_pattern: "  ".into(),
            dark_pattern: "██".into(),
            quiet_zone: 0,
        }
    }

    /// Set the light module `pattern` to be used when rendering.
    pub fn with_light_pattern(mut self, pattern: &str) -> Self {
        self.light_pattern = pattern.into();
        self
    }

    /// Set the dark module `pattern` to be used when rendering.
    pub fn with_dark_pattern(mut self, pattern: &str) -> Self {
        self.dark_pattern = pattern.into();
        self
    }

    /// Surround the rendered code with `modules` light modules on each side.
    /// Scanners want a quiet zone; terminal backgrounds rarely provide one.
    pub fn with_quiet_zone(mut self, modules: usize) -> Self {
        self.quiet_zone = modules;
        self
    }

    /// Invert the light and dark patterns.
    pub fn inverted(mut self) -> Self {
        std::mem::swap(&mut self.light_pattern, &mut self.dark_pattern);
        self
    }

    /// Peek at the pattern used to render light modules.
    pub fn light_pattern(&self) -> &str {
        self.light_pattern.as_ref()
    }

    /// Peek at the pattern used to render dark modules.
    pub fn dark_pattern(&self) -> &str {
        self.dark_pattern.as_ref()
    }

    /// Render the `matrix` into `output`, one line per module row.
    pub fn render<M, W>(&self, output: &mut W, matrix: M) -> std::io::Result<()>
    where
        M: AsRef<ModuleMatrix>,
        W: Write,
    {
        let matrix = matrix.as_ref();
        let size = matrix.size() as isize;
        let zone = self.quiet_zone as isize;
        for i in -zone..size + zone {
            for j in -zone..size + zone {
                let module = if i >= 0 && j >= 0 {
                    matrix.get(i as usize, j as usize).unwrap_or(Module::Light)
                } else {
                    Module::Light
                };
                let pattern = match module {
                    Module::Dark => self.dark_pattern(),
                    Module::Light => self.light_pattern(),
                };
                write!(output, "{}", pattern)?;
            }
            writeln!(output)?;
        }
        Ok(())
    }
}

impl Default for AsciiArt {
    fn default() -> Self {
        Self::new()
    }
}
