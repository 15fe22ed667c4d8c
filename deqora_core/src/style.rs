use std::fmt;
use std::str::FromStr;

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Parse a `#rrggbb` string. The leading `#` is optional.
    /// # Example
    /// ```
    /// use deqora_core::Rgb;
    /// assert_eq!(Rgb::from_hex("#ff8000"), Ok(Rgb(255, 128, 0)));
    /// assert_eq!(Rgb::from_hex("006994"), Ok(Rgb(0, 105, 148)));
    /// assert!(Rgb::from_hex("salmon").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, StyleError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(StyleError::InvalidColor(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| StyleError::InvalidColor(hex.to_string()))
        };
        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Shape drawn for each dark module.
///
/// Every kind other than [PatternKind::Squares] inks less than the full
/// module box and therefore eats into the contrast margin; dense codes may
/// scan poorly. The renderer draws what it is asked for and performs no
/// scannability checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatternKind {
    /// Full module boxes.
    #[default]
    Squares,
    /// Module boxes with softened corners.
    Rounded,
    /// Inscribed circles.
    Circles,
    /// Four petals at the quarter points of the box.
    Flowers,
    /// Heart-shaped modules.
    Hearts,
    /// Small centered dots.
    Dots,
}

impl PatternKind {
    /// Map a configuration name to a kind. Unrecognized names fall back to
    /// [PatternKind::Squares] so a render can always be produced.
    /// # Example
    /// ```
    /// use deqora_core::PatternKind;
    /// assert_eq!(PatternKind::from_name("dots"), PatternKind::Dots);
    /// assert_eq!(PatternKind::from_name("starburst"), PatternKind::Squares);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "squares" => PatternKind::Squares,
            "rounded" => PatternKind::Rounded,
            "circles" => PatternKind::Circles,
            "flowers" => PatternKind::Flowers,
            "hearts" => PatternKind::Hearts,
            "dots" => PatternKind::Dots,
            _ => PatternKind::Squares,
        }
    }

    /// Get the canonical configuration name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Squares => "squares",
            PatternKind::Rounded => "rounded",
            PatternKind::Circles => "circles",
            PatternKind::Flowers => "flowers",
            PatternKind::Hearts => "hearts",
            PatternKind::Dots => "dots",
        }
    }

    /// Whether the kind can be written as vector art. The vector writer only
    /// knows module-box shapes, so everything else must be rasterized.
    pub fn vector_capable(&self) -> bool {
        matches!(self, PatternKind::Squares | PatternKind::Rounded)
    }

    /// All kinds, in presentation order.
    pub fn all() -> [PatternKind; 6] {
        [
            PatternKind::Squares,
            PatternKind::Rounded,
            PatternKind::Circles,
            PatternKind::Flowers,
            PatternKind::Hearts,
            PatternKind::Dots,
        ]
    }
}

/// Decorative frame composited around a finished render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameKind {
    /// No frame; the render passes through untouched.
    #[default]
    None,
    /// "SCAN ME" label above the code.
    ScanMeTop,
    /// "SCAN ME" label below the code.
    ScanMeBottom,
    /// A thin solid border in the accent color.
    SimpleBorder,
    /// A rounded-corner panel behind the code.
    RoundedBorder,
    /// A camera lens above the code, with a label.
    CameraIcon,
    /// A phone outline above the code, with a label.
    SmartphoneIcon,
    /// Double outlines with filled corner marks.
    Elegant,
}

impl FrameKind {
    /// Map a configuration name to a kind. Unrecognized names fall back to
    /// [FrameKind::None] so a render can always be produced.
    /// # Example
    /// ```
    /// use deqora_core::FrameKind;
    /// assert_eq!(FrameKind::from_name("elegant"), FrameKind::Elegant);
    /// assert_eq!(FrameKind::from_name("filigree"), FrameKind::None);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "none" => FrameKind::None,
            "scan_me_top" => FrameKind::ScanMeTop,
            "scan_me_bottom" => FrameKind::ScanMeBottom,
            "simple_border" => FrameKind::SimpleBorder,
            "rounded_border" => FrameKind::RoundedBorder,
            "camera_icon" => FrameKind::CameraIcon,
            "smartphone_icon" => FrameKind::SmartphoneIcon,
            "elegant" => FrameKind::Elegant,
            _ => FrameKind::None,
        }
    }

    /// Get the canonical configuration name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            FrameKind::None => "none",
            FrameKind::ScanMeTop => "scan_me_top",
            FrameKind::ScanMeBottom => "scan_me_bottom",
            FrameKind::SimpleBorder => "simple_border",
            FrameKind::RoundedBorder => "rounded_border",
            FrameKind::CameraIcon => "camera_icon",
            FrameKind::SmartphoneIcon => "smartphone_icon",
            FrameKind::Elegant => "elegant",
        }
    }

    /// All kinds, in presentation order.
    pub fn all() -> [FrameKind; 8] {
        [
            FrameKind::None,
            FrameKind::ScanMeTop,
            FrameKind::ScanMeBottom,
            FrameKind::SimpleBorder,
            FrameKind::RoundedBorder,
            FrameKind::CameraIcon,
            FrameKind::SmartphoneIcon,
            FrameKind::Elegant,
        ]
    }
}

/// Error correction level requested from the QR encoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ecl {
    /// Low, ~7% recovery.
    L,
    /// Medium, ~15% recovery.
    M,
    /// Quartile, ~25% recovery. Styled modules eat into the contrast margin,
    /// so this is the default.
    #[default]
    Q,
    /// High, ~30% recovery.
    H,
}

impl FromStr for Ecl {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" | "l" => Ok(Ecl::L),
            "M" | "m" => Ok(Ecl::M),
            "Q" | "q" => Ok(Ecl::Q),
            "H" | "h" => Ok(Ecl::H),
            _ => Err(StyleError::InvalidEcl(s.to_string())),
        }
    }
}

impl fmt::Display for Ecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Ecl::L => "L",
            Ecl::M => "M",
            Ecl::Q => "Q",
            Ecl::H => "H",
        };
        write!(f, "{}", letter)
    }
}

/// Visual configuration of a render: colors, module pattern, frame, and the
/// scale in pixels per module edge.
///
/// A spec is a plain value. Renderers borrow it and never mutate it, so one
/// spec can drive any number of renders.
/// # Example
/// ```
/// use deqora_core::{PatternKind, Rgb, StyleSpec};
/// let style = StyleSpec::new()
///     .with_dark(Rgb::from_hex("#006994").unwrap())
///     .with_pattern(PatternKind::Circles)
///     .with_scale(8);
/// assert_eq!(style.light, Rgb::WHITE);
/// assert_eq!(style.scale, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleSpec {
    /// Color of dark modules.
    pub dark: Rgb,
    /// Background color.
    pub light: Rgb,
    /// Shape drawn for dark modules.
    pub pattern: PatternKind,
    /// Frame composited around the render.
    pub frame: FrameKind,
    /// Pixels per module edge.
    pub scale: u32,
}

impl StyleSpec {
    pub const DEFAULT_SCALE: u32 = 10;

    /// Construct the default style: black on white, square modules, no
    /// frame, scale [StyleSpec::DEFAULT_SCALE].
    pub fn new() -> Self {
        Self {
            dark: Rgb::BLACK,
            light: Rgb::WHITE,
            pattern: PatternKind::default(),
            frame: FrameKind::default(),
            scale: Self::DEFAULT_SCALE,
        }
    }

    /// Set the dark module color.
    pub fn with_dark(mut self, dark: Rgb) -> Self {
        self.dark = dark;
        self
    }

    /// Set the background color.
    pub fn with_light(mut self, light: Rgb) -> Self {
        self.light = light;
        self
    }

    /// Set the module pattern.
    pub fn with_pattern(mut self, pattern: PatternKind) -> Self {
        self.pattern = pattern;
        self
    }

    /// Set the frame.
    pub fn with_frame(mut self, frame: FrameKind) -> Self {
        self.frame = frame;
        self
    }

    /// Set the scale in pixels per module edge. Zero is clamped to 1 so the
    /// resulting spec always produces a visible render.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// An error in a style description.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The color is not a `#rrggbb` string.
    #[error("invalid color '{0}': expected '#rrggbb'")]
    InvalidColor(String),
    /// The error correction level is not one of L, M, Q, H.
    #[error("invalid error correction level '{0}': expected one of L, M, Q, H")]
    InvalidEcl(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hex_parse() {
        assert_eq!(Rgb::from_hex("#000000"), Ok(Rgb::BLACK));
        assert_eq!(Rgb::from_hex("#FFFFFF"), Ok(Rgb::WHITE));
        assert_eq!(Rgb::from_hex("2D5016"), Ok(Rgb(0x2d, 0x50, 0x16)));
        assert_eq!(
            Rgb::from_hex("#12345"),
            Err(StyleError::InvalidColor("#12345".to_string()))
        );
        assert!(Rgb::from_hex("#12345g").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn test_hex_roundtrip() {
        for color in [Rgb(0, 105, 148), Rgb(255, 107, 53), Rgb(20, 30, 48)] {
            assert_eq!(Rgb::from_hex(&color.to_hex()), Ok(color));
        }
    }

    #[test]
    fn test_pattern_names_roundtrip() {
        for kind in PatternKind::all() {
            assert_eq!(PatternKind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn test_unknown_pattern_falls_back_to_squares() {
        assert_eq!(PatternKind::from_name(""), PatternKind::Squares);
        assert_eq!(PatternKind::from_name("Dots"), PatternKind::Squares);
        assert_eq!(PatternKind::from_name("hex"), PatternKind::Squares);
    }

    #[test]
    fn test_frame_names_roundtrip() {
        for kind in FrameKind::all() {
            assert_eq!(FrameKind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn test_unknown_frame_falls_back_to_none() {
        assert_eq!(FrameKind::from_name(""), FrameKind::None);
        assert_eq!(FrameKind::from_name("banner"), FrameKind::None);
    }

    #[test]
    fn test_ecl_from_str() {
        assert_eq!("L".parse(), Ok(Ecl::L));
        assert_eq!("q".parse(), Ok(Ecl::Q));
        assert_eq!(
            "X".parse::<Ecl>(),
            Err(StyleError::InvalidEcl("X".to_string()))
        );
    }

    #[test]
    fn test_spec_defaults() {
        let style = StyleSpec::new();
        assert_eq!(style.dark, Rgb::BLACK);
        assert_eq!(style.light, Rgb::WHITE);
        assert_eq!(style.pattern, PatternKind::Squares);
        assert_eq!(style.frame, FrameKind::None);
        assert_eq!(style.scale, StyleSpec::DEFAULT_SCALE);
        assert_eq!(StyleSpec::default(), style);
    }

    #[test]
    fn test_zero_scale_is_clamped() {
        assert_eq!(StyleSpec::new().with_scale(0).scale, 1);
        assert_eq!(StyleSpec::new().with_scale(7).scale, 7);
    }
}
