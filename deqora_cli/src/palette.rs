use deqora_core::Rgb;

/// A named dark/light color pairing.
pub struct Palette {
    pub name: &'static str,
    /// Module color.
    pub primary: Rgb,
    /// Background color.
    pub secondary: Rgb,
}

/// The built-in palettes, in picker order.
pub const PALETTES: &[Palette] = &[
    Palette {
        name: "classic",
        primary: Rgb(0x00, 0x00, 0x00),
        secondary: Rgb(0xff, 0xff, 0xff),
    },
    Palette {
        name: "ocean",
        primary: Rgb(0x00, 0x69, 0x94),
        secondary: Rgb(0x00, 0xd4, 0xff),
    },
    Palette {
        name: "forest",
        primary: Rgb(0x2d, 0x50, 0x16),
        secondary: Rgb(0x7e, 0xc0, 0x9f),
    },
    Palette {
        name: "sunset",
        primary: Rgb(0xff, 0x6b, 0x35),
        secondary: Rgb(0xf7, 0xf0, 0x52),
    },
    Palette {
        name: "lavender",
        primary: Rgb(0x66, 0x7e, 0xea),
        secondary: Rgb(0x76, 0x4b, 0xa2),
    },
    Palette {
        name: "fire",
        primary: Rgb(0xed, 0x21, 0x3a),
        secondary: Rgb(0x93, 0x29, 0x1e),
    },
    Palette {
        name: "mint",
        primary: Rgb(0x00, 0xb0, 0x9b),
        secondary: Rgb(0x96, 0xc9, 0x3d),
    },
    Palette {
        name: "royal",
        primary: Rgb(0x14, 0x1e, 0x30),
        secondary: Rgb(0x24, 0x3b, 0x55),
    },
    Palette {
        name: "cherry",
        primary: Rgb(0xeb, 0x33, 0x49),
        secondary: Rgb(0xf4, 0x5c, 0x43),
    },
];

/// Look up a palette by name.
pub fn by_name(name: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|palette| palette.name == name)
}

/// The palette names, comma separated, for help and error messages.
pub fn names() -> String {
    PALETTES
        .iter()
        .map(|palette| palette.name)
        .collect::<Vec<_>>()
        .join(", ")
}
