//! Color representation and naming

use std::fmt;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create an RGB color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Decode a Windows COLORREF (`0x00BBGGRR`)
    ///
    /// The high byte is ignored.
    pub const fn from_colorref(value: u32) -> Self {
        Rgb {
            r: (value & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: ((value >> 16) & 0xFF) as u8,
        }
    }

    /// Encode as a Windows COLORREF
    pub const fn to_colorref(&self) -> u32 {
        (self.r as u32) | ((self.g as u32) << 8) | ((self.b as u32) << 16)
    }

    /// Human-readable name: the closest entry in the named color table
    pub fn name(&self) -> &'static str {
        let mut best = &NAMED_COLORS[0];
        let mut best_distance = u32::MAX;
        for entry in NAMED_COLORS {
            let distance = self.distance_sq(&entry.1);
            if distance < best_distance {
                best = entry;
                best_distance = distance;
                if distance == 0 {
                    break;
                }
            }
        }
        best.0
    }

    fn distance_sq(&self, other: &Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Exact matches come first where two names share a value.
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("red", Rgb::new(255, 0, 0)),
    ("bright green", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("pink", Rgb::new(255, 0, 255)),
    ("turquoise", Rgb::new(0, 255, 255)),
    ("dark red", Rgb::new(128, 0, 0)),
    ("green", Rgb::new(0, 128, 0)),
    ("dark blue", Rgb::new(0, 0, 128)),
    ("dark yellow", Rgb::new(128, 128, 0)),
    ("violet", Rgb::new(128, 0, 128)),
    ("teal", Rgb::new(0, 128, 128)),
    ("light grey", Rgb::new(192, 192, 192)),
    ("grey", Rgb::new(128, 128, 128)),
    ("dark grey", Rgb::new(64, 64, 64)),
    ("periwinkle", Rgb::new(153, 153, 255)),
    ("plum", Rgb::new(153, 51, 102)),
    ("ivory", Rgb::new(255, 255, 204)),
    ("light turquoise", Rgb::new(204, 255, 255)),
    ("dark purple", Rgb::new(102, 0, 102)),
    ("coral", Rgb::new(255, 128, 128)),
    ("ocean blue", Rgb::new(0, 102, 204)),
    ("ice blue", Rgb::new(204, 204, 255)),
    ("sky blue", Rgb::new(0, 204, 255)),
    ("light green", Rgb::new(204, 255, 204)),
    ("light yellow", Rgb::new(255, 255, 153)),
    ("pale blue", Rgb::new(153, 204, 255)),
    ("rose", Rgb::new(255, 153, 204)),
    ("lavender", Rgb::new(204, 153, 255)),
    ("tan", Rgb::new(255, 204, 153)),
    ("light blue", Rgb::new(51, 102, 255)),
    ("aqua", Rgb::new(51, 204, 204)),
    ("lime", Rgb::new(153, 204, 0)),
    ("gold", Rgb::new(255, 204, 0)),
    ("light orange", Rgb::new(255, 153, 0)),
    ("orange", Rgb::new(255, 102, 0)),
    ("blue grey", Rgb::new(102, 102, 153)),
    ("dark teal", Rgb::new(0, 51, 102)),
    ("sea green", Rgb::new(51, 153, 102)),
    ("dark green", Rgb::new(0, 51, 0)),
    ("olive green", Rgb::new(51, 51, 0)),
    ("brown", Rgb::new(153, 51, 0)),
    ("indigo", Rgb::new(51, 51, 153)),
];
