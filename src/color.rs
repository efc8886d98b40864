use std::fmt;

use palette::Srgb;
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Color – an sRGB colour written as a CSS `rgb(...)` string
// ---------------------------------------------------------------------------

/// 8-bit sRGB colour used throughout the figure styling.
///
/// Serialises as `rgb(r, g, b)`, which plotly.js accepts everywhere a
/// colour is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub Srgb<u8>);

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(Srgb::new(r, g, b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0.red, self.0.green, self.0.blue)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
