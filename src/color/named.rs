use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{DrawShapeError, DrawShapeResult};

/// The closed set of colors a shape or background may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
}

impl NamedColor {
    /// Every named color, in the order published to hosts.
    pub const ALL: [NamedColor; 7] = [
        NamedColor::Black,
        NamedColor::White,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Blue,
        NamedColor::Yellow,
        NamedColor::Magenta,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::White => "white",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Blue => "blue",
            NamedColor::Yellow => "yellow",
            NamedColor::Magenta => "magenta",
        }
    }

    pub fn rgb(self) -> Rgb8 {
        match self {
            NamedColor::Black => Rgb8::new(0, 0, 0),
            NamedColor::White => Rgb8::new(255, 255, 255),
            NamedColor::Red => Rgb8::new(255, 0, 0),
            NamedColor::Green => Rgb8::new(0, 255, 0),
            NamedColor::Blue => Rgb8::new(0, 0, 255),
            NamedColor::Yellow => Rgb8::new(255, 255, 0),
            NamedColor::Magenta => Rgb8::new(255, 0, 255),
        }
    }

    pub fn hex(self) -> String {
        to_hex(self.rgb())
    }

    /// Look up a color by its exact (lowercase) name.
    pub fn from_name(name: &str) -> DrawShapeResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| DrawShapeError::invalid_color(name))
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColor {
    type Err = DrawShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Resolve a color name to its RGB triple.
pub fn resolve(name: &str) -> DrawShapeResult<Rgb8> {
    NamedColor::from_name(name).map(NamedColor::rgb)
}

/// Format as `#rrggbb` with lowercase hex digits.
pub fn to_hex(rgb: Rgb8) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Parse `#rrggbb` (the `#` is optional, digits are case-insensitive).
pub fn parse_hex(s: &str) -> DrawShapeResult<Rgb8> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DrawShapeError::validation(format!(
            "hex color must be exactly 6 hex digits, got \"{s}\""
        )));
    }

    fn hex_byte(pair: &str) -> DrawShapeResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| DrawShapeError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    Ok(Rgb8::new(
        hex_byte(&s[0..2])?,
        hex_byte(&s[2..4])?,
        hex_byte(&s[4..6])?,
    ))
}

/// All color names in publication order.
pub fn list_names() -> Vec<&'static str> {
    NamedColor::ALL.iter().map(|c| c.name()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/color/named.rs"]
mod tests;
