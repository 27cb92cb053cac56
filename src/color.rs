//! This module defines the [`Color`] trait, which every color representation in tinct implements,
//! and the sRGB color [`RGBColor`]. sRGB is the hub of every conversion: each color type only
//! needs to know how to get to and from sRGB, and [`Color::convert`] chains the two halves so that
//! any representation can be turned into any other.

use std::fmt;
use std::str::FromStr;

use crate::entry::{parse_hex, EntryError};

/// A color representation that can be converted to and from sRGB. Implementing the two required
/// methods is enough to get conversion into every other `Color` for free.
pub trait Color: Sized {
    /// Builds this representation from an sRGB color.
    fn from_rgb(rgb: RGBColor) -> Self;
    /// Expresses this color in sRGB.
    fn to_rgb(&self) -> RGBColor;
    /// Converts this color into any other `Color`, going through sRGB.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinct::prelude::*;
    /// let teal = RGBColor::from((0, 128, 128));
    /// let hsl: HSLColor = teal.convert();
    /// assert_eq!(hsl.h.round(), 180.);
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_rgb(self.to_rgb())
    }
}

/// A color in the sRGB space, with each component stored as a float between 0 and 1. Components
/// outside that range are allowed in intermediate math but are clamped when turned into bytes.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red component, from 0 to 1.
    pub r: f64,
    /// The green component, from 0 to 1.
    pub g: f64,
    /// The blue component, from 0 to 1.
    pub b: f64,
}

/// Scales a 0-1 component to a byte, rounding half away from zero.
fn channel_byte(component: f64) -> u8 {
    (num::clamp(component, 0.0, 1.0) * 255.0).round() as u8
}

impl RGBColor {
    /// The red component as a byte.
    pub fn int_r(&self) -> u8 {
        channel_byte(self.r)
    }
    /// The green component as a byte.
    pub fn int_g(&self) -> u8 {
        channel_byte(self.g)
    }
    /// The blue component as a byte.
    pub fn int_b(&self) -> u8 {
        channel_byte(self.b)
    }
    /// All three components as bytes, in R, G, B order.
    pub fn int_rgb_tup(&self) -> (u8, u8, u8) {
        (self.int_r(), self.int_g(), self.int_b())
    }
    /// Parses a `#RGB` or `#RRGGBB` hex code, case-insensitively. The short form repeats each
    /// digit, so `#F80` is the same color as `#FF8800`.
    ///
    /// # Errors
    /// Returns [`EntryError::InvalidHex`] for anything else, including codes without the leading
    /// `#` and codes with surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinct::color::RGBColor;
    /// let orange = RGBColor::from_hex_code("#f80").unwrap();
    /// assert_eq!(orange.to_string(), "#FF8800");
    /// assert!(RGBColor::from_hex_code("FF8800").is_err());
    /// ```
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, EntryError> {
        parse_hex(hex).map(RGBColor::from)
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        let (r, g, b) = rgb;
        RGBColor {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }
}

/// Formats as an uppercase six-digit hex code with a leading `#`, e.g. `#FF0000`.
impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.int_r(), self.int_g(), self.int_b())
    }
}

impl FromStr for RGBColor {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<RGBColor, EntryError> {
        RGBColor::from_hex_code(s)
    }
}

impl Color for RGBColor {
    fn from_rgb(rgb: RGBColor) -> RGBColor {
        rgb
    }
    fn to_rgb(&self) -> RGBColor {
        *self
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_formatting() {
        assert_eq!(RGBColor::from((255, 0, 0)).to_string(), "#FF0000");
        assert_eq!(RGBColor::from((17, 69, 124)).to_string(), "#11457C");
        // out-of-range components clamp instead of wrapping
        let hot = RGBColor {
            r: 1.2,
            g: -0.3,
            b: 0.5,
        };
        assert_eq!(hot.int_rgb_tup(), (255, 0, 128));
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(
            RGBColor::from_hex_code("#11457c").unwrap().int_rgb_tup(),
            (17, 69, 124)
        );
        assert_eq!(
            "#FFF".parse::<RGBColor>().unwrap().int_rgb_tup(),
            (255, 255, 255)
        );
        assert_eq!(RGBColor::from_hex_code("red"), Err(EntryError::InvalidHex));
    }

    #[test]
    fn test_byte_round_trip() {
        for value in 0..=255u8 {
            let color = RGBColor::from((value, 255 - value, value / 2));
            assert_eq!(color.int_rgb_tup(), (value, 255 - value, value / 2));
        }
    }
}
