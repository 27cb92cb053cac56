//! CMYK, the subtractive print model: cyan, magenta and yellow inks plus a separate black (key)
//! ink. Conversions here are the naive device-independent ones, with no ink profiles: black is
//! pulled out first as whatever the brightest sRGB component leaves unlit, and the three inks cover
//! the rest.
//!
//! CMYK has more values than there are colors. Every quadruple where none of C, M and Y are zero
//! shares its color with one where the common part has been moved into K, and conversion from sRGB
//! always produces the latter. At full black, C, M and Y carry no information at all and come back
//! as zero.

use crate::color::{Color, RGBColor};

/// A color in the CMYK model, with every component as a fraction from 0 to 1.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMYKColor {
    /// The cyan component.
    pub c: f64,
    /// The magenta component.
    pub m: f64,
    /// The yellow component.
    pub y: f64,
    /// The key (black) component.
    pub k: f64,
}

fn percent(fraction: f64) -> u8 {
    (num::clamp(fraction, 0.0, 1.0) * 100.0).round() as u8
}

impl CMYKColor {
    /// All four components as whole percentages, in C, M, Y, K order.
    pub fn int_percentages(&self) -> (u8, u8, u8, u8) {
        (percent(self.c), percent(self.m), percent(self.y), percent(self.k))
    }
}

/// Builds a color from whole percentages. Values above 100 are clamped.
impl From<(u8, u8, u8, u8)> for CMYKColor {
    fn from(cmyk: (u8, u8, u8, u8)) -> CMYKColor {
        let (c, m, y, k) = cmyk;
        let fraction = |pct: u8| f64::from(pct.min(100)) / 100.0;
        CMYKColor {
            c: fraction(c),
            m: fraction(m),
            y: fraction(y),
            k: fraction(k),
        }
    }
}

impl Color for CMYKColor {
    fn from_rgb(rgb: RGBColor) -> CMYKColor {
        let max_c = [rgb.r, rgb.g, rgb.b]
            .iter()
            .cloned()
            .fold(f64::MIN, f64::max);
        if max_c <= 0.0 {
            // pure black: the inks would divide by zero, and no amount of them changes anything
            return CMYKColor {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 1.0,
            };
        }
        // (1 - x - K) / (1 - K) with K = 1 - max simplifies to (max - x) / max
        CMYKColor {
            c: (max_c - rgb.r) / max_c,
            m: (max_c - rgb.g) / max_c,
            y: (max_c - rgb.b) / max_c,
            k: 1.0 - max_c,
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let white = 1.0 - self.k;
        RGBColor {
            r: (1.0 - self.c) * white,
            g: (1.0 - self.m) * white,
            b: (1.0 - self.y) * white,
        }
    }
}
