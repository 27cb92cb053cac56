//! This file implements HSL, the cylindrical transformation of sRGB that the picker's wheel and
//! sliders are built on: hue is the angle around the wheel, saturation and lightness are the two
//! sliders. HSL says nothing useful about how colors are perceived, but it is cheap to compute and
//! it maps cleanly onto a hue wheel, which is all the picker needs from it.
//!
//! The formulas here are the hexagonal ones: RGB values are placed on a hexagon which is then
//! treated as if it were a circle. Gray has no defined hue, and converting gray into HSL gives a
//! hue of 0 degrees.

use crate::color::{Color, RGBColor};

/// A color in the HSL color space, a direct transformation of sRGB.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component, as an angle in degrees between 0 and 360. Values outside of that range
    /// are wrapped around when converting back to sRGB.
    pub h: f64,
    /// The saturation component, between 0 and 1.
    pub s: f64,
    /// The lightness component, between 0 and 1. Defined as the average of the largest and smallest
    /// sRGB components.
    pub l: f64,
}

impl Color for HSLColor {
    fn from_rgb(rgb: RGBColor) -> HSLColor {
        // Tilting the RGB cube onto its black-white diagonal and projecting it gives a hexagon, and
        // the "radius" of a point on that hexagon is simply the largest component minus the
        // smallest one. This is the chroma.
        let components = [rgb.r, rgb.g, rgb.b];
        let max_c = components.iter().cloned().fold(f64::MIN, f64::max);
        let min_c = components.iter().cloned().fold(f64::MAX, f64::min);
        let chroma = max_c - min_c;

        // the hue is how far around the hexagon we are, treated as degrees: first find the sector
        // from the largest component, then move within it linearly
        let hue = if chroma == 0.0 {
            0.0
        } else if max_c == rgb.r {
            // red sector straddles 0, so negative offsets wrap around to the top of the range
            ((rgb.g - rgb.b) / chroma).rem_euclid(6.0) * 60.0
        } else if max_c == rgb.g {
            ((rgb.b - rgb.r) / chroma) * 60.0 + 120.0
        } else {
            ((rgb.r - rgb.g) / chroma) * 60.0 + 240.0
        };

        let lightness = (max_c + min_c) / 2.0;
        // saturation is chroma relative to the largest chroma possible at this lightness, which
        // shrinks to nothing at black and white
        let at_black = approx_eq!(f64, lightness, 0.0, ulps = 2);
        let at_white = approx_eq!(f64, lightness, 1.0, ulps = 2);
        let saturation = if at_black || at_white {
            0.0
        } else {
            num::clamp(chroma / (1.0 - (2.0 * lightness - 1.0).abs()), 0.0, 1.0)
        };

        HSLColor {
            h: hue,
            s: saturation,
            l: lightness,
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let hue = self.h.rem_euclid(360.0);
        // first get back chroma
        let chroma = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        // the second-largest component when the smallest is 0
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        // which edge of the hexagon we're on decides which two components are the largest
        let (r1, g1, b1) = if hue < 60.0 {
            (chroma, x, 0.0)
        } else if hue < 120.0 {
            (x, chroma, 0.0)
        } else if hue < 180.0 {
            (0.0, chroma, x)
        } else if hue < 240.0 {
            (0.0, x, chroma)
        } else if hue < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        // lift every component by the same amount to reach the right lightness
        let offset = self.l - chroma / 2.0;
        RGBColor {
            r: r1 + offset,
            g: g1 + offset,
            b: b1 + offset,
        }
    }
}
