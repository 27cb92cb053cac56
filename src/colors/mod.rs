//! This module contains the color representations besides sRGB that the picker shows. For
//! convenience, each main type is imported into this module's namespace directly.
pub mod cmykcolor;
pub mod hslcolor;

pub use self::cmykcolor::CMYKColor;
pub use self::hslcolor::HSLColor;
