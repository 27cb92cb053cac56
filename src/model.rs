//! The color model behind the picker. [`PickerColor`] is the one value everything shows, and
//! [`ColorSyncModel`] has one update entry point per input surface. Each entry point either applies
//! completely and returns a fresh [`Snapshot`] of every derived view, or rejects the input and
//! leaves the model exactly as it was.
//!
//! Hex, RGB and CMYK are never stored. They are recomputed from the canonical hue, saturation and
//! lightness every time a snapshot is taken, so two views can never disagree.

use crate::color::{Color, RGBColor};
use crate::colors::{CMYKColor, HSLColor};
use crate::entry::{parse_cmyk, parse_hex, parse_rgb, EntryError};
use crate::snapshot::Snapshot;
use crate::wheel::{hue_from_wheel_angle, normalize_angle, wheel_angle_from_hue};

/// The canonical color: whole-degree hue and whole-percent saturation and lightness. The default is
/// pure red.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerColor {
    /// Hue in degrees, from 0 to 359.
    pub hue: u16,
    /// Saturation in percent, from 0 to 100.
    pub saturation: u8,
    /// Lightness in percent, from 0 to 100.
    pub lightness: u8,
}

impl Default for PickerColor {
    fn default() -> PickerColor {
        PickerColor {
            hue: 0,
            saturation: 100,
            lightness: 50,
        }
    }
}

impl PickerColor {
    /// Builds a color from raw integers, wrapping the hue into 0-359 and clamping saturation and
    /// lightness into 0-100.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinct::model::PickerColor;
    /// let color = PickerColor::new(-30, 120, 50);
    /// assert_eq!((color.hue, color.saturation, color.lightness), (330, 100, 50));
    /// ```
    pub fn new(hue: i32, saturation: i32, lightness: i32) -> PickerColor {
        PickerColor {
            hue: normalize_angle(hue),
            saturation: num::clamp(saturation, 0, 100) as u8,
            lightness: num::clamp(lightness, 0, 100) as u8,
        }
    }

    /// Rounds a float HSL color to the nearest whole degree and percent. A hue that rounds up to
    /// 360 becomes 0.
    pub fn from_hsl(hsl: HSLColor) -> PickerColor {
        let percent = |x: f64| (num::clamp(x, 0.0, 1.0) * 100.0).round() as u8;
        PickerColor {
            hue: (hsl.h.rem_euclid(360.0).round() as u16) % 360,
            saturation: percent(hsl.s),
            lightness: percent(hsl.l),
        }
    }

    /// This color as a float HSL color, with saturation and lightness scaled to 0-1.
    pub fn to_hsl(&self) -> HSLColor {
        HSLColor {
            h: f64::from(self.hue),
            s: f64::from(self.saturation) / 100.0,
            l: f64::from(self.lightness) / 100.0,
        }
    }

    /// Whether every component is in its range. Colors built by [`PickerColor::new`] always are,
    /// but ones read from a config file or written field by field might not be.
    pub fn is_valid(&self) -> bool {
        self.hue < 360 && self.saturation <= 100 && self.lightness <= 100
    }
}

impl Color for PickerColor {
    fn from_rgb(rgb: RGBColor) -> PickerColor {
        PickerColor::from_hsl(HSLColor::from_rgb(rgb))
    }
    fn to_rgb(&self) -> RGBColor {
        self.to_hsl().to_rgb()
    }
}

/// Holds the canonical color and the wheel angle, and keeps them consistent with every input
/// surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSyncModel {
    color: PickerColor,
    wheel_angle: u16,
}

impl Default for ColorSyncModel {
    fn default() -> ColorSyncModel {
        ColorSyncModel::with_color(PickerColor::default())
    }
}

impl ColorSyncModel {
    /// A model holding pure red, with the wheel at 0 degrees.
    pub fn new() -> ColorSyncModel {
        ColorSyncModel::default()
    }

    /// A model starting from the given color. The wheel angle follows the hue.
    pub fn with_color(color: PickerColor) -> ColorSyncModel {
        let color = PickerColor::new(
            i32::from(color.hue),
            i32::from(color.saturation),
            i32::from(color.lightness),
        );
        ColorSyncModel {
            wheel_angle: wheel_angle_from_hue(i32::from(color.hue)),
            color,
        }
    }

    /// The current canonical color.
    pub fn color(&self) -> PickerColor {
        self.color
    }

    /// The current wheel angle, in the wheel's own convention.
    pub fn wheel_angle(&self) -> u16 {
        self.wheel_angle
    }

    /// Every derived view of the current color.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.color, self.wheel_angle)
    }

    /// Sets the hue from a wheel angle. Any integer is accepted and wrapped into 0-359 first; the
    /// hue is then `(360 - angle) mod 360`. Saturation and lightness are untouched.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinct::model::ColorSyncModel;
    /// let mut model = ColorSyncModel::new();
    /// assert_eq!(model.set_from_wheel_angle(90).hue, 270);
    /// assert_eq!(model.set_from_wheel_angle(360).hue, 0);
    /// ```
    pub fn set_from_wheel_angle(&mut self, angle: i32) -> Snapshot {
        self.wheel_angle = normalize_angle(angle);
        self.color.hue = hue_from_wheel_angle(i32::from(self.wheel_angle));
        debug!("wheel angle {} -> hue {}", self.wheel_angle, self.color.hue);
        self.snapshot()
    }

    /// Sets the saturation, clamped into 0-100.
    pub fn set_from_saturation(&mut self, percent: i32) -> Snapshot {
        self.color.saturation = num::clamp(percent, 0, 100) as u8;
        debug!("saturation -> {}%", self.color.saturation);
        self.snapshot()
    }

    /// Sets the lightness, clamped into 0-100.
    pub fn set_from_lightness(&mut self, percent: i32) -> Snapshot {
        self.color.lightness = num::clamp(percent, 0, 100) as u8;
        debug!("lightness -> {}%", self.color.lightness);
        self.snapshot()
    }

    /// Sets the color from the hex field's text.
    ///
    /// # Errors
    /// [`EntryError::InvalidHex`] if the text is not a complete `#RGB` or `#RRGGBB` code, in which
    /// case nothing changes.
    pub fn set_from_hex(&mut self, text: &str) -> Result<Snapshot, EntryError> {
        let rgb = RGBColor::from(parse_hex(text)?);
        Ok(self.apply_rgb(rgb, "hex"))
    }

    /// Sets the color from the RGB field's text. Components above 255 are clamped.
    ///
    /// # Errors
    /// Any parse error from [`parse_rgb`], in which case nothing changes.
    pub fn set_from_rgb(&mut self, text: &str) -> Result<Snapshot, EntryError> {
        let rgb = RGBColor::from(parse_rgb(text)?);
        Ok(self.apply_rgb(rgb, "rgb"))
    }

    /// Sets the color from the CMYK field's text. Components above 100 are clamped.
    ///
    /// # Errors
    /// Any parse error from [`parse_cmyk`], in which case nothing changes.
    pub fn set_from_cmyk(&mut self, text: &str) -> Result<Snapshot, EntryError> {
        let rgb = CMYKColor::from(parse_cmyk(text)?).to_rgb();
        Ok(self.apply_rgb(rgb, "cmyk"))
    }

    fn apply_rgb(&mut self, rgb: RGBColor, source: &str) -> Snapshot {
        self.color = PickerColor::from_rgb(rgb);
        self.wheel_angle = wheel_angle_from_hue(i32::from(self.color.hue));
        debug!(
            "{} field {} -> hsl({}, {}%, {}%)",
            source,
            rgb,
            self.color.hue,
            self.color.saturation,
            self.color.lightness
        );
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_default_is_red() {
        let snap = ColorSyncModel::new().snapshot();
        assert_eq!((snap.hue, snap.saturation, snap.lightness), (0, 100, 50));
        assert_eq!(snap.wheel_angle, 0);
        assert_eq!(snap.hex, "#FF0000");
        assert_eq!(snap.rgb, (255, 0, 0));
        assert_eq!(snap.cmyk, (0, 100, 100, 0));
    }

    #[test]
    fn test_wheel_angle_inverts_hue() {
        let mut model = ColorSyncModel::new();
        let snap = model.set_from_wheel_angle(90);
        assert_eq!(snap.hue, 270);
        assert_eq!(snap.wheel_angle, 90);
        assert_eq!(snap.hex, "#8000FF");
        assert_eq!(snap.cmyk_text(), "50, 100, 0, 0");
        assert_eq!(model.set_from_wheel_angle(0).hue, 0);
        assert_eq!(model.set_from_wheel_angle(360).hue, 0);
        let snap = model.set_from_wheel_angle(-90);
        assert_eq!((snap.wheel_angle, snap.hue), (270, 90));
        // saturation and lightness ride along untouched
        model.set_from_saturation(40);
        model.set_from_lightness(30);
        let snap = model.set_from_wheel_angle(123);
        assert_eq!((snap.saturation, snap.lightness), (40, 30));
    }

    #[test]
    fn test_sliders_clamp() {
        let mut model = ColorSyncModel::new();
        assert_eq!(model.set_from_saturation(0).hex, "#808080");
        assert_eq!(model.set_from_saturation(150).saturation, 100);
        let snap = model.set_from_lightness(-5);
        assert_eq!(snap.lightness, 0);
        assert_eq!(snap.hex, "#000000");
        assert_eq!(snap.cmyk, (0, 0, 0, 100));
        assert_eq!(model.set_from_lightness(100).hex, "#FFFFFF");
    }

    #[test]
    fn test_rgb_entry() {
        let mut model = ColorSyncModel::new();
        model.set_from_hex("#00FF00").unwrap();
        let snap = model.set_from_rgb("255, 0, 0").unwrap();
        assert_eq!((snap.hue, snap.saturation, snap.lightness), (0, 100, 50));
        assert_eq!(snap.hex, "#FF0000");
        assert_eq!(snap.cmyk_text(), "0, 100, 100, 0");
        assert_eq!(snap.wheel_angle, 0);
        // overflow clamps to full red
        model.set_from_lightness(10);
        assert_eq!(model.set_from_rgb("300, 0, 0").unwrap().hex, "#FF0000");
    }

    #[test]
    fn test_hex_entry() {
        let mut model = ColorSyncModel::new();
        let snap = model.set_from_hex("#0F0").unwrap();
        assert_eq!((snap.hue, snap.saturation, snap.lightness), (120, 100, 50));
        assert_eq!(snap.wheel_angle, 240);
        assert_eq!(snap.rgb_text(), "0, 255, 0");
        assert_eq!(snap.cmyk_text(), "100, 0, 100, 0");

        let snap = model.set_from_hex("#ff8800").unwrap();
        assert_eq!((snap.hue, snap.wheel_angle), (32, 328));
        assert_eq!(snap.hex, "#FF8800");

        let snap = model.set_from_hex("#808080").unwrap();
        assert_eq!((snap.hue, snap.saturation, snap.lightness), (0, 0, 50));
        assert_eq!(snap.cmyk, (0, 0, 0, 50));
    }

    #[test]
    fn test_hue_rounding_wraps() {
        // 359.76 degrees rounds to 360, which is 0
        let mut model = ColorSyncModel::new();
        model.set_from_wheel_angle(100);
        let snap = model.set_from_hex("#FF0001").unwrap();
        assert_eq!((snap.hue, snap.wheel_angle), (0, 0));
    }

    #[test]
    fn test_invalid_entry_is_a_no_op() {
        let mut model = ColorSyncModel::new();
        model.set_from_wheel_angle(45);
        let before = model.clone();
        for bad in &["red", "#12", "123456", "#GGG", ""] {
            assert_eq!(model.set_from_hex(bad), Err(EntryError::InvalidHex));
        }
        assert!(model.set_from_rgb("1, 2, 3, 4").is_err());
        assert!(model.set_from_rgb("1, 2").is_err());
        assert!(model.set_from_rgb("x, y, z").is_err());
        assert!(model.set_from_cmyk("0, 100, 100").is_err());
        assert!(model.set_from_cmyk("0, 100, 100, 0, 0").is_err());
        assert_eq!(model, before);
    }

    #[test]
    fn test_cmyk_entry() {
        let mut model = ColorSyncModel::new();
        let snap = model.set_from_cmyk("0, 0, 0, 100").unwrap();
        assert_eq!((snap.saturation, snap.lightness), (0, 0));
        assert_eq!(snap.hex, "#000000");
        assert_eq!(snap.cmyk_text(), "0, 0, 0, 100");

        let snap = model.set_from_cmyk("150, 0, 0, 0").unwrap();
        assert_eq!((snap.hue, snap.saturation, snap.lightness), (180, 100, 50));
        assert_eq!(snap.rgb, (0, 255, 255));
        assert_eq!(snap.wheel_angle, 180);

        let snap = model.set_from_cmyk("0, 100, 100, 0").unwrap();
        assert_eq!(snap.hex, "#FF0000");
    }

    #[test]
    fn test_with_color_normalizes() {
        let model = ColorSyncModel::with_color(PickerColor {
            hue: 400,
            saturation: 120,
            lightness: 50,
        });
        assert_eq!(model.color().hue, 40);
        assert_eq!(model.color().saturation, 100);
        assert_eq!(model.wheel_angle(), 320);
    }

    #[test]
    fn test_picker_color_conversion() {
        let teal = PickerColor::from_rgb(RGBColor::from((0, 128, 128)));
        assert_eq!((teal.hue, teal.saturation, teal.lightness), (180, 100, 25));
        assert_eq!(teal.to_rgb().to_string(), "#008080");
        assert!(teal.is_valid());
        assert!(!PickerColor {
            hue: 360,
            saturation: 0,
            lightness: 0
        }
        .is_valid());
    }
}
