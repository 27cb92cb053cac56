//! Snapshots: everything a front-end needs to redraw after the color changes, and the exact text
//! each copy button puts on the clipboard.

use std::fmt;
use std::str::FromStr;

use crate::color::{Color, RGBColor};
use crate::colors::CMYKColor;
use crate::model::PickerColor;

/// The full set of derived display values for one color. Every field is a pure function of the
/// canonical color and the wheel angle it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    /// Hue in degrees, 0-359.
    pub hue: u16,
    /// Saturation in percent.
    pub saturation: u8,
    /// Lightness in percent.
    pub lightness: u8,
    /// Angle of the wheel indicator, `(360 - hue) mod 360` whenever the hue changed last.
    pub wheel_angle: u16,
    /// Uppercase `#RRGGBB` hex code.
    pub hex: String,
    /// Red, green and blue bytes.
    pub rgb: (u8, u8, u8),
    /// Cyan, magenta, yellow and key as whole percentages.
    pub cmyk: (u8, u8, u8, u8),
}

impl Snapshot {
    /// Derives every view of `color`.
    pub fn of(color: &PickerColor, wheel_angle: u16) -> Snapshot {
        // CMYK is taken from the rounded bytes, so it agrees with the RGB text next to it
        let rgb = color.to_rgb().int_rgb_tup();
        let exact = RGBColor::from(rgb);
        let cmyk: CMYKColor = exact.convert();
        Snapshot {
            hue: color.hue,
            saturation: color.saturation,
            lightness: color.lightness,
            wheel_angle,
            hex: exact.to_string(),
            rgb,
            cmyk: cmyk.int_percentages(),
        }
    }

    /// The hex field's text, e.g. `#FF0000`.
    pub fn hex_text(&self) -> &str {
        &self.hex
    }

    /// The RGB field's text, e.g. `255, 0, 0`.
    pub fn rgb_text(&self) -> String {
        let (r, g, b) = self.rgb;
        format!("{}, {}, {}", r, g, b)
    }

    /// The CMYK field's text, e.g. `0, 100, 100, 0`.
    pub fn cmyk_text(&self) -> String {
        let (c, m, y, k) = self.cmyk;
        format!("{}, {}, {}, {}", c, m, y, k)
    }
}

/// Which of the three text representations to copy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CopyFormat {
    /// `#RRGGBB`
    Hex,
    /// `R, G, B`
    Rgb,
    /// `C, M, Y, K`
    Cmyk,
}

impl fmt::Display for CopyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            CopyFormat::Hex => "hex",
            CopyFormat::Rgb => "rgb",
            CopyFormat::Cmyk => "cmyk",
        };
        f.write_str(name)
    }
}

/// Error for a format name that is none of `hex`, `rgb` or `cmyk`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown copy format `{0}`, expected hex, rgb or cmyk")]
pub struct UnknownFormat(pub String);

impl FromStr for CopyFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<CopyFormat, UnknownFormat> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(CopyFormat::Hex),
            "rgb" => Ok(CopyFormat::Rgb),
            "cmyk" => Ok(CopyFormat::Cmyk),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Clipboard text for the hex copy button: uppercase `#RRGGBB`.
pub fn hex_clipboard(snapshot: &Snapshot) -> String {
    snapshot.hex_text().to_string()
}

/// Clipboard text for the RGB copy button: `R, G, B` in decimal.
pub fn rgb_clipboard(snapshot: &Snapshot) -> String {
    snapshot.rgb_text()
}

/// Clipboard text for the CMYK copy button: `C, M, Y, K` in whole percent.
pub fn cmyk_clipboard(snapshot: &Snapshot) -> String {
    snapshot.cmyk_text()
}

/// Clipboard text for whichever copy button was pressed.
pub fn clipboard_text(format: CopyFormat, snapshot: &Snapshot) -> String {
    match format {
        CopyFormat::Hex => hex_clipboard(snapshot),
        CopyFormat::Rgb => rgb_clipboard(snapshot),
        CopyFormat::Cmyk => cmyk_clipboard(snapshot),
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_clipboard_text() {
        let red = Snapshot::of(&PickerColor::default(), 0);
        assert_eq!(hex_clipboard(&red), "#FF0000");
        assert_eq!(rgb_clipboard(&red), "255, 0, 0");
        assert_eq!(cmyk_clipboard(&red), "0, 100, 100, 0");

        let steel = Snapshot::of(&PickerColor::new(210, 50, 40), 150);
        assert_eq!(clipboard_text(CopyFormat::Hex, &steel), "#336699");
        assert_eq!(clipboard_text(CopyFormat::Rgb, &steel), "51, 102, 153");
        assert_eq!(clipboard_text(CopyFormat::Cmyk, &steel), "67, 33, 0, 40");
    }

    #[test]
    fn test_copy_format_names() {
        assert_eq!("HEX".parse::<CopyFormat>(), Ok(CopyFormat::Hex));
        assert_eq!("cmyk".parse::<CopyFormat>(), Ok(CopyFormat::Cmyk));
        assert_eq!(
            "hsl".parse::<CopyFormat>(),
            Err(UnknownFormat("hsl".to_string()))
        );
        assert_eq!(CopyFormat::Rgb.to_string(), "rgb");
    }

    #[test]
    fn test_snapshot_serializes() {
        let red = Snapshot::of(&PickerColor::default(), 0);
        let json = serde_json::to_string(&red).unwrap();
        assert!(json.contains("\"hex\":\"#FF0000\""));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, red);
    }
}
