//! This file parses what a user types into the picker's three text fields. The policy is a
//! forgiving one: the user may be halfway through typing, so anything that is not yet a complete
//! color is simply rejected and the caller leaves everything as it was. Numbers that are complete
//! but out of range are clamped rather than rejected, so `300, 0, 0` is full red.
//!
//! Accepted forms:
//! - hex: `#RGB` or `#RRGGBB`, any case, nothing around it
//! - RGB: `R, G, B` with one to three digits per component
//! - CMYK: `C, M, Y, K` with one to three digits per component
//!
//! The space after each comma is optional, a space before a comma is not. Leading and trailing
//! whitespace around the whole RGB or CMYK text is ignored.

use regex::{Captures, Regex};
use thiserror::Error;

/// An error in parsing a text field. Every variant means the same thing to the model: leave the
/// color alone.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Error)]
pub enum EntryError {
    /// The text is not a `#RGB` or `#RRGGBB` hex code.
    #[error("not a #RGB or #RRGGBB hex code")]
    InvalidHex,
    /// The text is not an `R, G, B` triple of decimal numbers.
    #[error("not an `R, G, B` triple")]
    InvalidRgb,
    /// The text is not a `C, M, Y, K` quadruple of decimal numbers.
    #[error("not a `C, M, Y, K` quadruple")]
    InvalidCmyk,
    /// The text has the wrong number of commas, e.g. a fourth number typed into the RGB field.
    #[error("expected {expected} comma separators, found {found}")]
    SeparatorCount {
        /// How many commas the field takes.
        expected: usize,
        /// How many commas the text has.
        found: usize,
    },
}

lazy_static! {
    static ref HEX_PATTERN: Regex = Regex::new(r"^#(?:[0-9a-fA-F]{3}){1,2}$").unwrap();
    static ref RGB_PATTERN: Regex =
        Regex::new(r"^\s*([0-9]{1,3}),\s*([0-9]{1,3}),\s*([0-9]{1,3})\s*$").unwrap();
    static ref CMYK_PATTERN: Regex = Regex::new(
        r"^\s*([0-9]{1,3}),\s*([0-9]{1,3}),\s*([0-9]{1,3}),\s*([0-9]{1,3})\s*$"
    )
    .unwrap();
}

/// Checks the comma count before the pattern, so a stray extra group is reported as such.
fn check_separators(text: &str, expected: usize) -> Result<(), EntryError> {
    let found = text.matches(',').count();
    if found == expected {
        Ok(())
    } else {
        Err(EntryError::SeparatorCount { expected, found })
    }
}

/// Reads capture group `i` as a number clamped to `max`.
fn clamped_group(
    caps: &Captures<'_>,
    i: usize,
    max: u16,
    err: EntryError,
) -> Result<u8, EntryError> {
    let digits = caps.get(i).ok_or(err)?.as_str();
    let value: u16 = digits.parse().map_err(|_| err)?;
    Ok(num::clamp(value, 0, max) as u8)
}

/// Parses a `#RGB` or `#RRGGBB` hex code into its three bytes.
///
/// # Errors
/// [`EntryError::InvalidHex`] if the text is not exactly one of those two forms.
pub fn parse_hex(text: &str) -> Result<(u8, u8, u8), EntryError> {
    if !HEX_PATTERN.is_match(text) {
        return Err(EntryError::InvalidHex);
    }
    let digits = &text[1..];
    let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| EntryError::InvalidHex);
    if digits.len() == 3 {
        // #F80 means #FF8800: each digit d stands for d * 0x11
        let short = |i: usize| byte(&digits[i..=i]).map(|d| d * 0x11);
        Ok((short(0)?, short(1)?, short(2)?))
    } else {
        Ok((byte(&digits[0..2])?, byte(&digits[2..4])?, byte(&digits[4..6])?))
    }
}

/// Parses an `R, G, B` triple. Components above 255 are clamped to 255.
///
/// # Errors
/// [`EntryError::SeparatorCount`] unless there are exactly two commas, and
/// [`EntryError::InvalidRgb`] if the text is not three groups of one to three digits.
pub fn parse_rgb(text: &str) -> Result<(u8, u8, u8), EntryError> {
    check_separators(text, 2)?;
    let err = EntryError::InvalidRgb;
    let caps = RGB_PATTERN.captures(text).ok_or(err)?;
    Ok((
        clamped_group(&caps, 1, 255, err)?,
        clamped_group(&caps, 2, 255, err)?,
        clamped_group(&caps, 3, 255, err)?,
    ))
}

/// Parses a `C, M, Y, K` quadruple of percentages. Components above 100 are clamped to 100.
///
/// # Errors
/// [`EntryError::SeparatorCount`] unless there are exactly three commas, and
/// [`EntryError::InvalidCmyk`] if the text is not four groups of one to three digits.
pub fn parse_cmyk(text: &str) -> Result<(u8, u8, u8, u8), EntryError> {
    check_separators(text, 3)?;
    let err = EntryError::InvalidCmyk;
    let caps = CMYK_PATTERN.captures(text).ok_or(err)?;
    Ok((
        clamped_group(&caps, 1, 100, err)?,
        clamped_group(&caps, 2, 100, err)?,
        clamped_group(&caps, 3, 100, err)?,
        clamped_group(&caps, 4, 100, err)?,
    ))
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(parse_hex("#FF0000"), Ok((255, 0, 0)));
        assert_eq!(parse_hex("#11457c"), Ok((17, 69, 124)));
        assert_eq!(parse_hex("#f80"), Ok((255, 136, 0)));
        assert_eq!(parse_hex("#000"), Ok((0, 0, 0)));
        // test errors
        let bad_codes = [
            "red", "#12", "123456", "#12345", "#1234567", "#GGGGGG", " #FFF", "#FFF ", "",
        ];
        for bad in &bad_codes {
            assert_eq!(parse_hex(bad), Err(EntryError::InvalidHex), "{:?}", bad);
        }
    }

    #[test]
    fn test_rgb_parsing() {
        assert_eq!(parse_rgb("255, 0, 0"), Ok((255, 0, 0)));
        assert_eq!(parse_rgb("12,34,  56"), Ok((12, 34, 56)));
        assert_eq!(parse_rgb("  7, 8, 9 "), Ok((7, 8, 9)));
        // test clamping
        assert_eq!(parse_rgb("300, 999, 256"), Ok((255, 255, 255)));
        // test errors
        assert_eq!(parse_rgb("a, b, c"), Err(EntryError::InvalidRgb));
        assert_eq!(parse_rgb("255 ,0, 0"), Err(EntryError::InvalidRgb));
        assert_eq!(parse_rgb("1, 2, 3456"), Err(EntryError::InvalidRgb));
        assert_eq!(parse_rgb("1, 2, "), Err(EntryError::InvalidRgb));
        assert_eq!(
            parse_rgb("1, 2, 3, 4"),
            Err(EntryError::SeparatorCount {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            parse_rgb("1, 2"),
            Err(EntryError::SeparatorCount {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_cmyk_parsing() {
        assert_eq!(parse_cmyk("0, 100, 100, 0"), Ok((0, 100, 100, 0)));
        assert_eq!(parse_cmyk("10,20,30,40"), Ok((10, 20, 30, 40)));
        assert_eq!(parse_cmyk("150, 0, 0, 101"), Ok((100, 0, 0, 100)));
        assert_eq!(
            parse_cmyk("0, 100, 100"),
            Err(EntryError::SeparatorCount {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(parse_cmyk("0, 1.5, 100, 0"), Err(EntryError::InvalidCmyk));
        assert_eq!(
            parse_cmyk("0, 0, 0, 0, 0"),
            Err(EntryError::SeparatorCount {
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = EntryError::SeparatorCount {
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), "expected 2 comma separators, found 3");
        assert_eq!(EntryError::InvalidHex.to_string(), "not a #RGB or #RRGGBB hex code");
    }
}
