//! Colors in ARGB8888 format and CSS hex parsing.

use crate::error::{RenderError, RenderResult};

pub const BACKGROUND: u32 = 0xFF101010;
pub const FOREGROUND: u32 = 0xFF50FF50;

/// Parses a CSS hex color (`#RRGGBB` or `#RGB`) into opaque ARGB8888.
pub fn parse_hex(input: &str) -> RenderResult<u32> {
    let digits = input
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| RenderError::color(input))?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RenderError::color(input));
    }

    let rgb = match digits.len() {
        6 => u32::from_str_radix(digits, 16).map_err(|_| RenderError::color(input))?,
        3 => {
            // #abc expands to #aabbcc
            let short = u32::from_str_radix(digits, 16).map_err(|_| RenderError::color(input))?;
            let (r, g, b) = ((short >> 8) & 0xF, (short >> 4) & 0xF, short & 0xF);
            (r * 0x11) << 16 | (g * 0x11) << 8 | (b * 0x11)
        }
        _ => return Err(RenderError::color(input)),
    };

    Ok(0xFF00_0000 | rgb)
}

/// Splits an ARGB8888 color into `[r, g, b, a]` bytes.
#[inline]
pub fn to_rgba(color: u32) -> [u8; 4] {
    let [a, r, g, b] = color.to_be_bytes();
    [r, g, b, a]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_form() {
        assert_eq!(parse_hex("#101010").unwrap(), BACKGROUND);
        assert_eq!(parse_hex("#50FF50").unwrap(), FOREGROUND);
        assert_eq!(parse_hex("#50ff50").unwrap(), FOREGROUND);
    }

    #[test]
    fn parses_short_form() {
        assert_eq!(parse_hex("#f0a").unwrap(), 0xFFFF00AA);
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["101010", "#12345", "#gggggg", "#+12345", ""] {
            assert!(parse_hex(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn splits_channels() {
        assert_eq!(to_rgba(0x80112233), [0x11, 0x22, 0x33, 0x80]);
    }
}
