use std::fmt;

use crate::error::PixelError;

/// Straight-alpha color resolved from a palette entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in [0, 1], rounded to two decimals when parsed
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0.0 };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Channels as linear floats, for GPU clear colors on sRGB targets
    pub fn to_linear(&self) -> [f64; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            self.a as f64,
        ]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Parse `RRGGBB` or `RRGGBBAA`, with an optional leading `#`.
///
/// Six digits give an opaque color. With eight, the last pair is alpha,
/// normalized to [0, 1] and rounded to two decimal places.
pub fn parse_color(hex: &str) -> Result<Rgba, PixelError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
    if digits.len() != 6 && digits.len() != 8 {
        return Err(PixelError::InvalidColor(hex.to_string()));
    }

    let channel = |offset: usize| {
        hex_byte(digits[offset], digits[offset + 1])
            .ok_or_else(|| PixelError::InvalidColor(hex.to_string()))
    };

    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if digits.len() == 8 {
        round_to(channel(6)? as f64 / 255.0, 2) as f32
    } else {
        1.0
    };

    Ok(Rgba { r, g, b, a })
}

/// Decode one hex digit pair into a byte
pub fn hex_byte(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

/// Round half away from zero to `digits` decimal places
pub fn round_to(value: f64, digits: i32) -> f64 {
    let base = 10f64.powi(digits);
    (value * base).round() / base
}

pub fn srgb_to_linear(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_rgb_with_hash() {
        assert_eq!(parse_color("#FF0000").unwrap(), Rgba::opaque(255, 0, 0));
    }

    #[test]
    fn test_parse_color_rgba_without_hash() {
        let color = parse_color("00FF0080").unwrap();
        assert_eq!((color.r, color.g, color.b), (0, 255, 0));
        assert_eq!(color.a, 0.5);
    }

    #[test]
    fn test_parse_color_lowercase() {
        assert_eq!(parse_color("#1a2b3c").unwrap(), Rgba::opaque(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn test_alpha_rounding() {
        // 1/255 = 0.0039 rounds to 0
        assert_eq!(parse_color("00000001").unwrap().a, 0.0);
        // 64/255 = 0.2509
        assert_eq!(parse_color("00000040").unwrap().a, 0.25);
        assert_eq!(parse_color("000000FF").unwrap().a, 1.0);
    }

    #[test]
    fn test_parse_color_rejects_odd_lengths() {
        assert!(parse_color("#FFFFF").is_err());
        assert!(parse_color("FFFFFFF").is_err());
        assert!(parse_color("").is_err());
        assert!(parse_color("#").is_err());
    }

    #[test]
    fn test_parse_color_rejects_non_hex() {
        assert!(matches!(
            parse_color("#GG0000"),
            Err(PixelError::InvalidColor(s)) if s == "#GG0000"
        ));
    }

    #[test]
    fn test_hex_byte() {
        assert_eq!(hex_byte(b'0', b'0'), Some(0));
        assert_eq!(hex_byte(b'f', b'F'), Some(255));
        assert_eq!(hex_byte(b'0', b'x'), None);
    }

    #[test]
    fn test_srgb_to_linear_endpoints() {
        assert_eq!(srgb_to_linear(0), 0.0);
        assert!((srgb_to_linear(255) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        let color = Rgba { r: 1, g: 2, b: 3, a: 0.5 };
        assert_eq!(color.to_string(), "rgba(1, 2, 3, 0.5)");
    }
}
