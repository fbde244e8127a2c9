//! Underlay colour parsing and the dismiss-preview fade.

use crate::consts::{BACKGROUND_ALPHA_FADED, BACKGROUND_ALPHA_OPAQUE};
use crate::error::{LightboxError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, self.a)
    }
}

fn hex_digits(input: &str) -> Option<&str> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    let valid_len = digits.len() == 3 || digits.len() == 6;
    (valid_len && digits.chars().all(|c| c.is_ascii_hexdigit())).then_some(digits)
}

/// `#RGB` or `#RRGGBB`, the leading `#` optional.
pub fn is_hex(input: &str) -> bool {
    hex_digits(input).is_some()
}

pub fn parse_hex(input: &str) -> Result<Rgb> {
    let digits = hex_digits(input).ok_or_else(|| LightboxError::InvalidColor(input.to_string()))?;

    // Shorthand "03F" expands to "0033FF".
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map_err(|_| LightboxError::InvalidColor(input.to_string()))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Underlay colour for a dismiss-preview opacity in `[0, 1]`.
///
/// Alpha runs from 0.9 at no preview down to 0.2 at full preview.
pub fn background_rgba(rgb: Rgb, opacity: f32) -> Rgba {
    let t = opacity.clamp(0.0, 1.0);
    Rgba {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
        a: BACKGROUND_ALPHA_OPAQUE + (BACKGROUND_ALPHA_FADED - BACKGROUND_ALPHA_OPAQUE) * t,
    }
}
