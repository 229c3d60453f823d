//! Hex color parsing and `rgba()` formatting for draw data.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use crate::consts::FALLBACK_COLOR;
use crate::math::clamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// CSS `rgba()` string; alpha is clamped to `[0, 1]` and printed with three decimals.
    #[must_use]
    pub fn to_rgba(self, alpha: f64) -> String {
        let alpha = if alpha.is_finite() { clamp(alpha, 0.0, 1.0) } else { 1.0 };
        format!("rgba({}, {}, {}, {alpha:.3})", self.r, self.g, self.b)
    }
}

/// Parse `#RGB` or `#RRGGBB`. Every character after `#` must be a hex digit.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<Rgb> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let n: Vec<u8> = hex.bytes().map(nibble).collect();
    match n[..] {
        [r, g, b] => Some(Rgb { r: r * 17, g: g * 17, b: b * 17 }),
        [r1, r2, g1, g2, b1, b2] => Some(Rgb { r: r1 << 4 | r2, g: g1 << 4 | g2, b: b1 << 4 | b2 }),
        _ => None,
    }
}

/// Value of one ASCII hex digit; callers check `is_ascii_hexdigit` first.
fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

/// `rgba()` for `color`, substituting [`FALLBACK_COLOR`] when it does not parse.
#[must_use]
pub fn rgba_or_fallback(color: &str, alpha: f64) -> String {
    let rgb = parse_hex_rgb(color)
        .or_else(|| parse_hex_rgb(FALLBACK_COLOR))
        .unwrap_or(Rgb { r: 217, g: 75, b: 75 });
    rgb.to_rgba(alpha)
}
