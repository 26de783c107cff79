use serde::{Deserialize, Serialize};

/// An opaque RGB color, as written in `#rrggbb` chart styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse exactly `#rrggbb` (either case). Shorthand, alpha and bare
    /// digits are rejected.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Shift every channel by `round(2.55 * percent)`, clamped to `0..=255`.
    ///
    /// Negative percentages darken.
    pub fn brightened(&self, percent: i32) -> Self {
        let amount = (2.55 * f64::from(percent)).round();
        let shift = |channel: u8| (f64::from(channel) + amount).clamp(0.0, 255.0) as u8;
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
        }
    }
}
