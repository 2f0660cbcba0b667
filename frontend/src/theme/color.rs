//! 32-bit ARGB color value.

use crate::error::ThemeError;
use std::fmt;
use std::str::FromStr;

/// Packed `0xAARRGGBB` color. Constructed at compile time for palette constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(0xFF00_0000 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// CSS representation: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.red(),
                self.green(),
                self.blue(),
                f32::from(self.alpha()) / 255.0
            )
        }
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn relative_luminance(self) -> f32 {
        fn linear(channel: u8) -> f32 {
            let c = f32::from(channel) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.red()) + 0.7152 * linear(self.green()) + 0.0722 * linear(self.blue())
    }

    pub fn is_dark(self) -> bool {
        self.relative_luminance() < 0.179
    }

    /// Black or white, whichever reads better on top of `self`.
    pub fn contrasting(self) -> Color {
        if self.is_dark() {
            Color::from_argb(0xFFFF_FFFF)
        } else {
            Color::from_argb(0xFF00_0000)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Accepts `RRGGBB` or `AARRGGBB`, with or without a leading `#`.
impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ThemeError::InvalidColor(s.to_string()));
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| ThemeError::InvalidColor(s.to_string()))?;
        match hex.len() {
            6 => Ok(Color(0xFF00_0000 | value)),
            8 => Ok(Color(value)),
            _ => Err(ThemeError::InvalidColor(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack_argb() {
        let c = Color::from_argb(0x80E5_3E3E);
        assert_eq!(c.alpha(), 0x80);
        assert_eq!(c.red(), 0xE5);
        assert_eq!(c.green(), 0x3E);
        assert_eq!(c.blue(), 0x3E);
        assert!(!c.is_opaque());
    }

    #[test]
    fn from_rgb_is_opaque() {
        assert_eq!(Color::from_rgb(0x1A, 0x1A, 0x1A), Color::from_argb(0xFF1A_1A1A));
    }

    #[test]
    fn css_uses_hex_for_opaque_colors() {
        assert_eq!(Color::from_argb(0xFFFF_8C00).to_css(), "#ff8c00");
        assert_eq!(Color::from_argb(0x0000_0000).to_css(), "rgba(0, 0, 0, 0.000)");
    }

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!("#38A169".parse::<Color>().unwrap(), Color::from_argb(0xFF38_A169));
        assert_eq!("FF2D3748".parse::<Color>().unwrap(), Color::from_argb(0xFF2D_3748));
        assert_eq!(Color::from_argb(0xFF2D_3748).to_string(), "#FF2D3748");
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#12345", "#GGGGGG", "+12345", "#123456789"] {
            assert!(matches!(bad.parse::<Color>(), Err(ThemeError::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn contrast_flips_on_luminance() {
        assert_eq!(Color::from_argb(0xFF1A_1A1A).contrasting(), Color::from_argb(0xFFFF_FFFF));
        assert_eq!(Color::from_argb(0xFFFA_FAFA).contrasting(), Color::from_argb(0xFF00_0000));
    }
}
