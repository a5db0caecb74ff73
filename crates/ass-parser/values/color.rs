//! ABGR color values
//!
//! On disk a color is `&H` followed by a little-endian 32-bit ABGR word in
//! hex, alpha inverted (`00` opaque, `FF` transparent). In memory the alpha
//! channel is an opacity, so `alpha = 255 - disk_alpha`.

use super::ValueError;
use core::{fmt, str::FromStr};

/// RGBA color with opacity alpha (255 = fully opaque)
///
/// # Examples
///
/// ```rust
/// use ass_parser::values::Color;
///
/// let color: Color = "&H00FF8000".parse()?;
/// assert_eq!((color.red, color.green, color.blue), (0x00, 0x80, 0xFF));
/// assert_eq!(color.alpha, 255);
/// assert_eq!(color.to_string(), "&H00FF8000");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Opacity; the on-disk value is `255 - alpha`
    pub alpha: u8,
}

impl Color {
    /// Opaque color from red, green and blue channels
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: u8::MAX,
        }
    }

    /// Color from channels and opacity
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Build from the raw on-disk ABGR word
    #[must_use]
    pub const fn from_abgr(word: u32) -> Self {
        let [red, green, blue, disk_alpha] = word.to_le_bytes();
        Self {
            red,
            green,
            blue,
            alpha: u8::MAX - disk_alpha,
        }
    }

    /// The raw on-disk ABGR word
    #[must_use]
    pub const fn to_abgr(self) -> u32 {
        u32::from_le_bytes([self.red, self.green, self.blue, u8::MAX - self.alpha])
    }
}

impl FromStr for Color {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix("&H")
            .ok_or_else(|| ValueError::InvalidColor(s.to_owned()))?;

        if hex.is_empty() || hex.len() > 8 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValueError::InvalidColor(s.to_owned()));
        }

        u32::from_str_radix(hex, 16)
            .map(Self::from_abgr)
            .map_err(|_| ValueError::InvalidColor(s.to_owned()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "&H{:02X}{:02X}{:02X}{:02X}",
            u8::MAX - self.alpha,
            self.blue,
            self.green,
            self.red
        )
    }
}
