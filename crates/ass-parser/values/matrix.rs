//! `YCbCr Matrix` script info value
//!
//! Colors in ASS are BGR, but video is stored as YCbCr; this value names the
//! conversion the author used. On disk it is either `None` or
//! `<Range>.<ColorSpace>` with short color space names (`TV.709`).

use super::ValueError;
use core::{fmt, str::FromStr};

/// Quantization range of the video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YCbCrRange {
    /// Full range
    PC,
    /// Limited range
    TV,
}

/// Color space of the video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YCbCrColorSpace {
    BT601,
    BT709,
    SMPTE240M,
    FCC,
}

impl YCbCrColorSpace {
    /// Name written to disk
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::BT601 => "601",
            Self::BT709 => "709",
            Self::SMPTE240M => "240M",
            Self::FCC => "FCC",
        }
    }

    /// Accepts both the short disk name and the long variant name
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "601" | "BT601" => Some(Self::BT601),
            "709" | "BT709" => Some(Self::BT709),
            "240M" | "SMPTE240M" => Some(Self::SMPTE240M),
            "FCC" => Some(Self::FCC),
            _ => None,
        }
    }
}

/// `None` or a (range, color space) pair
///
/// ```rust
/// use ass_parser::values::{YCbCrColorSpace, YCbCrMatrix, YCbCrRange};
///
/// let matrix: YCbCrMatrix = "TV.BT709".parse()?;
/// assert_eq!(matrix, YCbCrMatrix::Matrix(YCbCrRange::TV, YCbCrColorSpace::BT709));
/// assert_eq!(matrix.to_string(), "TV.709");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YCbCrMatrix {
    #[default]
    None,
    Matrix(YCbCrRange, YCbCrColorSpace),
}

impl FromStr for YCbCrMatrix {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text == "None" {
            return Ok(Self::None);
        }

        let invalid = || ValueError::InvalidMatrix(s.to_owned());
        let (range, color_space) = text.split_once('.').ok_or_else(invalid)?;
        let range = match range {
            "PC" => YCbCrRange::PC,
            "TV" => YCbCrRange::TV,
            _ => return Err(invalid()),
        };
        let color_space = YCbCrColorSpace::from_name(color_space).ok_or_else(invalid)?;

        Ok(Self::Matrix(range, color_space))
    }
}

impl fmt::Display for YCbCrMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Matrix(range, color_space) => {
                write!(f, "{range:?}.{}", color_space.short_name())
            }
        }
    }
}
