//! Enumerations stored on disk as plain integers
//!
//! Scripts in the wild carry values outside the documented ranges. Each enum
//! keeps such values in an `Other` variant so that they are written back
//! unchanged instead of being rejected or clamped.

use super::{parse_number, ValueError};
use core::{fmt, str::FromStr};

/// Implements the integer conversions and text coercion shared by every
/// integer-backed enum in this module.
macro_rules! int_enum {
    ($name:ident { $($variant:ident = $value:literal),+ $(,)? }) => {
        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    other => Self::Other(other),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => $value,)+
                    $name::Other(other) => other,
                }
            }
        }

        impl FromStr for $name {
            type Err = ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_number::<i32>(s).map(Self::from)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", i32::from(*self))
            }
        }
    };
}

/// Default line wrapping behaviour (`WrapStyle` in script info)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapStyle {
    /// Smart wrapping, lines are evenly broken
    #[default]
    Smart,
    /// End-of-line word wrapping, only `\N` breaks
    EndOfLineWord,
    /// No word wrapping, `\n` and `\N` both break
    NoWord,
    /// Smart wrapping with the lower line wider
    SmartLowerLineWider,
    /// Undocumented value, kept verbatim
    Other(i32),
}

int_enum!(WrapStyle {
    Smart = 0,
    EndOfLineWord = 1,
    NoWord = 2,
    SmartLowerLineWider = 3,
});

/// Style border rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderStyle {
    /// Outline plus drop shadow
    #[default]
    OutlineDropShadow,
    /// Opaque box behind the text
    OpaqueBox,
    /// Undocumented value, kept verbatim
    Other(i32),
}

int_enum!(BorderStyle {
    OutlineDropShadow = 1,
    OpaqueBox = 3,
});

/// Text alignment after the numpad layout (1-3 bottom, 4-6 middle, 7-9 top)
///
/// SSA scripts use a different layout for the same integers; the value is
/// stored as written and no conversion between the two is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    SubLeft,
    #[default]
    SubCenter,
    SubRight,
    MidLeft,
    MidCenter,
    MidRight,
    TopLeft,
    TopCenter,
    TopRight,
    /// Undocumented value, kept verbatim
    Other(i32),
}

int_enum!(Alignment {
    SubLeft = 1,
    SubCenter = 2,
    SubRight = 3,
    MidLeft = 4,
    MidCenter = 5,
    MidRight = 6,
    TopLeft = 7,
    TopCenter = 8,
    TopRight = 9,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_map_to_variants() {
        assert_eq!("2".parse::<WrapStyle>(), Ok(WrapStyle::NoWord));
        assert_eq!("3".parse::<BorderStyle>(), Ok(BorderStyle::OpaqueBox));
        assert_eq!("7".parse::<Alignment>(), Ok(Alignment::TopLeft));
    }

    #[test]
    fn out_of_range_values_round_trip() {
        let wrap: WrapStyle = "9".parse().unwrap();
        assert_eq!(wrap, WrapStyle::Other(9));
        assert_eq!(wrap.to_string(), "9");

        let border: BorderStyle = "0".parse().unwrap();
        assert_eq!(border, BorderStyle::Other(0));
        assert_eq!(border.to_string(), "0");

        let align: Alignment = "-4".parse().unwrap();
        assert_eq!(align.to_string(), "-4");
    }

    #[test]
    fn non_integers_are_rejected() {
        assert!("two".parse::<Alignment>().is_err());
        assert!("1.5".parse::<BorderStyle>().is_err());
    }

    #[test]
    fn integer_conversions_are_inverse() {
        for raw in -2..12 {
            assert_eq!(i32::from(Alignment::from(raw)), raw);
            assert_eq!(i32::from(WrapStyle::from(raw)), raw);
            assert_eq!(i32::from(BorderStyle::from(raw)), raw);
        }
    }
}
