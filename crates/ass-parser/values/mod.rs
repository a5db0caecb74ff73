//! Value coercion between ASS field text and typed values
//!
//! Every typed field in a script round-trips through this module: the parser
//! reads with the `parse_*` helpers and the `FromStr` impls of the value
//! types, the serializer writes with the matching `format_*` helpers and
//! `Display` impls. Conversions are pure and stateless.
//!
//! Failures are reported as [`ValueError`] without line information; the
//! section parser attaches the line number.
//!
//! # Example
//!
//! ```rust
//! use ass_parser::values::{format_n1_bool, parse_n1_bool, Color};
//!
//! assert!(parse_n1_bool("-1"));
//! assert_eq!(format_n1_bool(false), "0");
//!
//! let color: Color = "&H00FF8000".parse()?;
//! assert_eq!(color.to_string(), "&H00FF8000");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod color;
mod enums;
mod matrix;
mod timestamp;

pub use color::Color;
pub use enums::{Alignment, BorderStyle, WrapStyle};
pub use matrix::{YCbCrColorSpace, YCbCrMatrix, YCbCrRange};
pub use timestamp::Timestamp;

use core::{fmt, str::FromStr};
use thiserror::Error;

/// Format error raised when a field value does not match its expected shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Integer or float that does not parse in base 10
    #[error("Invalid numeric value '{value}': {reason}")]
    InvalidNumeric { value: String, reason: String },

    /// Color not of the form `&H` followed by up to 8 hex digits
    #[error("'{0}' is not a valid ABGR color string")]
    InvalidColor(String),

    /// Timestamp not of the form `h:mm:ss.ff`
    #[error("'{0}' is not a valid h:mm:ss.ff timestamp")]
    InvalidTime(String),

    /// YCbCr matrix not of the form `None` or `<Range>.<ColorSpace>`
    #[error("'{0}' is not a valid YCbCr matrix")]
    InvalidMatrix(String),
}

/// Parse a base-10 number, ignoring surrounding whitespace
///
/// # Errors
///
/// Returns [`ValueError::InvalidNumeric`] if the text is not a valid `T`.
pub fn parse_number<T>(value: &str) -> Result<T, ValueError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ValueError::InvalidNumeric {
            value: value.to_owned(),
            reason: e.to_string(),
        })
}

/// Read a `-1`/`0` flag: `-1` is true, anything else is false
#[must_use]
pub fn parse_n1_bool(value: &str) -> bool {
    value.trim() == "-1"
}

/// Write a `-1`/`0` flag
#[must_use]
pub const fn format_n1_bool(value: bool) -> &'static str {
    if value {
        "-1"
    } else {
        "0"
    }
}

/// Read a `yes`/`no` flag, case-insensitively; anything but `yes` is false
#[must_use]
pub fn parse_yes_no(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("yes")
}

/// Write a `yes`/`no` flag
#[must_use]
pub const fn format_yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Write a float the way it reads back: shortest round-trip form, no exponent
/// for ordinary magnitudes, `.` as decimal separator
#[must_use]
pub fn format_float(value: f32) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_parse_in_base_ten() {
        assert_eq!(parse_number::<i32>("42"), Ok(42));
        assert_eq!(parse_number::<i32>(" -7 "), Ok(-7));
        assert_eq!(parse_number::<i32>("007"), Ok(7));
        assert_eq!(parse_number::<f32>("2.5"), Ok(2.5));
        assert!(matches!(
            parse_number::<i32>("1,000"),
            Err(ValueError::InvalidNumeric { .. })
        ));
        assert!(parse_number::<i32>("").is_err());
    }

    #[test]
    fn n1_flags() {
        assert!(parse_n1_bool("-1"));
        assert!(!parse_n1_bool("0"));
        assert!(!parse_n1_bool("1"));
        assert!(!parse_n1_bool("yes"));
        assert_eq!(format_n1_bool(true), "-1");
        assert_eq!(format_n1_bool(false), "0");
    }

    #[test]
    fn yes_no_flags() {
        assert!(parse_yes_no("yes"));
        assert!(parse_yes_no("YES"));
        assert!(parse_yes_no("Yes"));
        assert!(!parse_yes_no("no"));
        assert!(!parse_yes_no("1"));
        assert_eq!(format_yes_no(true), "yes");
        assert_eq!(format_yes_no(false), "no");
    }

    #[test]
    fn floats_use_shortest_form() {
        assert_eq!(format_float(2.0), "2");
        assert_eq!(format_float(0.5), "0.5");
        assert_eq!(format_float(100.0), "100");
        assert_eq!(format_float(-12.25), "-12.25");
    }
}
