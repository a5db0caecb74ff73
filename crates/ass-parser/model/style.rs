//! Style definitions from `[V4+ Styles]` / `[V4 Styles]`

use crate::values::{Alignment, BorderStyle, Color};
use ahash::RandomState;
use core::ops::{Deref, DerefMut};
use std::collections::HashMap;

/// Column order written by current ASS authoring tools
pub const DEFAULT_STYLE_FORMAT: [&str; 23] = [
    "Name",
    "Fontname",
    "Fontsize",
    "PrimaryColour",
    "SecondaryColour",
    "OutlineColour",
    "BackColour",
    "Bold",
    "Italic",
    "Underline",
    "StrikeOut",
    "ScaleX",
    "ScaleY",
    "Spacing",
    "Angle",
    "BorderStyle",
    "Outline",
    "Shadow",
    "Alignment",
    "MarginL",
    "MarginR",
    "MarginV",
    "Encoding",
];

/// A named set of text formatting properties referenced by events
///
/// # Examples
///
/// ```rust
/// use ass_parser::model::Style;
///
/// let style = Style {
///     name: "Sign".to_owned(),
///     fontname: "Verdana".to_owned(),
///     bold: true,
///     ..Style::default()
/// };
/// assert_eq!(style.fontsize, 20.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Case-sensitive style name, cannot contain commas
    pub name: String,
    /// Font family name as known to the system
    pub fontname: String,
    pub fontsize: f32,
    pub primary_colour: Color,
    /// Used for karaoke before highlighting
    pub secondary_colour: Color,
    /// `TertiaryColour` in SSA
    pub outline_colour: Color,
    /// Shadow colour, or box colour with an opaque box border
    pub back_colour: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike_out: bool,
    /// Horizontal font scale in percent
    pub scale_x: f32,
    /// Vertical font scale in percent
    pub scale_y: f32,
    /// Extra space between characters in pixels
    pub spacing: f32,
    /// Z rotation in degrees
    pub angle: f32,
    pub border_style: BorderStyle,
    pub outline: f32,
    pub shadow: f32,
    pub alignment: Alignment,
    pub margin_l: i32,
    pub margin_r: i32,
    pub margin_v: i32,
    /// SSA only, unused by renderers
    pub alpha_level: i32,
    /// Windows font character set
    pub encoding: i32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            name: "Default".to_owned(),
            fontname: "Arial".to_owned(),
            fontsize: 20.0,
            primary_colour: Color::rgb(0xFF, 0xFF, 0xFF),
            secondary_colour: Color::rgb(0xFF, 0x00, 0x00),
            outline_colour: Color::rgb(0x00, 0x00, 0x00),
            back_colour: Color::rgb(0x00, 0x00, 0x00),
            bold: false,
            italic: false,
            underline: false,
            strike_out: false,
            scale_x: 100.0,
            scale_y: 100.0,
            spacing: 0.0,
            angle: 0.0,
            border_style: BorderStyle::OutlineDropShadow,
            outline: 2.0,
            shadow: 0.0,
            alignment: Alignment::SubCenter,
            margin_l: 10,
            margin_r: 10,
            margin_v: 10,
            alpha_level: 0,
            encoding: 1,
        }
    }
}

/// The styles section: its declared `Format` columns and the styles in order
///
/// Dereferences to the list of styles. Names are expected to be unique, but
/// duplicates are kept; lookups return the first match.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Styles {
    /// Column names from the `Format:` line; only these are read and written
    pub format: Vec<String>,
    styles: Vec<Style>,
}

impl Styles {
    /// Empty section with the given columns
    #[must_use]
    pub fn with_format<I, S>(format: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            format: format.into_iter().map(Into::into).collect(),
            styles: Vec::new(),
        }
    }

    /// First style with the given name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|style| style.name == name)
    }

    /// Name to style index; with duplicate names the first one wins
    #[must_use]
    pub fn index_by_name(&self) -> HashMap<&str, &Style, RandomState> {
        let mut index = HashMap::with_capacity_and_hasher(self.styles.len(), RandomState::new());
        for style in &self.styles {
            index.entry(style.name.as_str()).or_insert(style);
        }
        index
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Style> {
        self.styles
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::with_format(DEFAULT_STYLE_FORMAT)
    }
}

impl Deref for Styles {
    type Target = Vec<Style>;

    fn deref(&self) -> &Self::Target {
        &self.styles
    }
}

impl DerefMut for Styles {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.styles
    }
}

impl Extend<Style> for Styles {
    fn extend<T: IntoIterator<Item = Style>>(&mut self, iter: T) {
        self.styles.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, fontname: &str) -> Style {
        Style {
            name: name.to_owned(),
            fontname: fontname.to_owned(),
            ..Style::default()
        }
    }

    #[test]
    fn lookup_is_first_match() {
        let mut styles = Styles::default();
        styles.extend([named("A", "First"), named("B", "Other"), named("A", "Second")]);

        assert_eq!(styles.find("A").map(|s| s.fontname.as_str()), Some("First"));
        assert!(styles.find("C").is_none());

        let index = styles.index_by_name();
        assert_eq!(index.len(), 2);
        assert_eq!(index["A"].fontname, "First");
    }

    #[test]
    fn default_format_is_v4_plus() {
        let styles = Styles::default();
        assert_eq!(styles.format.len(), 23);
        assert_eq!(styles.format[0], "Name");
        assert!(styles.is_empty());
    }
}
