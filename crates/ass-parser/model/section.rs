//! Section names and the fixed header strings of the format

use core::fmt;

/// `[Script Info]`
pub const SCRIPT_INFO_SECTION: &str = "Script Info";
/// `[V4 Styles]` (SSA)
pub const V4_STYLES_SECTION: &str = "V4 Styles";
/// `[V4+ Styles]` (ASS)
pub const V4_PLUS_STYLES_SECTION: &str = "V4+ Styles";
/// `[Events]`
pub const EVENTS_SECTION: &str = "Events";
/// `[Fonts]`
pub const FONTS_SECTION: &str = "Fonts";
/// `[Graphics]`
pub const GRAPHICS_SECTION: &str = "Graphics";
/// `[Aegisub Project Garbage]`
pub const AEGISUB_PROJECT_GARBAGE_SECTION: &str = "Aegisub Project Garbage";
/// `[Aegisub Extradata]`
pub const AEGISUB_EXTRADATA_SECTION: &str = "Aegisub Extradata";

/// Sections kept as raw text even under strict parsing
pub const PASS_THROUGH_SECTIONS: [&str; 4] = [
    FONTS_SECTION,
    GRAPHICS_SECTION,
    AEGISUB_PROJECT_GARBAGE_SECTION,
    AEGISUB_EXTRADATA_SECTION,
];

/// `Format:` line header in styles and events sections
pub const FORMAT_HEADER: &str = "Format";
/// `Style:` line header
pub const STYLE_HEADER: &str = "Style";

/// Name of a section as it appears between brackets
///
/// The three well-known sections get their own variants; everything else is
/// carried by name and stored as raw text in the document.
///
/// ```rust
/// use ass_parser::model::SectionName;
///
/// assert_eq!(SectionName::from_tag("V4+ Styles"), SectionName::V4PlusStyles);
/// assert_eq!(SectionName::from_tag("Fonts").as_str(), "Fonts");
/// assert!(SectionName::from_tag("Fonts").is_pass_through());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionName {
    ScriptInfo,
    V4Styles,
    V4PlusStyles,
    Events,
    Other(String),
}

impl SectionName {
    /// Classify the text between `[` and `]`
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            SCRIPT_INFO_SECTION => Self::ScriptInfo,
            V4_STYLES_SECTION => Self::V4Styles,
            V4_PLUS_STYLES_SECTION => Self::V4PlusStyles,
            EVENTS_SECTION => Self::Events,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ScriptInfo => SCRIPT_INFO_SECTION,
            Self::V4Styles => V4_STYLES_SECTION,
            Self::V4PlusStyles => V4_PLUS_STYLES_SECTION,
            Self::Events => EVENTS_SECTION,
            Self::Other(name) => name,
        }
    }

    /// Either styles header
    #[must_use]
    pub const fn is_styles(&self) -> bool {
        matches!(self, Self::V4Styles | Self::V4PlusStyles)
    }

    /// One of the sections accepted as raw text without
    /// `Strictness::ALLOW_UNKNOWN_SECTIONS`
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        matches!(self, Self::Other(name) if PASS_THROUGH_SECTIONS.contains(&name.as_str()))
    }

    /// Same slot in the document: both styles headers share one
    pub(crate) fn same_slot(&self, other: &Self) -> bool {
        (self.is_styles() && other.is_styles()) || self == other
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
