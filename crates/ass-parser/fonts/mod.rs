//! Font usage extraction and embedded font/graphic files
//!
//! [`Document::used_fonts`] lists every distinct (font, bold, italic)
//! combination the events render text in, with the exact characters drawn
//! in each. Events are scanned in parallel; each keeps its own override
//! state and results merge into a concurrent map of character sets.
//!
//! ```rust
//! use ass_parser::parse_str;
//!
//! let doc = parse_str("\
//! [Script Info]
//! Title: Fonts
//!
//! [V4+ Styles]
//! Format: Name, Fontname, Bold, Italic
//! Style: Default,Arial,0,0
//!
//! [Events]
//! Format: Style, Text
//! Dialogue: Default,ab{\\b1}ba
//! ")?;
//!
//! let fonts = doc.used_fonts()?;
//! assert_eq!(fonts.len(), 2);
//! assert_eq!(fonts[0].font_name, "Arial");
//! assert_eq!(fonts[0].bold, 0);
//! assert_eq!(fonts[0].used_chars, ['a', 'b']);
//! assert_eq!(fonts[1].bold, 1);
//! # Ok::<(), ass_parser::Error>(())
//! ```

mod embedded;
mod overrides;

pub use embedded::EmbeddedFile;

use crate::model::Document;
use core::hash::{Hash, Hasher};
use dashmap::{DashMap, DashSet};
use overrides::{scan_event, FontKey};
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

/// Failure while attributing text to fonts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// An event's style or a `\r<name>` target is not defined
    #[error("Style '{name}' is not defined")]
    UnresolvedStyle { name: String },
}

/// One font face used by the script and the characters drawn with it
///
/// Equality and hashing consider only the face, never `used_chars`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontDetail {
    pub font_name: String,
    /// 1 when bold, 0 otherwise
    pub bold: i32,
    pub italic: bool,
    /// Distinct characters in ascending code point order
    pub used_chars: Vec<char>,
}

impl FontDetail {
    fn key(&self) -> (&str, i32, bool) {
        (&self.font_name, self.bold, self.italic)
    }

    /// The used characters as a string
    #[must_use]
    pub fn used_text(&self) -> String {
        self.used_chars.iter().collect()
    }
}

impl PartialEq for FontDetail {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FontDetail {}

impl Hash for FontDetail {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Document {
    /// Distinct font faces used by all events, comments included
    ///
    /// The result is sorted by font name, then bold, then italic.
    ///
    /// # Errors
    ///
    /// [`FontError::UnresolvedStyle`] if an event names a style that does
    /// not exist, or resets to one with `\r<name>`.
    pub fn used_fonts(&self) -> Result<Vec<FontDetail>, FontError> {
        let styles = self.styles.index_by_name();
        let usage: DashMap<FontKey, DashSet<char>> = DashMap::new();

        self.events.as_slice().par_iter().try_for_each(|event| {
            scan_event(event, &styles, |key, run| {
                let chars = usage.entry(key).or_default().downgrade();
                for c in run.chars() {
                    chars.insert(c);
                }
            })
        })?;

        let mut fonts: Vec<FontDetail> = usage
            .into_iter()
            .map(|(key, chars)| {
                let mut used_chars: Vec<char> = chars.into_iter().collect();
                used_chars.sort_unstable();
                FontDetail {
                    font_name: key.font,
                    bold: key.bold,
                    italic: key.italic,
                    used_chars,
                }
            })
            .collect();
        fonts.sort_by(|a, b| a.key().cmp(&b.key()));

        debug!(
            events = self.events.len(),
            fonts = fonts.len(),
            "collected used fonts"
        );
        Ok(fonts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Event, Style};
    use std::collections::HashSet;

    fn document(texts: &[&str]) -> Document {
        let mut doc = Document::new();
        doc.styles.push(Style {
            name: "Main".to_owned(),
            fontname: "Arial".to_owned(),
            ..Style::default()
        });
        doc.events.extend(texts.iter().map(|text| Event {
            style: "Main".to_owned(),
            text: (*text).to_owned(),
            ..Event::default()
        }));
        doc
    }

    #[test]
    fn characters_merge_across_events() {
        let doc = document(&["cab", "bad", r"{\i1}x"]);
        let fonts = doc.used_fonts().unwrap();
        assert_eq!(fonts.len(), 2);
        assert_eq!(fonts[0].used_text(), "abcd");
        assert!(!fonts[0].italic);
        assert_eq!(fonts[1].used_text(), "x");
        assert!(fonts[1].italic);
    }

    #[test]
    fn detail_identity_ignores_characters() {
        let a = FontDetail {
            font_name: "Arial".to_owned(),
            bold: 1,
            italic: false,
            used_chars: vec!['a'],
        };
        let b = FontDetail {
            used_chars: vec!['z'],
            ..a.clone()
        };
        assert_eq!(a, b);
        assert_eq!(HashSet::from([a, b]).len(), 1);
    }

    #[test]
    fn dangling_event_style() {
        let mut doc = document(&["x"]);
        doc.events[0].style = "Gone".to_owned();
        assert_eq!(
            doc.used_fonts(),
            Err(FontError::UnresolvedStyle {
                name: "Gone".to_owned()
            })
        );
    }

    #[test]
    fn repeated_extraction_is_stable() {
        let texts: Vec<String> = (0..200)
            .map(|i| format!(r"{{\b{}}}{}{{\r}}z", i % 2, char::from(b'a' + (i % 26) as u8)))
            .collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let doc = document(&refs);

        let first = doc.used_fonts().unwrap();
        for _ in 0..5 {
            let again = doc.used_fonts().unwrap();
            assert_eq!(again, first);
            for (a, b) in again.iter().zip(&first) {
                assert_eq!(a.used_chars, b.used_chars);
            }
        }
    }

    #[test]
    fn no_events_no_fonts() {
        assert!(document(&[]).used_fonts().unwrap().is_empty());
    }
}
