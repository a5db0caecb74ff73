//! Document model for ASS/SSA scripts
//!
//! A [`Document`] owns the three well-known sections, the raw text of every
//! other section, and the order in which sections appeared. The parser builds
//! it in a single pass; callers may then mutate it freely before handing it
//! to the serializer, which walks [`Document::order`] to reproduce the file.
//!
//! # Example
//!
//! ```rust
//! use ass_parser::model::{Document, Event, SectionName};
//!
//! let mut doc = Document::new();
//! doc.script_info.title = "Demo".to_owned();
//! doc.events.push(Event {
//!     text: "Hello".to_owned(),
//!     ..Event::default()
//! });
//!
//! assert_eq!(doc.order[0], SectionName::ScriptInfo);
//! assert_eq!(doc.events.len(), 1);
//! ```

mod event;
pub(crate) mod fields;
mod script_info;
mod section;
mod style;

pub use event::{Event, EventType, Events, OtherEvent, OtherEventKind, DEFAULT_EVENT_FORMAT};
pub use script_info::ScriptInfo;
pub use section::{
    SectionName, AEGISUB_EXTRADATA_SECTION, AEGISUB_PROJECT_GARBAGE_SECTION, EVENTS_SECTION,
    FONTS_SECTION, FORMAT_HEADER, GRAPHICS_SECTION, PASS_THROUGH_SECTIONS, SCRIPT_INFO_SECTION,
    STYLE_HEADER, V4_PLUS_STYLES_SECTION, V4_STYLES_SECTION,
};
pub use style::{Style, Styles, DEFAULT_STYLE_FORMAT};

use ahash::RandomState;
use std::collections::HashMap;

/// Raw section bodies keyed by section name
pub type ExtraSections = HashMap<String, String, RandomState>;

/// A parsed ASS/SSA script
///
/// `order` holds one entry per populated section in first-seen order. Both
/// styles headers share the single `styles` slot; which header is written
/// depends on the entry in `order`.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub script_info: ScriptInfo,
    pub styles: Styles,
    pub events: Events,
    /// Sections in the order they are written
    pub order: Vec<SectionName>,
    /// Bodies of every section other than the three well-known ones,
    /// one `\n`-terminated line per source line
    pub extra_sections: ExtraSections,
}

impl Document {
    /// Empty ASS document with the default section order and formats
    #[must_use]
    pub fn new() -> Self {
        Self {
            script_info: ScriptInfo {
                script_type: "v4.00+".to_owned(),
                ..ScriptInfo::default()
            },
            styles: Styles::default(),
            events: Events::default(),
            order: vec![
                SectionName::ScriptInfo,
                SectionName::V4PlusStyles,
                SectionName::Events,
            ],
            extra_sections: ExtraSections::default(),
        }
    }

    /// Raw body of a non-standard section
    #[must_use]
    pub fn extra_section(&self, name: &str) -> Option<&str> {
        self.extra_sections.get(name).map(String::as_str)
    }

    /// Record `name` in the section order unless its slot is already taken
    pub(crate) fn register_section(&mut self, name: SectionName) {
        if !self.order.iter().any(|seen| seen.same_slot(&name)) {
            self.order.push(name);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
