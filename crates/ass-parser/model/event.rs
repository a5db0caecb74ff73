//! Events from the `[Events]` section

use crate::values::Timestamp;
use core::{
    fmt,
    ops::{Deref, DerefMut},
};

/// Column order written by current ASS authoring tools
pub const DEFAULT_EVENT_FORMAT: [&str; 10] = [
    "Layer", "Start", "End", "Style", "Name", "MarginL", "MarginR", "MarginV", "Effect", "Text",
];

/// Kind of a textual event line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventType {
    #[default]
    Dialogue,
    /// Kept in the script but never displayed
    Comment,
}

impl EventType {
    #[must_use]
    pub fn from_header(header: &str) -> Option<Self> {
        match header {
            "Dialogue" => Some(Self::Dialogue),
            "Comment" => Some(Self::Comment),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dialogue => "Dialogue",
            Self::Comment => "Comment",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a non-textual event line, carried through verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OtherEventKind {
    /// Display a bitmap
    Picture,
    /// Play a wav file
    Sound,
    /// Play an avi file
    Movie,
    /// Run a program
    Command,
}

impl OtherEventKind {
    #[must_use]
    pub fn from_header(header: &str) -> Option<Self> {
        match header {
            "Picture" => Some(Self::Picture),
            "Sound" => Some(Self::Sound),
            "Movie" => Some(Self::Movie),
            "Command" => Some(Self::Command),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Picture => "Picture",
            Self::Sound => "Sound",
            Self::Movie => "Movie",
            Self::Command => "Command",
        }
    }
}

impl fmt::Display for OtherEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque `Picture:`/`Sound:`/`Movie:`/`Command:` line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OtherEvent {
    pub kind: OtherEventKind,
    /// Everything after the header colon, trimmed
    pub content: String,
}

/// A `Dialogue:` or `Comment:` line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub event_type: EventType,
    /// Events on different layers never collide
    pub layer: i32,
    pub start: Timestamp,
    pub end: Timestamp,
    /// Name of the style; resolved against the styles section on use
    pub style: String,
    /// Speaker, informational only
    pub name: String,
    pub margin_l: i32,
    pub margin_r: i32,
    pub margin_v: i32,
    /// Transition effect, empty when unused
    pub effect: String,
    /// SSA `Marked` column, raw
    pub marked: String,
    /// Subtitle text including `{...}` override blocks; may contain commas
    pub text: String,
}

/// The events section: `Format` columns, textual events, other events
///
/// Dereferences to the list of textual events.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Events {
    /// Column names from the `Format:` line; only these are read and written
    pub format: Vec<String>,
    events: Vec<Event>,
    /// Non-textual events in file order
    pub other_events: Vec<OtherEvent>,
}

impl Events {
    /// Empty section with the given columns
    #[must_use]
    pub fn with_format<I, S>(format: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            format: format.into_iter().map(Into::into).collect(),
            events: Vec::new(),
            other_events: Vec::new(),
        }
    }

    /// Dialogue lines only
    pub fn dialogues(&self) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(|event| event.event_type == EventType::Dialogue)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Event> {
        self.events
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::with_format(DEFAULT_EVENT_FORMAT)
    }
}

impl Deref for Events {
    type Target = Vec<Event>;

    fn deref(&self) -> &Self::Target {
        &self.events
    }
}

impl DerefMut for Events {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.events
    }
}

impl Extend<Event> for Events {
    fn extend<T: IntoIterator<Item = Event>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}
