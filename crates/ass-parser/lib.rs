//! # ASS Parser
//!
//! Lossless parser and serializer for ASS (Advanced `SubStation` Alpha) and
//! SSA subtitle scripts, with font usage extraction and the UUEncode dialect
//! used to embed fonts.
//!
//! ## Features
//!
//! - **Typed model**: styles, events and script info as plain structs
//! - **Format-driven columns**: custom and partial `Format:` lines round-trip
//! - **Line-accurate errors**: every parse failure names its source line
//! - **Strictness flags**: tolerate unknown sections, stray lines or bad records
//! - **Font usage**: parallel attribution of characters to font faces
//!
//! ## Quick Start
//!
//! ```rust
//! use ass_parser::{parse_str, Strictness};
//!
//! let script_text = r#"
//! [Script Info]
//! Title: Example
//! ScriptType: v4.00+
//!
//! [V4+ Styles]
//! Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
//! Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hello World!
//! "#;
//!
//! let doc = parse_str(script_text)?;
//! assert_eq!(doc.styles[0].fontname, "Arial");
//!
//! let text = doc.to_ass_string()?;
//! assert_eq!(parse_str(&text)?, doc);
//!
//! let fonts = doc.used_fonts()?;
//! assert_eq!(fonts[0].used_text(), " !HWdelor");
//! # Ok::<(), ass_parser::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]

pub mod fonts;
pub mod model;
pub mod parser;
pub mod serializer;
pub mod uuencode;
pub mod values;

pub use fonts::{EmbeddedFile, FontDetail, FontError};
pub use model::{Document, Event, EventType, ScriptInfo, SectionName, Style};
pub use parser::{ParseError, ParseErrorKind, Parser, Strictness};
pub use serializer::{LineEnding, SerializeError, SerializeOptions};
pub use values::{Color, Timestamp, ValueError};

use std::{io::BufRead, path::Path};
use thiserror::Error;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Any failure surfaced by this crate
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),

    #[error(transparent)]
    Font(#[from] FontError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The cancel flag was raised while parsing
    #[error("Operation cancelled")]
    Cancelled,
}

pub type Result<T> = core::result::Result<T, Error>;

/// Parse a script from a buffered reader
///
/// Takes the reader by value; pass `&mut reader` to keep the stream usable.
///
/// # Errors
///
/// See [`Parser::parse_reader`].
pub fn parse<R: BufRead>(reader: R, strictness: Strictness) -> Result<Document> {
    Parser::new().strictness(strictness).parse_reader(reader)
}

/// Parse a script held in memory, strictly
///
/// # Errors
///
/// See [`Parser::parse_reader`].
pub fn parse_str(text: &str) -> Result<Document> {
    Parser::new().parse_str(text)
}

/// Parse a script file
///
/// # Errors
///
/// See [`Parser::parse_file`].
pub fn parse_file(path: impl AsRef<Path>, strictness: Strictness) -> Result<Document> {
    Parser::new().strictness(strictness).parse_file(path)
}
