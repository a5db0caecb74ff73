//! Section parser for ASS/SSA scripts
//!
//! A single forward pass over the input lines. Each `[Section]` header
//! dispatches to a section reader that consumes lines until the next header
//! (or, for raw sections, until a blank line). Every failure carries the
//! 1-based source line so callers can point at the offending text.
//!
//! [`Strictness`] flags turn individual failure classes into skips. Field
//! values that fail coercion are always fatal.
//!
//! # Example
//!
//! ```rust
//! use ass_parser::{Parser, Strictness};
//!
//! let text = "\
//! [Script Info]
//! Title: Example
//!
//! [V4+ Styles]
//! Format: Name, Fontname, Bold
//! Style: Default,Arial,0
//!
//! [Events]
//! Format: Start, End, Style, Text
//! Dialogue: 0:00:00.00,0:00:05.00,Default,Hello, world!
//! ";
//!
//! let doc = Parser::new().strictness(Strictness::STRICT).parse_str(text)?;
//! assert_eq!(doc.script_info.title, "Example");
//! assert_eq!(doc.events[0].text, "Hello, world!");
//! # Ok::<(), ass_parser::Error>(())
//! ```

mod errors;
mod line_reader;
mod strictness;

pub use errors::{ParseError, ParseErrorKind};
pub use strictness::Strictness;

use crate::{
    model::{
        fields::{script_info_field, FieldPlan, EVENT_FIELDS, STYLE_FIELDS},
        Document, Event, EventType, Events, ExtraSections, OtherEvent, OtherEventKind, ScriptInfo,
        SectionName, Style, Styles, FORMAT_HEADER, STYLE_HEADER,
    },
    Error, Result,
};
use line_reader::LineReader;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
use tracing::{debug, trace};

/// Configured entry point for parsing
///
/// ```rust
/// use ass_parser::{Parser, Strictness};
/// use std::sync::{atomic::AtomicBool, Arc};
///
/// let cancel = Arc::new(AtomicBool::new(false));
/// let parser = Parser::new()
///     .strictness(Strictness::ALLOW_UNKNOWN_SECTIONS)
///     .cancel_flag(Arc::clone(&cancel));
/// assert!(parser.parse_str("").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    strictness: Strictness,
    cancel: Option<Arc<AtomicBool>>,
}

impl Parser {
    /// Strict parser without cancellation
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Abort with [`Error::Cancelled`] once `flag` is set; checked per line
    #[must_use]
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Parse from any buffered reader
    ///
    /// The reader is consumed; pass `&mut reader` to keep using the stream
    /// afterwards.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] for malformed input, [`Error::Io`] for read failures,
    /// [`Error::Cancelled`] when the cancel flag was raised.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Document> {
        SectionParser::new(reader, self.strictness, self.cancel.as_deref()).run()
    }

    /// Parse in-memory text
    ///
    /// # Errors
    ///
    /// See [`Parser::parse_reader`].
    pub fn parse_str(&self, text: &str) -> Result<Document> {
        self.parse_reader(text.as_bytes())
    }

    /// Open, parse and close a file
    ///
    /// # Errors
    ///
    /// See [`Parser::parse_reader`]; opening the file may also fail with
    /// [`Error::Io`].
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Document> {
        let path = path.as_ref();
        debug!(path = %path.display(), "parsing file");
        let file = File::open(path)?;
        self.parse_reader(BufReader::new(file))
    }
}

/// Returns the name between brackets of a `[Section]` line
fn section_tag(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

/// Error message for the first `Format` column with no known field; it is
/// raised at the first record, so an empty section is never rejected
fn unknown_column<T: 'static>(plan: &FieldPlan<T>, format: &[String]) -> Option<String> {
    plan.first_unknown()
        .map(|i| format!("Unknown column '{}'", format[i]))
}

/// Splits `Header: body` at the first colon, trimming both halves
fn split_header(line: &str) -> Option<(&str, &str)> {
    line.split_once(':')
        .map(|(header, body)| (header.trim(), body.trim()))
}

struct SectionParser<'c, R> {
    reader: LineReader<R>,
    strictness: Strictness,
    cancel: Option<&'c AtomicBool>,
    order: Vec<SectionName>,
    script_info: Option<ScriptInfo>,
    styles: Option<Styles>,
    events: Option<Events>,
    extra_sections: ExtraSections,
}

impl<'c, R: BufRead> SectionParser<'c, R> {
    fn new(reader: R, strictness: Strictness, cancel: Option<&'c AtomicBool>) -> Self {
        Self {
            reader: LineReader::new(reader),
            strictness,
            cancel,
            order: Vec::new(),
            script_info: None,
            styles: None,
            events: None,
            extra_sections: ExtraSections::default(),
        }
    }

    fn run(mut self) -> Result<Document> {
        while let Some(line) = self.next_line()? {
            let text = line.trim();
            if text.is_empty() {
                continue;
            }

            let line_no = self.reader.line();
            let Some(tag) = section_tag(text) else {
                if self.strictness.invalid_sections() {
                    debug!(line = line_no, "skipping line outside any section");
                    continue;
                }
                return Err(ParseError::new(
                    line_no,
                    ParseErrorKind::InvalidSection,
                    format!("'{text}' is not a valid section name"),
                )
                .into());
            };

            let name = SectionName::from_tag(tag);
            trace!(line = line_no, section = %name, "entering section");
            match &name {
                SectionName::ScriptInfo => {
                    self.script_info = Some(self.read_script_info()?);
                }
                SectionName::V4Styles | SectionName::V4PlusStyles => {
                    self.styles = Some(self.read_styles()?);
                }
                SectionName::Events => {
                    self.events = Some(self.read_events()?);
                }
                SectionName::Other(tag) => {
                    if !name.is_pass_through() && !self.strictness.unknown_sections() {
                        return Err(ParseError::new(
                            line_no,
                            ParseErrorKind::UnknownSection,
                            format!("Unknown section: [{tag}]"),
                        )
                        .into());
                    }
                    let body = self.read_raw_section()?;
                    self.extra_sections
                        .entry(tag.clone())
                        .or_default()
                        .push_str(&body);
                }
            }

            if !self.order.iter().any(|seen| seen.same_slot(&name)) {
                self.order.push(name);
            }
        }

        self.finish()
    }

    fn finish(self) -> Result<Document> {
        let missing = |what: &str| {
            Error::from(ParseError::new(
                0,
                ParseErrorKind::MissingSection,
                format!("No {what} section found"),
            ))
        };
        let script_info = self.script_info.ok_or_else(|| missing("[Script Info]"))?;
        let styles = self
            .styles
            .ok_or_else(|| missing("[V4 Styles] / [V4+ Styles]"))?;
        let events = self.events.ok_or_else(|| missing("[Events]"))?;

        debug!(
            sections = self.order.len(),
            styles = styles.len(),
            events = events.len(),
            "parsed document"
        );
        Ok(Document {
            script_info,
            styles,
            events,
            order: self.order,
            extra_sections: self.extra_sections,
        })
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Err(Error::Cancelled);
        }
        Ok(self.reader.next_line()?)
    }

    /// Next line of a structured section; `None` at the next header or EOF
    fn next_body_line(&mut self) -> Result<Option<String>> {
        match self.reader.peek()? {
            Some(line) if !line.trim_start().starts_with('[') => self.next_line(),
            _ => Ok(None),
        }
    }

    /// Fail, or log and continue when invalid lines are allowed
    fn reject(&self, kind: ParseErrorKind, line: usize, message: String) -> Result<()> {
        if self.strictness.invalid_lines() {
            debug!(line, %kind, %message, "skipping invalid line");
            Ok(())
        } else {
            Err(ParseError::new(line, kind, message).into())
        }
    }

    fn read_script_info(&mut self) -> Result<ScriptInfo> {
        let mut info = ScriptInfo::default();
        while let Some(line) = self.next_body_line()? {
            let line_no = self.reader.line();
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            if let Some(comment) = text.strip_prefix(';') {
                info.comments.push(comment.trim().to_owned());
                continue;
            }

            match split_header(text) {
                Some(("!", comment)) => info.comments.push(comment.to_owned()),
                Some((key, value)) => match script_info_field(key) {
                    Some(field) => (field.read)(&mut info, value).map_err(|e| {
                        ParseError::from_value(line_no, ParseErrorKind::InvalidEventLine, text, e)
                    })?,
                    None => self.reject(
                        ParseErrorKind::InvalidEventLine,
                        line_no,
                        format!("Invalid script info: {key}"),
                    )?,
                },
                None => match text.strip_prefix('!') {
                    Some(comment) => info.comments.push(comment.trim().to_owned()),
                    None => self.reject(
                        ParseErrorKind::InvalidEventLine,
                        line_no,
                        format!("Invalid script info: {text}"),
                    )?,
                },
            }
        }
        Ok(info)
    }

    /// Reads the `Format:` line opening a styles or events section
    fn read_format(&mut self) -> Result<Vec<String>> {
        while let Some(line) = self.next_body_line()? {
            let line_no = self.reader.line();
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            return match split_header(text) {
                Some((FORMAT_HEADER, columns)) => {
                    Ok(columns.split(',').map(|c| c.trim().to_owned()).collect())
                }
                _ => Err(ParseError::new(
                    line_no,
                    ParseErrorKind::MissingFormatLine,
                    format!("Expected a format line, found '{text}'"),
                )
                .into()),
            };
        }
        Err(ParseError::new(
            self.reader.line() + 1,
            ParseErrorKind::MissingFormatLine,
            "No format line",
        )
        .into())
    }

    fn read_styles(&mut self) -> Result<Styles> {
        const KIND: ParseErrorKind = ParseErrorKind::InvalidStyleLine;

        let format = self.read_format()?;
        let plan = FieldPlan::new(&format, STYLE_FIELDS);
        let mut unknown = unknown_column(&plan, &format);
        let mut styles = Styles::with_format(format);

        while let Some(line) = self.next_body_line()? {
            let line_no = self.reader.line();
            let text = line.trim();
            if text.is_empty() {
                continue;
            }

            let body = match split_header(text) {
                Some((STYLE_HEADER, body)) => body,
                _ => {
                    self.reject(KIND, line_no, format!("Invalid style line '{text}'"))?;
                    continue;
                }
            };
            if let Some(message) = unknown.take() {
                self.reject(KIND, line_no, message)?;
            }
            let values: Vec<&str> = body.split(',').collect();
            if values.len() != plan.len() {
                self.reject(
                    KIND,
                    line_no,
                    format!(
                        "Expected {} values, found {} in '{text}'",
                        plan.len(),
                        values.len()
                    ),
                )?;
                continue;
            }

            let mut style = Style::default();
            plan.read(&mut style, values)
                .map_err(|e| ParseError::from_value(line_no, KIND, text, e))?;
            styles.push(style);
        }
        Ok(styles)
    }

    fn read_events(&mut self) -> Result<Events> {
        const KIND: ParseErrorKind = ParseErrorKind::InvalidEventLine;

        let format = self.read_format()?;
        let plan = FieldPlan::new(&format, EVENT_FIELDS);
        let mut unknown = unknown_column(&plan, &format);
        let mut events = Events::with_format(format);

        while let Some(line) = self.next_body_line()? {
            let line_no = self.reader.line();
            let text = line.trim();
            if text.is_empty() {
                continue;
            }

            let Some((header, body)) = split_header(text) else {
                self.reject(KIND, line_no, format!("Invalid event line '{text}'"))?;
                continue;
            };

            if let Some(event_type) = EventType::from_header(header) {
                if let Some(message) = unknown.take() {
                    self.reject(KIND, line_no, message)?;
                }
                // The last column takes the rest of the line, commas included
                let values: Vec<&str> = body.splitn(plan.len(), ',').collect();
                if values.len() < plan.len() {
                    self.reject(
                        KIND,
                        line_no,
                        format!(
                            "Expected {} values, found {} in '{text}'",
                            plan.len(),
                            values.len()
                        ),
                    )?;
                    continue;
                }

                let mut event = Event {
                    event_type,
                    ..Event::default()
                };
                plan.read(&mut event, values)
                    .map_err(|e| ParseError::from_value(line_no, KIND, text, e))?;
                events.push(event);
            } else if let Some(kind) = OtherEventKind::from_header(header) {
                events.other_events.push(OtherEvent {
                    kind,
                    content: body.to_owned(),
                });
            } else {
                self.reject(KIND, line_no, format!("Invalid event line '{text}'"))?;
            }
        }
        Ok(events)
    }

    /// Raw lines up to a blank line or EOF, each terminated by `\n`
    fn read_raw_section(&mut self) -> Result<String> {
        let mut body = String::new();
        while self
            .reader
            .peek()?
            .is_some_and(|line| !line.trim().is_empty())
        {
            if let Some(line) = self.next_line()? {
                body.push_str(&line);
                body.push('\n');
            }
        }
        Ok(body)
    }
}
