//! Serializer writing a [`Document`] back to ASS text
//!
//! Sections are written in [`Document::order`]. Style and event records
//! follow the columns of their section's `Format` list, so files with a
//! non-default or partial column set survive a round trip. Pass-through
//! sections are written back verbatim.
//!
//! ```rust
//! use ass_parser::{model::Document, serializer::{LineEnding, SerializeOptions}};
//!
//! let doc = Document::new();
//! let text = doc.to_ass_string()?;
//! assert!(text.starts_with("[Script Info]\n"));
//!
//! let mut out = Vec::new();
//! doc.write_to_with(&mut out, SerializeOptions { line_ending: LineEnding::CrLf })?;
//! assert!(out.starts_with(b"[Script Info]\r\n"));
//! # Ok::<(), ass_parser::serializer::SerializeError>(())
//! ```

use crate::model::{
    fields::{FieldCodec, FieldPlan, EVENT_FIELDS, SCRIPT_INFO_FIELDS, STYLE_FIELDS},
    Document, SectionName, FORMAT_HEADER, STYLE_HEADER,
};
use std::io::{self, BufWriter, Write};
use thiserror::Error;
use tracing::trace;

/// Failure while writing a document
#[derive(Error, Debug)]
pub enum SerializeError {
    /// Styles `Format` names a column with no known field
    #[error("Unknown style field '{0}'")]
    UnknownStyleField(String),

    /// Events `Format` names a column with no known field
    #[error("Unknown event field '{0}'")]
    UnknownEventField(String),

    /// `order` lists a section the document holds no data for
    #[error("No data for section [{0}]")]
    MissingSection(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Line terminator written after every line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SerializeOptions {
    pub line_ending: LineEnding,
}

impl Document {
    /// Write with default options; see [`Document::write_to_with`]
    ///
    /// # Errors
    ///
    /// See [`Document::write_to_with`].
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), SerializeError> {
        self.write_to_with(writer, SerializeOptions::default())
    }

    /// Write the document as ASS text
    ///
    /// Output is buffered and flushed before returning. Pass `&mut writer` to
    /// keep using the writer afterwards.
    ///
    /// # Errors
    ///
    /// Fails on an unknown `Format` column, on an `order` entry without data,
    /// or when the writer fails. Output written before the failure is not
    /// rolled back.
    pub fn write_to_with<W: Write>(
        &self,
        writer: W,
        options: SerializeOptions,
    ) -> Result<(), SerializeError> {
        let mut out = SectionWriter {
            out: BufWriter::new(writer),
            newline: options.line_ending.as_str(),
        };
        for (i, section) in self.order.iter().enumerate() {
            if i > 0 {
                out.line("")?;
            }
            trace!(section = %section, "writing section");
            match section {
                SectionName::ScriptInfo => self.write_script_info(&mut out)?,
                SectionName::V4Styles | SectionName::V4PlusStyles => {
                    self.write_styles(&mut out, section)?;
                }
                SectionName::Events => self.write_events(&mut out)?,
                SectionName::Other(name) => {
                    let body = self
                        .extra_sections
                        .get(name)
                        .ok_or_else(|| SerializeError::MissingSection(name.clone()))?;
                    out.header(name)?;
                    for line in body.lines() {
                        out.line(line)?;
                    }
                }
            }
        }
        out.out.flush()?;
        Ok(())
    }

    /// The document as an ASS string with `\n` line endings
    ///
    /// # Errors
    ///
    /// See [`Document::write_to_with`].
    pub fn to_ass_string(&self) -> Result<String, SerializeError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| SerializeError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn write_script_info<W: Write>(&self, out: &mut SectionWriter<W>) -> io::Result<()> {
        out.header(SectionName::ScriptInfo.as_str())?;
        for comment in &self.script_info.comments {
            out.line(&format!("; {comment}"))?;
        }
        for field in SCRIPT_INFO_FIELDS {
            if let Some(value) = (field.write)(&self.script_info) {
                out.line(&format!("{}: {value}", field.key))?;
            }
        }
        Ok(())
    }

    fn write_styles<W: Write>(
        &self,
        out: &mut SectionWriter<W>,
        section: &SectionName,
    ) -> Result<(), SerializeError> {
        let format = &self.styles.format;
        let plan = checked_plan(format, STYLE_FIELDS, SerializeError::UnknownStyleField)?;

        out.header(section.as_str())?;
        out.format_line(format)?;
        for style in self.styles.iter() {
            if let Some(values) = plan.write(style) {
                out.line(&format!("{STYLE_HEADER}: {values}"))?;
            }
        }
        Ok(())
    }

    fn write_events<W: Write>(&self, out: &mut SectionWriter<W>) -> Result<(), SerializeError> {
        let format = &self.events.format;
        let plan = checked_plan(format, EVENT_FIELDS, SerializeError::UnknownEventField)?;

        out.header(SectionName::Events.as_str())?;
        out.format_line(format)?;
        for event in self.events.iter() {
            if let Some(values) = plan.write(event) {
                out.line(&format!("{}: {values}", event.event_type))?;
            }
        }
        for other in &self.events.other_events {
            out.line(&format!("{}: {}", other.kind, other.content))?;
        }
        Ok(())
    }
}

/// Field plan for writing; every column must be known
fn checked_plan<T: 'static>(
    format: &[String],
    table: &'static [FieldCodec<T>],
    unknown: fn(String) -> SerializeError,
) -> Result<FieldPlan<T>, SerializeError> {
    let plan = FieldPlan::new(format, table);
    match plan.first_unknown() {
        Some(i) => Err(unknown(format[i].clone())),
        None => Ok(plan),
    }
}

struct SectionWriter<W: Write> {
    out: BufWriter<W>,
    newline: &'static str,
}

impl<W: Write> SectionWriter<W> {
    fn line(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(self.newline.as_bytes())
    }

    fn header(&mut self, name: &str) -> io::Result<()> {
        self.line(&format!("[{name}]"))
    }

    fn format_line(&mut self, columns: &[String]) -> io::Result<()> {
        self.line(&format!("{FORMAT_HEADER}: {}", columns.join(", ")))
    }
}
