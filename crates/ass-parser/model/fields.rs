//! Format-driven field dispatch
//!
//! Styles and events declare their columns at runtime through a `Format:`
//! line. Each known column name maps to a [`FieldCodec`], a pair of plain
//! function pointers that read a value into a record and write it back. A
//! [`FieldPlan`] resolves a whole `Format:` line once, so per-record work is
//! a straight walk over the resolved columns.
//!
//! Script info keys use the same reader/writer shape with an optional
//! writer result, since optional keys are skipped when absent.

use super::{Event, ScriptInfo, Style};
use crate::values::{
    format_float, format_n1_bool, format_yes_no, parse_n1_bool, parse_number, parse_yes_no,
    ValueError,
};
use core::fmt::{Display, Write};

/// Reads a raw column value into a record
pub(crate) type Reader<T> = fn(&mut T, &str) -> Result<(), ValueError>;

/// Appends a record's column value to a line buffer
pub(crate) type Writer<T> = fn(&T, &mut String);

/// Reader/writer pair for one named column
pub(crate) struct FieldCodec<T: 'static> {
    pub name: &'static str,
    pub read: Reader<T>,
    pub write: Writer<T>,
}

fn push_display(out: &mut String, value: impl Display) {
    // Writing into a String cannot fail
    let _ = write!(out, "{value}");
}

/// Builds a [`FieldCodec`] for a record field from its coercion kind
macro_rules! field {
    ($ty:ty, $name:literal, $field:ident, text) => {
        FieldCodec {
            name: $name,
            read: |record: &mut $ty, value: &str| {
                record.$field = value.to_owned();
                Ok(())
            },
            write: |record: &$ty, out: &mut String| out.push_str(&record.$field),
        }
    };
    ($ty:ty, $name:literal, $field:ident, int) => {
        FieldCodec {
            name: $name,
            read: |record: &mut $ty, value: &str| {
                record.$field = parse_number(value)?;
                Ok(())
            },
            write: |record: &$ty, out: &mut String| push_display(out, record.$field),
        }
    };
    ($ty:ty, $name:literal, $field:ident, float) => {
        FieldCodec {
            name: $name,
            read: |record: &mut $ty, value: &str| {
                record.$field = parse_number(value)?;
                Ok(())
            },
            write: |record: &$ty, out: &mut String| out.push_str(&format_float(record.$field)),
        }
    };
    ($ty:ty, $name:literal, $field:ident, n1) => {
        FieldCodec {
            name: $name,
            read: |record: &mut $ty, value: &str| {
                record.$field = parse_n1_bool(value);
                Ok(())
            },
            write: |record: &$ty, out: &mut String| out.push_str(format_n1_bool(record.$field)),
        }
    };
    ($ty:ty, $name:literal, $field:ident, value) => {
        FieldCodec {
            name: $name,
            read: |record: &mut $ty, value: &str| {
                record.$field = value.parse()?;
                Ok(())
            },
            write: |record: &$ty, out: &mut String| push_display(out, record.$field),
        }
    };
}

/// Known style columns; `TertiaryColour` is the SSA name of `OutlineColour`
pub(crate) static STYLE_FIELDS: &[FieldCodec<Style>] = &[
    field!(Style, "Name", name, text),
    field!(Style, "Fontname", fontname, text),
    field!(Style, "Fontsize", fontsize, float),
    field!(Style, "PrimaryColour", primary_colour, value),
    field!(Style, "SecondaryColour", secondary_colour, value),
    field!(Style, "OutlineColour", outline_colour, value),
    field!(Style, "TertiaryColour", outline_colour, value),
    field!(Style, "BackColour", back_colour, value),
    field!(Style, "Bold", bold, n1),
    field!(Style, "Italic", italic, n1),
    field!(Style, "Underline", underline, n1),
    field!(Style, "StrikeOut", strike_out, n1),
    field!(Style, "ScaleX", scale_x, float),
    field!(Style, "ScaleY", scale_y, float),
    field!(Style, "Spacing", spacing, float),
    field!(Style, "Angle", angle, float),
    field!(Style, "BorderStyle", border_style, value),
    field!(Style, "Outline", outline, float),
    field!(Style, "Shadow", shadow, float),
    field!(Style, "Alignment", alignment, value),
    field!(Style, "MarginL", margin_l, int),
    field!(Style, "MarginR", margin_r, int),
    field!(Style, "MarginV", margin_v, int),
    field!(Style, "AlphaLevel", alpha_level, int),
    field!(Style, "Encoding", encoding, int),
];

/// Known event columns
pub(crate) static EVENT_FIELDS: &[FieldCodec<Event>] = &[
    field!(Event, "Layer", layer, int),
    field!(Event, "Marked", marked, text),
    field!(Event, "Start", start, value),
    field!(Event, "End", end, value),
    field!(Event, "Style", style, text),
    field!(Event, "Name", name, text),
    field!(Event, "MarginL", margin_l, int),
    field!(Event, "MarginR", margin_r, int),
    field!(Event, "MarginV", margin_v, int),
    field!(Event, "Effect", effect, text),
    field!(Event, "Text", text, text),
];

/// Columns of one `Format:` line resolved against a codec table
///
/// Unknown column names resolve to `None`; their values are skipped on read.
pub(crate) struct FieldPlan<T: 'static> {
    columns: Vec<Option<&'static FieldCodec<T>>>,
}

impl<T: 'static> FieldPlan<T> {
    pub fn new<S: AsRef<str>>(format: &[S], table: &'static [FieldCodec<T>]) -> Self {
        let columns = format
            .iter()
            .map(|name| table.iter().find(|codec| codec.name == name.as_ref()))
            .collect();
        Self { columns }
    }

    /// Number of declared columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Position of the first column with no codec
    pub fn first_unknown(&self) -> Option<usize> {
        self.columns.iter().position(Option::is_none)
    }

    /// Apply values positionally; values for unknown columns are ignored
    pub fn read<'v>(
        &self,
        record: &mut T,
        values: impl IntoIterator<Item = &'v str>,
    ) -> Result<(), ValueError> {
        for (codec, value) in self.columns.iter().zip(values) {
            if let Some(codec) = codec {
                (codec.read)(record, value)?;
            }
        }
        Ok(())
    }

    /// Comma-joined values in column order; `None` if any column is unknown
    pub fn write(&self, record: &T) -> Option<String> {
        let mut line = String::new();
        for (i, codec) in self.columns.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            (codec.as_ref()?.write)(record, &mut line);
        }
        Some(line)
    }
}

/// One `[Script Info]` key
pub(crate) struct InfoField {
    pub key: &'static str,
    pub read: Reader<ScriptInfo>,
    /// `None` when an optional key is absent
    pub write: fn(&ScriptInfo) -> Option<String>,
}

/// Builds an [`InfoField`] from the field's coercion kind
macro_rules! info {
    ($key:literal, $field:ident, text) => {
        InfoField {
            key: $key,
            read: |info: &mut ScriptInfo, value: &str| {
                info.$field = value.to_owned();
                Ok(())
            },
            write: |info: &ScriptInfo| Some(info.$field.clone()),
        }
    };
    ($key:literal, $field:ident, optional) => {
        InfoField {
            key: $key,
            read: |info: &mut ScriptInfo, value: &str| {
                info.$field = Some(value.to_owned());
                Ok(())
            },
            write: |info: &ScriptInfo| info.$field.clone(),
        }
    };
    ($key:literal, $field:ident, int) => {
        InfoField {
            key: $key,
            read: |info: &mut ScriptInfo, value: &str| {
                info.$field = parse_number(value)?;
                Ok(())
            },
            write: |info: &ScriptInfo| Some(info.$field.to_string()),
        }
    };
    ($key:literal, $field:ident, float) => {
        InfoField {
            key: $key,
            read: |info: &mut ScriptInfo, value: &str| {
                info.$field = parse_number(value)?;
                Ok(())
            },
            write: |info: &ScriptInfo| Some(format_float(info.$field)),
        }
    };
    ($key:literal, $field:ident, yes_no) => {
        InfoField {
            key: $key,
            read: |info: &mut ScriptInfo, value: &str| {
                info.$field = parse_yes_no(value);
                Ok(())
            },
            write: |info: &ScriptInfo| Some(format_yes_no(info.$field).to_owned()),
        }
    };
    ($key:literal, $field:ident, value) => {
        InfoField {
            key: $key,
            read: |info: &mut ScriptInfo, value: &str| {
                info.$field = value.parse()?;
                Ok(())
            },
            write: |info: &ScriptInfo| Some(info.$field.to_string()),
        }
    };
}

/// Known script info keys, in the order they are written
pub(crate) static SCRIPT_INFO_FIELDS: &[InfoField] = &[
    info!("Title", title, text),
    info!("Original Script", original_script, text),
    info!("Original Translation", original_translation, optional),
    info!("Original Editing", original_editing, optional),
    info!("Original Timing", original_timing, optional),
    info!("Synch Point", synch_point, optional),
    info!("Script Updated By", script_updated_by, optional),
    info!("Update Details", update_details, optional),
    info!("ScriptType", script_type, text),
    info!("Collisions", collisions, text),
    info!("PlayResX", play_res_x, int),
    info!("PlayResY", play_res_y, int),
    info!("PlayDepth", play_depth, int),
    info!("Timer", timer, float),
    info!("WrapStyle", wrap_style, value),
    info!("ScaledBorderAndShadow", scaled_border_and_shadow, yes_no),
    info!("YCbCr Matrix", ycbcr_matrix, value),
];

pub(crate) fn script_info_field(key: &str) -> Option<&'static InfoField> {
    SCRIPT_INFO_FIELDS.iter().find(|field| field.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DEFAULT_EVENT_FORMAT, DEFAULT_STYLE_FORMAT};
    use crate::values::{Alignment, Color, Timestamp};

    #[test]
    fn default_formats_are_fully_known() {
        assert!(FieldPlan::new(&DEFAULT_STYLE_FORMAT, STYLE_FIELDS)
            .first_unknown()
            .is_none());
        assert!(FieldPlan::new(&DEFAULT_EVENT_FORMAT, EVENT_FIELDS)
            .first_unknown()
            .is_none());
    }

    #[test]
    fn reads_and_writes_in_declared_order() {
        let plan = FieldPlan::new(&["Alignment", "Name", "PrimaryColour", "Bold"], STYLE_FIELDS);
        let mut style = Style::default();
        plan.read(&mut style, ["8", "Top", "&H00FF8000", "-1"]).unwrap();

        assert_eq!(style.alignment, Alignment::TopCenter);
        assert_eq!(style.name, "Top");
        assert_eq!(style.primary_colour, Color::rgb(0x00, 0x80, 0xFF));
        assert!(style.bold);
        assert_eq!(plan.write(&style).unwrap(), "8,Top,&H00FF8000,-1");
    }

    #[test]
    fn unknown_columns_are_skipped_on_read_and_refused_on_write() {
        let plan = FieldPlan::new(&["Start", "Bogus", "End"], EVENT_FIELDS);
        assert_eq!(plan.first_unknown(), Some(1));
        assert_eq!(plan.len(), 3);

        let mut event = Event::default();
        plan.read(&mut event, ["0:00:01.00", "ignored", "0:00:02.00"]).unwrap();
        assert_eq!(event.start, Timestamp::from_hmsc(0, 0, 1, 0));
        assert_eq!(event.end, Timestamp::from_hmsc(0, 0, 2, 0));
        assert!(plan.write(&event).is_none());
    }

    #[test]
    fn coercion_errors_surface() {
        let plan = FieldPlan::new(&["Layer"], EVENT_FIELDS);
        let mut event = Event::default();
        assert!(matches!(
            plan.read(&mut event, ["x"]),
            Err(ValueError::InvalidNumeric { .. })
        ));
    }

    #[test]
    fn tertiary_colour_aliases_outline() {
        let plan = FieldPlan::new(&["TertiaryColour"], STYLE_FIELDS);
        let mut style = Style::default();
        plan.read(&mut style, ["&H000000FF"]).unwrap();
        assert_eq!(style.outline_colour, Color::rgb(0xFF, 0, 0));
        assert_eq!(plan.write(&style).unwrap(), "&H000000FF");
    }

    #[test]
    fn optional_info_keys_write_nothing_when_absent() {
        let info = ScriptInfo::default();
        let field = script_info_field("Original Timing").unwrap();
        assert_eq!((field.write)(&info), None);

        let field = script_info_field("PlayResX").unwrap();
        assert_eq!((field.write)(&info).as_deref(), Some("0"));
        assert!(script_info_field("Unknown Key").is_none());
    }
}
