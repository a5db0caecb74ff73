//! Files embedded in `[Fonts]` and `[Graphics]`

use crate::{
    model::{Document, SectionName, FONTS_SECTION, GRAPHICS_SECTION},
    uuencode,
};

const FONT_ENTRY: &str = "fontname";
const GRAPHIC_ENTRY: &str = "filename";

/// A decoded file from a `[Fonts]` or `[Graphics]` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedFile {
    /// Name from the `fontname:` or `filename:` line
    pub name: String,
    pub data: Vec<u8>,
}

/// Splits a raw section body into named entries of concatenated data lines
///
/// Lowercase letters are outside the encoding alphabet, so an entry line
/// cannot be confused with data.
fn entries<'a>(body: &'a str, key: &str) -> Vec<(&'a str, String)> {
    let mut entries: Vec<(&str, String)> = Vec::new();
    for line in body.lines() {
        match line.split_once(':') {
            Some((entry, name)) if entry.trim() == key => {
                entries.push((name.trim(), String::new()));
            }
            _ => {
                if let Some((_, data)) = entries.last_mut() {
                    data.push_str(line.trim());
                }
            }
        }
    }
    entries
}

impl Document {
    fn embedded(&self, section: &str, key: &str) -> Vec<EmbeddedFile> {
        let Some(body) = self.extra_section(section) else {
            return Vec::new();
        };
        entries(body, key)
            .into_iter()
            .map(|(name, data)| EmbeddedFile {
                name: name.to_owned(),
                data: uuencode::decode(data.as_bytes()).0,
            })
            .collect()
    }

    /// Decoded `[Fonts]` entries in file order
    #[must_use]
    pub fn embedded_fonts(&self) -> Vec<EmbeddedFile> {
        self.embedded(FONTS_SECTION, FONT_ENTRY)
    }

    /// Decoded `[Graphics]` entries in file order
    #[must_use]
    pub fn embedded_graphics(&self) -> Vec<EmbeddedFile> {
        self.embedded(GRAPHICS_SECTION, GRAPHIC_ENTRY)
    }

    /// Append a font to `[Fonts]`, creating the section when absent
    pub fn embed_font(&mut self, name: &str, data: &[u8]) {
        let encoded = uuencode::encode(data, true, false);
        let body = self
            .extra_sections
            .entry(FONTS_SECTION.to_owned())
            .or_default();
        body.push_str(FONT_ENTRY);
        body.push_str(": ");
        body.push_str(name);
        body.push('\n');
        for line in encoded.split(|&b| b == b'\n').filter(|line| !line.is_empty()) {
            body.push_str(&String::from_utf8_lossy(line));
            body.push('\n');
        }
        self.register_section(SectionName::Other(FONTS_SECTION.to_owned()));
    }
}
