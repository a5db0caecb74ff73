//! Override tag interpretation for font attribution
//!
//! Only `\fn`, `\b`, `\i` and `\r` affect attribution; every other tag is
//! skipped. State lives in a [`FontState`] scratch value owned by the event
//! being scanned, so events can be scanned concurrently.

use super::FontError;
use crate::model::{Event, Style};
use ahash::RandomState;
use std::collections::HashMap;

pub(crate) type StyleIndex<'a> = HashMap<&'a str, &'a Style, RandomState>;

/// Attribution key: font name, bold as 0/1, italic
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct FontKey {
    pub font: String,
    pub bold: i32,
    pub italic: bool,
}

/// Working copy of the font-relevant part of a style
#[derive(Debug, Clone)]
struct FontState {
    font: String,
    /// Raw `\b` argument; a weight like 700 is kept as is
    weight: i32,
    italic: bool,
}

impl FontState {
    fn from_style(style: &Style) -> Self {
        Self {
            font: style.fontname.clone(),
            weight: i32::from(style.bold),
            italic: style.italic,
        }
    }

    fn key(&self) -> FontKey {
        FontKey {
            font: self.font.clone(),
            bold: i32::from(self.weight != 0),
            italic: self.italic,
        }
    }

    /// Applies one tag, given without its leading backslash
    fn apply(
        &mut self,
        tag: &str,
        event_style: &Style,
        styles: &StyleIndex<'_>,
    ) -> Result<(), FontError> {
        let mut chars = tag.chars();
        let Some(first) = chars.next() else {
            return Ok(());
        };
        let rest = chars.as_str();

        match first {
            'f' => {
                if let Some(font) = rest.strip_prefix('n').filter(|font| !font.is_empty()) {
                    font.clone_into(&mut self.font);
                }
            }
            'b' if matches!(rest.len(), 1 | 3) => {
                if let Ok(weight) = rest.parse() {
                    self.weight = weight;
                }
            }
            'i' if rest.len() == 1 => {
                if let Ok(italic) = rest.parse::<i32>() {
                    self.italic = italic != 0;
                }
            }
            'r' => {
                let style = if rest.is_empty() {
                    event_style
                } else {
                    resolve(styles, rest)?
                };
                *self = Self::from_style(style);
            }
            _ => {}
        }
        Ok(())
    }
}

fn resolve<'a>(styles: &StyleIndex<'a>, name: &str) -> Result<&'a Style, FontError> {
    styles
        .get(name)
        .copied()
        .ok_or_else(|| FontError::UnresolvedStyle {
            name: name.to_owned(),
        })
}

/// Drops `\N` and `\n`, turns `\h` into a non-breaking space
pub(crate) fn normalize_run(run: &str) -> String {
    run.replace("\\N", "")
        .replace("\\n", "")
        .replace("\\h", "\u{A0}")
}

/// Walks one event's text, reporting every non-empty text run with the font
/// it renders in
pub(crate) fn scan_event(
    event: &Event,
    styles: &StyleIndex<'_>,
    mut emit: impl FnMut(FontKey, &str),
) -> Result<(), FontError> {
    let event_style = resolve(styles, &event.style)?;
    let mut state = FontState::from_style(event_style);
    let mut report = |state: &FontState, run: &str| {
        let run = normalize_run(run);
        if !run.is_empty() {
            emit(state.key(), &run);
        }
    };

    let mut blocks = event.text.split('{');
    if let Some(plain) = blocks.next() {
        report(&state, plain);
    }
    for block in blocks {
        let (tags, run) = block.split_once('}').unwrap_or((block, ""));
        for tag in tags.split('\\') {
            state.apply(tag, event_style, styles)?;
        }
        report(&state, run);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(name: &str, font: &str, bold: bool, italic: bool) -> Style {
        Style {
            name: name.to_owned(),
            fontname: font.to_owned(),
            bold,
            italic,
            ..Style::default()
        }
    }

    fn runs(text: &str, styles: &[Style]) -> Result<Vec<(FontKey, String)>, FontError> {
        let index: StyleIndex<'_> = styles.iter().map(|s| (s.name.as_str(), s)).collect();
        let event = Event {
            style: styles[0].name.clone(),
            text: text.to_owned(),
            ..Event::default()
        };
        let mut out = Vec::new();
        scan_event(&event, &index, |key, run| out.push((key, run.to_owned())))?;
        Ok(out)
    }

    fn key(font: &str, bold: i32, italic: bool) -> FontKey {
        FontKey {
            font: font.to_owned(),
            bold,
            italic,
        }
    }

    #[test]
    fn plain_text_uses_event_style() {
        let styles = [style("Main", "Arial", true, false)];
        assert_eq!(
            runs("Hello", &styles).unwrap(),
            [(key("Arial", 1, false), "Hello".to_owned())]
        );
    }

    #[test]
    fn tags_change_font_weight_and_slant() {
        let styles = [style("Main", "Arial", false, false)];
        let out = runs(r"a{\fnTimes\b700}b{\i1\b0}c{\fn}d", &styles).unwrap();
        assert_eq!(
            out,
            [
                (key("Arial", 0, false), "a".to_owned()),
                (key("Times", 1, false), "b".to_owned()),
                (key("Times", 0, true), "c".to_owned()),
                (key("Times", 0, true), "d".to_owned()),
            ]
        );
    }

    #[test]
    fn lookalike_tags_are_ignored() {
        let styles = [style("Main", "Arial", false, false)];
        let out = runs(r"{\blur3\bord2\be1\iclip(0,0,1,1)\fs20}x", &styles).unwrap();
        assert_eq!(out, [(key("Arial", 0, false), "x".to_owned())]);
    }

    #[test]
    fn reset_restores_event_or_named_style() {
        let styles = [
            style("Main", "Arial", false, false),
            style("Alt", "Comic", false, true),
        ];
        let out = runs(r"{\b1}A{\r}B{\rAlt}C", &styles).unwrap();
        assert_eq!(
            out,
            [
                (key("Arial", 1, false), "A".to_owned()),
                (key("Arial", 0, false), "B".to_owned()),
                (key("Comic", 0, true), "C".to_owned()),
            ]
        );
    }

    #[test]
    fn unknown_styles_fail() {
        let styles = [style("Main", "Arial", false, false)];
        assert!(matches!(
            runs(r"{\rMissing}x", &styles),
            Err(FontError::UnresolvedStyle { name }) if name == "Missing"
        ));
    }

    #[test]
    fn line_breaks_and_hard_spaces() {
        assert_eq!(normalize_run(r"a\Nb\nc\hd"), "abc\u{A0}d");
        let styles = [style("Main", "Arial", false, false)];
        assert!(runs(r"{\b1}\N", &styles).unwrap().is_empty());
    }

    #[test]
    fn unterminated_block_is_all_tags() {
        let styles = [style("Main", "Arial", false, false)];
        assert_eq!(
            runs(r"x{\b1 y", &styles).unwrap(),
            [(key("Arial", 0, false), "x".to_owned())]
        );
    }
}
