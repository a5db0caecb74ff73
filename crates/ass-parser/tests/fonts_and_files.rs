//! Font usage extraction and file-based parsing

use ass_parser::{parse_file, parse_str, Error, FontError, Strictness};
use pretty_assertions::assert_eq;
use std::io::Write;

const CANONICAL: &str = include_str!("fixtures/canonical.ass");

const RESET_SCRIPT: &str = r"[Script Info]
Title: Reset

[V4+ Styles]
Format: Name, Fontname, Bold, Italic
Style: Plain,Arial,0,0
Style: Heavy,Impact,-1,0

[Events]
Format: Layer, Start, End, Style, Text
Dialogue: 0,0:00:00.00,0:00:01.00,Plain,{\b1}A{\r}B
Dialogue: 0,0:00:00.00,0:00:01.00,Heavy,C{\rPlain}D{\b0}E
";

#[test]
fn reset_returns_to_event_style() {
    let doc = parse_str(RESET_SCRIPT).unwrap();
    let fonts = doc.used_fonts().unwrap();

    let summary: Vec<(&str, i32, bool, String)> = fonts
        .iter()
        .map(|f| (f.font_name.as_str(), f.bold, f.italic, f.used_text()))
        .collect();
    assert_eq!(
        summary,
        [
            ("Arial", 0, false, "BDE".to_owned()),
            ("Arial", 1, false, "A".to_owned()),
            ("Impact", 1, false, "C".to_owned()),
        ]
    );
}

#[test]
fn canonical_file_fonts() {
    let doc = parse_str(CANONICAL).unwrap();
    let fonts = doc.used_fonts().unwrap();
    let faces: Vec<(&str, i32, bool)> = fonts
        .iter()
        .map(|f| (f.font_name.as_str(), f.bold, f.italic))
        .collect();
    assert_eq!(
        faces,
        [
            ("Arial", 0, false),
            ("Arial", 1, false),
            ("Times", 1, true),
            ("Times New Roman", 1, true),
        ]
    );
    assert_eq!(fonts[0].used_text(), " ,Hdelorw");
    assert_eq!(fonts[1].used_text(), "bey");
    assert_eq!(fonts[2].used_text(), "enot");
    assert_eq!(fonts[3].used_text(), "Sadeilnt");
}

#[test]
fn unresolved_reset_target() {
    let text = RESET_SCRIPT.replace(r"{\rPlain}", r"{\rGhost}");
    let doc = parse_str(&text).unwrap();
    assert_eq!(
        doc.used_fonts().unwrap_err(),
        FontError::UnresolvedStyle {
            name: "Ghost".to_owned()
        }
    );
}

#[test]
fn parse_file_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CANONICAL.as_bytes()).unwrap();
    file.flush().unwrap();

    let doc = parse_file(file.path(), Strictness::STRICT).unwrap();
    assert_eq!(doc, parse_str(CANONICAL).unwrap());
}

#[test]
fn written_file_parses_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.ass");

    let mut doc = parse_str(RESET_SCRIPT).unwrap();
    doc.embed_font("impact.ttf", &[0, 1, 2, 3, 254, 255]);
    doc.write_to(std::fs::File::create(&path).unwrap()).unwrap();

    let reread = parse_file(&path, Strictness::STRICT).unwrap();
    assert_eq!(reread, doc);
    assert_eq!(reread.embedded_fonts()[0].data, [0, 1, 2, 3, 254, 255]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = parse_file(dir.path().join("absent.ass"), Strictness::NONE);
    assert!(matches!(result, Err(Error::Io(_))));
}
