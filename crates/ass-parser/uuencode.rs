//! UUEncode dialect used for `[Fonts]` and `[Graphics]` entries
//!
//! Not POSIX uuencode: there is no length prefix and no padding. Every
//! 3-byte group becomes four 6-bit symbols offset by 33 (`!`); a trailing
//! group of 1 or 2 bytes becomes 2 or 3 symbols. Encoded text is broken into
//! 80-character lines.
//!
//! ```rust
//! use ass_parser::uuencode;
//!
//! assert_eq!(uuencode::encode(b"111", true, false), b"-4%R");
//! let (bytes, crlf) = uuencode::decode(b"-4%R");
//! assert_eq!(bytes, b"111");
//! assert!(!crlf);
//! ```

/// Symbols per encoded line
pub const LINE_LENGTH: usize = 80;

/// Symbol for each 6-bit value, `!` through `` ` ``
const ENCODE_LUT: &[u8; 64] =
    b"!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`";

const OFFSET: u8 = b'!';

/// Encode bytes, optionally breaking lines every [`LINE_LENGTH`] symbols
///
/// Breaks only follow a complete 4-symbol group and never end the output.
#[must_use]
pub fn encode(data: &[u8], insert_line_breaks: bool, crlf: bool) -> Vec<u8> {
    let symbols = data.len() / 3 * 4 + data.len() % 3 + usize::from(data.len() % 3 != 0);
    let mut out = Vec::with_capacity(symbols + symbols / LINE_LENGTH * 2);
    let newline: &[u8] = if crlf { b"\r\n" } else { b"\n" };

    let mut written = 0;
    let mut chunks = data.chunks(3).peekable();
    while let Some(chunk) = chunks.next() {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);
        let group = [
            b0 >> 2,
            ((b0 << 4) & 0x3F) | (b1 >> 4),
            ((b1 << 2) & 0x3F) | (b2 >> 6),
            b2 & 0x3F,
        ];

        for &value in &group[..=chunk.len()] {
            out.push(ENCODE_LUT[usize::from(value)]);
        }
        written += chunk.len() + 1;

        if insert_line_breaks && written == LINE_LENGTH && chunk.len() == 3 {
            written = 0;
            if chunks.peek().is_some() {
                out.extend_from_slice(newline);
            }
        }
    }
    out
}

/// Decode symbols, skipping line breaks
///
/// Returns the bytes and whether any `\r` was seen, so that re-encoding
/// with that flag reproduces the original line breaks. A trailing single
/// symbol carries no complete byte and is dropped.
#[must_use]
pub fn decode(data: &[u8]) -> (Vec<u8>, bool) {
    let mut crlf = false;
    let symbols: Vec<u8> = data
        .iter()
        .filter_map(|&c| match c {
            b'\r' => {
                crlf = true;
                None
            }
            b'\n' => None,
            _ => Some(c.wrapping_sub(OFFSET)),
        })
        .collect();

    let mut out = Vec::with_capacity(symbols.len() * 3 / 4);
    for group in symbols.chunks(4) {
        let s0 = group[0];
        let s1 = group.get(1).copied().unwrap_or(0);
        let s2 = group.get(2).copied().unwrap_or(0);
        let s3 = group.get(3).copied().unwrap_or(0);
        let bytes = [
            (s0 << 2) | ((s1 >> 4) & 0x03),
            (s1 << 4) | ((s2 >> 2) & 0x0F),
            (s2 << 6) | (s3 & 0x3F),
        ];
        out.extend_from_slice(&bytes[..group.len().saturating_sub(1)]);
    }
    (out, crlf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_groups() {
        assert_eq!(encode(b"1", true, true), b"-1");
        assert_eq!(encode(b"11", true, true), b"-4%");
        assert_eq!(encode(b"111", true, true), b"-4%R");
        assert!(encode(b"", true, true).is_empty());
    }

    #[test]
    fn lut_spans_bang_to_backtick() {
        assert_eq!(ENCODE_LUT[0], b'!');
        assert_eq!(ENCODE_LUT[63], b'`');
        assert!(ENCODE_LUT.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn breaks_every_eighty_symbols() {
        let data = vec![0xA5; 61];
        let lf = encode(&data, true, false);
        let lines: Vec<&[u8]> = lf.split(|&b| b == b'\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 80);
        assert_eq!(lines[1].len(), 2);

        let crlf = encode(&data, true, true);
        assert_eq!(&crlf[80..82], b"\r\n");
        assert_eq!(encode(&data, false, true).len(), 82);
    }

    #[test]
    fn no_trailing_break_on_exact_lines() {
        let data = vec![7; 120];
        let out = encode(&data, true, false);
        assert_eq!(out.len(), 161);
        assert_eq!(out[80], b'\n');
        assert_ne!(out.last(), Some(&b'\n'));
    }

    #[test]
    fn decode_detects_line_endings() {
        let data: Vec<u8> = (0..=255).collect();
        for crlf in [false, true] {
            let encoded = encode(&data, true, crlf);
            let (decoded, detected) = decode(&encoded);
            assert_eq!(decoded, data);
            assert_eq!(detected, crlf);
            assert_eq!(encode(&decoded, true, detected), encoded);
        }
    }

    #[test]
    fn decode_tolerates_trailing_newline() {
        let (decoded, crlf) = decode(b"-4%R\n");
        assert_eq!(decoded, b"111");
        assert!(!crlf);
        assert_eq!(decode(b"-").0, b"");
    }
}
