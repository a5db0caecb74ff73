//! Line-at-a-time reading with one line of lookahead

use std::io::{self, BufRead};

const BOM: char = '\u{FEFF}';

/// Reads `\n`-terminated lines, tolerating `\r\n` and invalid UTF-8
///
/// Tracks the 1-based number of the most recently consumed line. A UTF-8
/// byte-order mark at the very start is dropped.
pub(crate) struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    peeked: Option<String>,
    line: usize,
    started: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            peeked: None,
            line: 0,
            started: false,
        }
    }

    /// Number of the last line returned by [`Self::next_line`]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Next line without consuming it
    pub fn peek(&mut self) -> io::Result<Option<&str>> {
        if self.peeked.is_none() {
            self.peeked = self.read_raw()?;
        }
        Ok(self.peeked.as_deref())
    }

    /// Consume the next line
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let line = match self.peeked.take() {
            Some(line) => Some(line),
            None => self.read_raw()?,
        };
        if line.is_some() {
            self.line += 1;
        }
        Ok(line)
    }

    fn read_raw(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }

        let mut line = String::from_utf8_lossy(&self.buf).into_owned();
        if !self.started {
            self.started = true;
            if line.starts_with(BOM) {
                line.remove(0);
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[u8]) -> Vec<String> {
        let mut reader = LineReader::new(input);
        let mut out = Vec::new();
        while let Some(line) = reader.next_line().unwrap() {
            out.push(line);
        }
        out
    }

    #[test]
    fn mixed_line_endings() {
        assert_eq!(lines(b"a\r\nb\nc"), ["a", "b", "c"]);
        assert_eq!(lines(b"a\n\n"), ["a", ""]);
        assert!(lines(b"").is_empty());
    }

    #[test]
    fn bom_only_at_start() {
        assert_eq!(lines("\u{FEFF}[Script Info]\n\u{FEFF}x".as_bytes()), [
            "[Script Info]",
            "\u{FEFF}x"
        ]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(lines(b"a\xFFb\n"), ["a\u{FFFD}b"]);
    }

    #[test]
    fn peek_does_not_advance() {
        let mut reader = LineReader::new(&b"one\ntwo\n"[..]);
        assert_eq!(reader.peek().unwrap(), Some("one"));
        assert_eq!(reader.line(), 0);
        assert_eq!(reader.next_line().unwrap().as_deref(), Some("one"));
        assert_eq!(reader.line(), 1);
        assert_eq!(reader.peek().unwrap(), Some("two"));
        assert_eq!(reader.next_line().unwrap().as_deref(), Some("two"));
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.line(), 2);
    }
}
