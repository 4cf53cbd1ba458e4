//! Line and token splitting shared by both transformations.
//!
//! Lines end at `\n`, `\r\n` or a bare `\r`. Tokens are separated by
//! Unicode whitespace and the ASCII information separators `\x1c`..=`\x1f`.

use std::fs::File;
use std::io::{self, BufRead, ErrorKind};
use std::path::Path;

/// Open `path` for reading, refusing directories up front.
///
/// # Errors
///
/// Propagates the open failure, or `IsADirectory` for a directory.
pub fn open_input(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(ErrorKind::IsADirectory, "is a directory"));
    }
    Ok(file)
}

#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1c'..='\x1f')
}

pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator).filter(|t| !t.is_empty())
}

/// Reads UTF-8 lines without their terminators.
#[derive(Debug)]
pub struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
    skip_lf: bool,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            skip_lf: false,
        }
    }

    /// `Ok(None)` at end of input. A final line without terminator is returned.
    ///
    /// # Errors
    ///
    /// Read failures, and `InvalidData` for a line that is not UTF-8.
    pub fn next_line(&mut self) -> io::Result<Option<&str>> {
        self.buf.clear();
        let mut found = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }
            // `\n` completing a `\r\n` pair.
            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }
            found = true;

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    self.skip_lf = available[pos] == b'\r';
                    self.buf.extend_from_slice(&available[..pos]);
                    self.reader.consume(pos + 1);
                    break;
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }

        if !found {
            return Ok(None);
        }
        std::str::from_utf8(&self.buf)
            .map(Some)
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};
    use tempfile::TempDir;

    fn collect(input: &[u8]) -> Vec<String> {
        let mut lines = Lines::new(Cursor::new(input.to_vec()));
        let mut out = Vec::new();
        while let Some(line) = lines.next_line().unwrap() {
            out.push(line.to_string());
        }
        out
    }

    #[test]
    fn all_three_terminators_end_a_line() {
        assert_eq!(collect(b"a 1\rb 2\r\nc 3\n"), ["a 1", "b 2", "c 3"]);
        assert_eq!(collect(b"1 2.0\r1 4.0\r"), ["1 2.0", "1 4.0"]);
    }

    #[test]
    fn empty_lines_and_missing_final_terminator() {
        assert_eq!(collect(b"\n\r\r\nx"), ["", "", "", "x"]);
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn crlf_split_across_buffer_refills() {
        let reader = BufReader::with_capacity(2, Cursor::new(b"ab\r\ncd\r\n".to_vec()));
        let mut lines = Lines::new(reader);
        let mut out = Vec::new();
        while let Some(line) = lines.next_line().unwrap() {
            out.push(line.to_string());
        }
        assert_eq!(out, ["ab", "cd"]);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut lines = Lines::new(Cursor::new(b"\xff\n".to_vec()));
        let err = lines.next_line().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn information_separators_split_tokens() {
        let split: Vec<_> = tokens("a\x1cb\x1f c\u{3000}d").collect();
        assert_eq!(split, ["a", "b", "c", "d"]);
        assert_eq!(tokens(" \t ").count(), 0);
    }

    #[test]
    fn directories_are_not_inputs() {
        let dir = TempDir::new().unwrap();
        let err = open_input(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IsADirectory);
    }
}
