//! Expenditure log file access

use crate::domain::{DayScanner, LogLine, UndatedHeadingPolicy};
use crate::error::{Result, SpendlogError};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// An opened log file, read line by line on demand
#[derive(Debug)]
pub struct LogSource {
    reader: BufReader<File>,
}

impl LogSource {
    /// Open the log; a missing file is reported as `LogNotFound`
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                SpendlogError::LogNotFound(path.to_path_buf())
            } else {
                SpendlogError::Io(e)
            }
        })?;

        tracing::debug!(path = %path.display(), "opened log");
        Ok(LogSource {
            reader: BufReader::new(file),
        })
    }

    pub fn lines(self) -> DecodedLines<BufReader<File>> {
        DecodedLines::new(self.reader)
    }

    /// Scanner over this file's days
    pub fn days(
        self,
        policy: UndatedHeadingPolicy,
    ) -> DayScanner<DecodedLines<BufReader<File>>> {
        DayScanner::new(self.lines()).with_policy(policy)
    }
}

/// One line of the file, decoded as UTF-8 with invalid bytes replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLine {
    pub text: String,
    pub lossy: bool,
}

impl LogLine for DecodedLine {
    fn text(&self) -> &str {
        &self.text
    }

    fn is_lossy(&self) -> bool {
        self.lossy
    }
}

/// Line iterator that survives non-UTF-8 bytes; only read failures are errors
#[derive(Debug)]
pub struct DecodedLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> DecodedLines<R> {
    pub fn new(reader: R) -> Self {
        DecodedLines {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for DecodedLines<R> {
    type Item = io::Result<DecodedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                let (text, lossy) = match String::from_utf8_lossy(&self.buf) {
                    Cow::Borrowed(text) => (text.to_string(), false),
                    Cow::Owned(text) => (text, true),
                };
                Some(Ok(DecodedLine { text, lossy }))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
