// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group-code pair reader for DXF text
//!
//! DXF is a flat stream of (group code, value) pairs, two lines per pair.
//! The reader walks the input zero-copy, hands out `(i32, &str)` pairs and
//! supports a single pair of lookahead via [`PairReader::put_back`] so the
//! parser can stop at the next `0` group without consuming it.

use memchr::memchr;

use crate::error::{Error, Result};

/// Zero-copy reader over DXF group-code/value pairs
pub struct PairReader<'a> {
    content: &'a str,
    position: usize,
    line: usize,
    pending: Option<(i32, &'a str)>,
}

impl<'a> PairReader<'a> {
    /// Create a reader over raw DXF text
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            position: 0,
            line: 0,
            pending: None,
        }
    }

    /// Current line number (1-based, after the last read line)
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read the next (code, value) pair, or `None` at end of input
    ///
    /// Group codes are parsed as integers; the value is the raw next line
    /// with surrounding whitespace trimmed. A code line without a value
    /// line is a truncated file and reported as such.
    pub fn next_pair(&mut self) -> Result<Option<(i32, &'a str)>> {
        if let Some(pair) = self.pending.take() {
            return Ok(Some(pair));
        }

        // Skip blank lines between pairs (some exporters pad sections)
        let code_line = loop {
            match self.next_line() {
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break line,
                None => return Ok(None),
            }
        };

        let code = code_line.trim().parse::<i32>().map_err(|_| {
            Error::parse(
                self.line,
                format!("expected group code, found '{}'", code_line.trim()),
            )
        })?;

        let value = self
            .next_line()
            .ok_or_else(|| Error::UnexpectedEof(format!("group code {code} has no value line")))?;

        Ok(Some((code, value.trim())))
    }

    /// Push a pair back so the next [`next_pair`](Self::next_pair) returns it
    ///
    /// Only one pair of lookahead is supported; pushing twice without an
    /// intervening read overwrites the first.
    pub fn put_back(&mut self, pair: (i32, &'a str)) {
        self.pending = Some(pair);
    }

    fn next_line(&mut self) -> Option<&'a str> {
        if self.position >= self.content.len() {
            return None;
        }
        let bytes = &self.content.as_bytes()[self.position..];
        let (end, advance) = match memchr(b'\n', bytes) {
            Some(idx) => (self.position + idx, idx + 1),
            None => (self.content.len(), bytes.len()),
        };
        let line = &self.content[self.position..end];
        self.position += advance;
        self.line += 1;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }
}

/// Parse a float value, reporting the line and field on failure
///
/// Fast path via lexical-core, falling back to std for exotic but legal
/// spellings.
pub(crate) fn parse_float(value: &str, line: usize, what: &str) -> Result<f64> {
    let trimmed = value.trim();
    if let Ok(v) = lexical_core::parse::<f64>(trimmed.as_bytes()) {
        return Ok(v);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| Error::parse(line, format!("invalid {what}: '{trimmed}'")))
}

/// Parse an integer value, reporting the line and field on failure
pub(crate) fn parse_int(value: &str, line: usize, what: &str) -> Result<i32> {
    let trimmed = value.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| Error::parse(line, format!("invalid {what}: '{trimmed}'")))
}
