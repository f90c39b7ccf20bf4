// SPDX-License-Identifier: Apache-2.0 OR MIT
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One editor completion entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Text the user types to trigger the snippet.
    pub prefix: String,
    /// Lines inserted by the snippet, verbatim from the fixture.
    pub body: Vec<String>,
    /// Explanation shown next to the completion.
    pub description: String,
}

impl Snippet {
    /// Builds a record from its parts.
    pub fn new(prefix: impl Into<String>, description: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            prefix: prefix.into(),
            body,
            description: description.into(),
        }
    }
}

/// Reads `path` and returns its lines in file order.
///
/// Lines end at `\n` and lose one trailing `\r`. A trailing newline does not
/// yield an extra empty line, and a last line without one is kept. Bytes that
/// are not valid UTF-8 become U+FFFD.
pub fn load_lines(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    split_lines(BufReader::new(file))
}

fn split_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for segment in reader.split(b'\n') {
        let mut segment = segment?;
        if segment.last() == Some(&b'\r') {
            segment.pop();
        }
        let line = match String::from_utf8(segment) {
            Ok(line) => line,
            Err(err) => replace_invalid_bytes(err.as_bytes()),
        };
        lines.push(line);
    }
    Ok(lines)
}

/// Decodes `bytes`, substituting U+FFFD for each byte that does not start a
/// valid sequence. A truncated multibyte sequence yields one replacement per
/// byte, as JSON encoders do for raw strings.
fn replace_invalid_bytes(mut bytes: &[u8]) -> String {
    let mut decoded = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                decoded.push_str(valid);
                return decoded;
            }
            Err(err) => {
                let (valid, rest) = bytes.split_at(err.valid_up_to());
                decoded.push_str(&String::from_utf8_lossy(valid));
                decoded.push(char::REPLACEMENT_CHARACTER);
                bytes = &rest[1..];
            }
        }
    }
}
