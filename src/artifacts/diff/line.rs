//! Line model
//!
//! A `Line` is the unit of comparison for the differ. It remembers whether
//! its source text ended with a newline, since the last line of a file may
//! not, and a patch has to say so.

use derive_new::new;
use std::fmt;

/// One line of input, compared as an opaque token
///
/// Equality covers both the text and the terminator flag: `"c"` at the end of
/// a file without a trailing newline is not the same line as `"c\n"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Line {
    /// Line content without its `\n` terminator
    text: String,
    /// Whether the line was followed by `\n` in its source
    terminated: bool,
}

impl Line {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Line::new(text.to_string(), true)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Splits text into lines on `\n`
///
/// Empty content yields no lines. A final segment without `\n` becomes an
/// unterminated line. Carriage returns are kept as part of the text.
pub fn split_lines(content: &str) -> Vec<Line> {
    content
        .split_inclusive('\n')
        .map(|chunk| match chunk.strip_suffix('\n') {
            Some(text) => Line::new(text.to_string(), true),
            None => Line::new(chunk.to_string(), false),
        })
        .collect()
}
