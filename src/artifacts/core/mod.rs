//! Core utilities and shared types
//!
//! This module contains the error taxonomy and the output adapter used when
//! a patch is written with a line-ending convention other than `\n`.

pub mod error;

use crate::artifacts::patch::config::LineEnding;
use derive_new::new;
use std::io::{self, Write};

/// Wrapper that implements `Write` and rewrites line endings on the fly
///
/// The patch text is always produced with `\n` terminators. Translating to
/// another convention is the job of whoever persists it, so this adapter sits
/// between the serialized document and the output sink.
///
/// ## Usage
///
/// ```ignore
/// let mut writer = LineEndingWriter::new(std::io::stdout(), LineEnding::Crlf);
/// write!(writer, "{document}")?;
/// ```
#[derive(new)]
pub struct LineEndingWriter<W: Write> {
    inner: W,
    line_ending: LineEnding,
}

impl<W: Write> LineEndingWriter<W> {
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for LineEndingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.line_ending {
            LineEnding::Lf => self.inner.write_all(buf)?,
            LineEnding::Crlf => {
                for chunk in buf.split_inclusive(|&byte| byte == b'\n') {
                    match chunk.strip_suffix(b"\n") {
                        Some(line) => {
                            self.inner.write_all(line)?;
                            self.inner.write_all(b"\r\n")?;
                        }
                        None => self.inner.write_all(chunk)?,
                    }
                }
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
