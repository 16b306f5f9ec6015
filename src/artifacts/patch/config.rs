//! Patch configuration
//!
//! `PatchConfig` gathers every knob of a patch run in one place: context
//! width, label overrides, timestamps, line endings, color and the resource
//! limits handed to the differ.

use crate::artifacts::core::error::PatchError;
use crate::artifacts::diff::diff_algorithm::DiffLimits;

/// Number of unchanged lines shown around each change
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContextWidth(usize);

impl ContextWidth {
    pub const DEFAULT: ContextWidth = ContextWidth(3);

    pub fn new(lines: usize) -> Self {
        ContextWidth(lines)
    }

    pub fn lines(&self) -> usize {
        self.0
    }

    /// Largest run of unchanged lines that still joins two changes into one hunk
    pub fn merge_gap(&self) -> usize {
        self.0.saturating_mul(2)
    }
}

impl Default for ContextWidth {
    fn default() -> Self {
        ContextWidth::DEFAULT
    }
}

impl TryFrom<i64> for ContextWidth {
    type Error = PatchError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value).map(ContextWidth).map_err(|_| {
            PatchError::invalid_configuration(format!(
                "context width must be a non-negative number of lines, got {value}"
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LineEnding {
    /// `\n`, as produced by the formatter
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
}

/// Everything a single patch run needs besides the two inputs
#[derive(Debug, Clone, Default)]
pub struct PatchConfig {
    pub context: ContextWidth,
    /// Label for the old file, `a/<name>` when unset
    pub old_label: Option<String>,
    /// Label for the new file, `b/<name>` when unset
    pub new_label: Option<String>,
    /// Append modification times to the file headers
    pub timestamps: bool,
    pub line_ending: LineEnding,
    pub color: bool,
    pub limits: DiffLimits,
}
