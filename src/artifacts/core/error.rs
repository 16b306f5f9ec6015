//! Error taxonomy of the diff core
//!
//! Every failure is detected synchronously at the offending call and handed
//! back to the caller. No partial script or document is ever produced.

use std::fmt;

/// Which of the two inputs a limit was applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => write!(f, "old"),
            Side::New => write!(f, "new"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    /// A configuration value is outside its domain (e.g. a negative context width).
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// One of the inputs has more lines than the caller allows.
    #[error("{side} input has {lines} lines, more than the limit of {limit}")]
    InputTooLarge {
        side: Side,
        lines: usize,
        limit: usize,
    },

    /// The edit search exhausted its work budget before finding a script.
    #[error("edit script too complex: search exceeded the work limit of {limit} steps")]
    EditScriptTooComplex { limit: u64 },
}

impl PatchError {
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        PatchError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
