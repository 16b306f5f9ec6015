//! Unified-diff patch document
//!
//! ## Format
//!
//! ```text
//! --- <old label>[\t<timestamp>]
//! +++ <new label>[\t<timestamp>]
//! @@ -<start>[,<count>] +<start>[,<count>] @@
//!  context line
//! -removed line
//! +added line
//! \ No newline at end of file
//! ```
//!
//! Every emitted line ends with `\n`. A document without hunks renders as
//! nothing at all, headers included. The alternate form (`{:#}`) renders the
//! same text with terminal colors.

use crate::artifacts::diff::diff_algorithm::EditScript;
use crate::artifacts::patch::config::ContextWidth;
use crate::artifacts::patch::hunk::{Hunk, group_hunks};
use chrono::{DateTime, Local};
use colored::Colorize;
use derive_new::new;
use std::fmt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f %z";

/// File identifier printed in a `---`/`+++` header
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileLabel {
    name: String,
    /// Modification time, appended after a tab when present
    modified: Option<DateTime<Local>>,
}

impl FileLabel {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modified(&self) -> Option<&DateTime<Local>> {
        self.modified.as_ref()
    }
}

impl From<&str> for FileLabel {
    fn from(name: &str) -> Self {
        FileLabel::new(name.to_string(), None)
    }
}

impl fmt::Display for FileLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.modified {
            Some(modified) => write!(f, "{}\t{}", self.name, modified.format(TIMESTAMP_FORMAT)),
            None => write!(f, "{}", self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchDocument<'a> {
    old_label: FileLabel,
    new_label: FileLabel,
    hunks: Vec<Hunk<'a>>,
}

impl<'a> PatchDocument<'a> {
    /// Groups an edit script into hunks and attaches the file labels.
    pub fn format(
        script: &EditScript<'a>,
        context: ContextWidth,
        old_label: FileLabel,
        new_label: FileLabel,
    ) -> Self {
        PatchDocument {
            old_label,
            new_label,
            hunks: group_hunks(script, context),
        }
    }

    pub fn old_label(&self) -> &FileLabel {
        &self.old_label
    }

    pub fn new_label(&self) -> &FileLabel {
        &self.new_label
    }

    pub fn hunks(&self) -> &[Hunk<'a>] {
        &self.hunks
    }

    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }
}

impl fmt::Display for PatchDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hunks.is_empty() {
            return Ok(());
        }

        let headers = [
            format!("--- {}", self.old_label),
            format!("+++ {}", self.new_label),
        ];
        for header in headers {
            if f.alternate() {
                writeln!(f, "{}", header.bold())?;
            } else {
                writeln!(f, "{header}")?;
            }
        }
        for hunk in &self.hunks {
            if f.alternate() {
                write!(f, "{hunk:#}")?;
            } else {
                write!(f, "{hunk}")?;
            }
        }
        Ok(())
    }
}
