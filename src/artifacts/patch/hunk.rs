//! Hunks: context-bounded windows of an edit script
//!
//! Every run of insertions/deletions is padded with up to `context`
//! unchanged lines on each side. Runs separated by at most `2 * context`
//! unchanged lines share one hunk, since their padding would touch or
//! overlap.

use crate::artifacts::diff::diff_algorithm::EditScript;
use crate::artifacts::diff::line::Line;
use crate::artifacts::patch::config::ContextWidth;
use colored::{ColoredString, Colorize};
use derive_new::new;
use std::fmt;

pub const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// 1-based line range as printed in a hunk header
///
/// An empty range points at the line *before* the insertion point, so a
/// range at the very top of a file is `0,0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct LineRange {
    start: usize,
    count: usize,
}

impl LineRange {
    /// Range of `count` lines following the first `lines_before` lines of a file
    fn after(lines_before: usize, count: usize) -> Self {
        let start = if count == 0 {
            lines_before
        } else {
            lines_before + 1
        };
        LineRange { start, count }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count {
            1 => write!(f, "{}", self.start),
            count => write!(f, "{},{}", self.start, count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Context,
    Removed,
    Added,
}

impl LineKind {
    pub fn marker(&self) -> char {
        match self {
            LineKind::Context => ' ',
            LineKind::Removed => '-',
            LineKind::Added => '+',
        }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            LineKind::Context => text.normal(),
            LineKind::Removed => text.red(),
            LineKind::Added => text.green(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct HunkLine<'a> {
    kind: LineKind,
    line: &'a Line,
}

impl<'a> HunkLine<'a> {
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn line(&self) -> &'a Line {
        self.line
    }
}

/// `{:#}` paints the line by its kind; the marker line stays plain.
impl fmt::Display for HunkLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{}{}", self.kind.marker(), self.line.text());
        if f.alternate() {
            writeln!(f, "{}", self.kind.paint(&text))?;
        } else {
            writeln!(f, "{text}")?;
        }
        if !self.line.is_terminated() {
            writeln!(f, "{NO_NEWLINE_MARKER}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<'a> {
    old_range: LineRange,
    new_range: LineRange,
    lines: Vec<HunkLine<'a>>,
}

impl<'a> Hunk<'a> {
    pub fn old_range(&self) -> LineRange {
        self.old_range
    }

    pub fn new_range(&self) -> LineRange {
        self.new_range
    }

    pub fn lines(&self) -> &[HunkLine<'a>] {
        &self.lines
    }

    pub fn header(&self) -> String {
        format!("@@ -{} +{} @@", self.old_range, self.new_range)
    }
}

impl fmt::Display for Hunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "{}", self.header().cyan())?;
        } else {
            writeln!(f, "{}", self.header())?;
        }
        for line in &self.lines {
            if f.alternate() {
                write!(f, "{line:#}")?;
            } else {
                write!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

/// Half-open spans of script positions holding only insertions/deletions
fn change_runs(script: &EditScript<'_>) -> Vec<(usize, usize)> {
    let mut runs: Vec<(usize, usize)> = Vec::new();

    for (position, edit) in script.edits().iter().enumerate() {
        if edit.is_equal() {
            continue;
        }
        match runs.last_mut() {
            Some((_, end)) if *end == position => *end += 1,
            _ => runs.push((position, position + 1)),
        }
    }

    runs
}

/// Splits an edit script into hunks padded with `context` unchanged lines
pub fn group_hunks<'a>(script: &EditScript<'a>, context: ContextWidth) -> Vec<Hunk<'a>> {
    let edits = script.edits();

    let mut groups: Vec<(usize, usize)> = Vec::new();
    for (start, end) in change_runs(script) {
        match groups.last_mut() {
            Some((_, group_end)) if start - *group_end <= context.merge_gap() => *group_end = end,
            _ => groups.push((start, end)),
        }
    }

    let mut hunks = Vec::with_capacity(groups.len());
    let (mut position, mut old_seen, mut new_seen) = (0, 0, 0);

    for (start, end) in groups {
        let from = start.saturating_sub(context.lines());
        let to = end.saturating_add(context.lines()).min(edits.len());

        for edit in &edits[position..from] {
            old_seen += usize::from(edit.touches_old());
            new_seen += usize::from(edit.touches_new());
        }

        let window = &edits[from..to];
        let old_count = window.iter().filter(|edit| edit.touches_old()).count();
        let new_count = window.iter().filter(|edit| edit.touches_new()).count();

        let lines = window
            .iter()
            .map(|edit| {
                let kind = match (edit.touches_old(), edit.touches_new()) {
                    (true, true) => LineKind::Context,
                    (true, false) => LineKind::Removed,
                    _ => LineKind::Added,
                };
                HunkLine::new(kind, script.line(edit))
            })
            .collect();

        hunks.push(Hunk {
            old_range: LineRange::after(old_seen, old_count),
            new_range: LineRange::after(new_seen, new_count),
            lines,
        });

        position = to;
        old_seen += old_count;
        new_seen += new_count;
    }

    hunks
}
