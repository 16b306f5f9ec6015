//! Myers' shortest edit script over line sequences
//!
//! Lines are hashed once up front so that the inner loop compares a pair of
//! `u64`s and only falls back to the full text when the hashes agree. The
//! common prefix and suffix are matched before the search starts, and the
//! search itself runs on the remaining middle window.
//!
//! ## Tie-breaking
//!
//! Among the minimal scripts the one returned is fixed: prefix and suffix
//! are maximal, and inside the window a deletion is preferred over an
//! insertion unless the insertion reaches at least as far along its
//! diagonal. The effect is that every gap lists its deletions before its
//! insertions.

use crate::artifacts::core::error::{PatchError, Side};
use crate::artifacts::diff::line::Line;
use derive_new::new;
use std::hash::{DefaultHasher, Hash, Hasher};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Equal { old_index: usize, new_index: usize },
    Delete { old_index: usize },
    Insert { new_index: usize },
}

impl Edit {
    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }

    /// Whether this edit accounts for one line of the old sequence
    pub fn touches_old(&self) -> bool {
        !matches!(self, Edit::Insert { .. })
    }

    /// Whether this edit accounts for one line of the new sequence
    pub fn touches_new(&self) -> bool {
        !matches!(self, Edit::Delete { .. })
    }
}

/// Ordered edits covering every line of both inputs exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript<'d> {
    old: &'d [Line],
    new: &'d [Line],
    edits: Vec<Edit>,
}

impl<'d> EditScript<'d> {
    pub(crate) fn new(old: &'d [Line], new: &'d [Line], edits: Vec<Edit>) -> Self {
        EditScript { old, new, edits }
    }

    pub fn old(&self) -> &'d [Line] {
        self.old
    }

    pub fn new_lines(&self) -> &'d [Line] {
        self.new
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Number of insertions plus deletions
    pub fn distance(&self) -> usize {
        self.edits.iter().filter(|edit| !edit.is_equal()).count()
    }

    pub fn is_unchanged(&self) -> bool {
        self.edits.iter().all(Edit::is_equal)
    }

    /// The line an edit refers to; equal lines are taken from the old side.
    pub fn line(&self, edit: &Edit) -> &'d Line {
        match *edit {
            Edit::Equal { old_index, .. } | Edit::Delete { old_index } => &self.old[old_index],
            Edit::Insert { new_index } => &self.new[new_index],
        }
    }

    /// Rebuilds the new sequence by walking the script against the old one.
    pub fn replay(&self) -> Vec<&'d Line> {
        self.edits
            .iter()
            .filter(|edit| edit.touches_new())
            .map(|edit| self.line(edit))
            .collect()
    }
}

impl AsRef<[Edit]> for EditScript<'_> {
    fn as_ref(&self) -> &[Edit] {
        &self.edits
    }
}

/// Ceiling on the number of search steps, `None` meaning unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkBudget {
    limit: Option<u64>,
}

impl WorkBudget {
    pub fn unlimited() -> Self {
        WorkBudget { limit: None }
    }

    pub fn limited(limit: u64) -> Self {
        WorkBudget { limit: Some(limit) }
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }
}

/// Caller-imposed resource ceilings for a single diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct DiffLimits {
    /// Maximum number of lines accepted on either side
    max_lines: Option<usize>,
    /// Maximum number of search steps before giving up
    max_work: Option<u64>,
}

impl DiffLimits {
    pub fn max_lines(&self) -> Option<usize> {
        self.max_lines
    }

    pub fn max_work(&self) -> Option<u64> {
        self.max_work
    }

    pub fn work_budget(&self) -> WorkBudget {
        WorkBudget {
            limit: self.max_work,
        }
    }

    fn check_input(&self, old: &[Line], new: &[Line]) -> Result<(), PatchError> {
        let Some(limit) = self.max_lines else {
            return Ok(());
        };

        for (side, lines) in [(Side::Old, old.len()), (Side::New, new.len())] {
            if lines > limit {
                return Err(PatchError::InputTooLarge { side, lines, limit });
            }
        }

        Ok(())
    }
}

/// Running total of search steps, checked against the budget on every charge
#[derive(Debug)]
struct WorkCounter {
    spent: u64,
    budget: WorkBudget,
}

impl WorkCounter {
    fn new(budget: WorkBudget) -> Self {
        WorkCounter { spent: 0, budget }
    }

    fn charge(&mut self) -> Result<(), PatchError> {
        self.spent += 1;
        match self.budget.limit {
            Some(limit) if self.spent > limit => Err(PatchError::EditScriptTooComplex { limit }),
            _ => Ok(()),
        }
    }
}

/// Lines paired with their precomputed hashes
#[derive(Debug)]
struct TokenizedLines<'d> {
    lines: &'d [Line],
    hashes: Vec<u64>,
}

impl<'d> TokenizedLines<'d> {
    fn new(lines: &'d [Line]) -> Self {
        let hashes = lines
            .iter()
            .map(|line| {
                let mut hasher = DefaultHasher::new();
                line.hash(&mut hasher);
                hasher.finish()
            })
            .collect();

        TokenizedLines { lines, hashes }
    }

    fn len(&self) -> usize {
        self.lines.len()
    }

    // hash first, full content only on a hash match
    fn same(&self, i: usize, other: &TokenizedLines<'_>, j: usize) -> bool {
        self.hashes[i] == other.hashes[j] && self.lines[i] == other.lines[j]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Insert,
    Delete,
}

/// Furthest x reached on every diagonal `k` in `-d..=d` after `d` edits
///
/// `None` marks a diagonal that cannot be reached inside the grid.
#[derive(Debug, Clone)]
pub struct Frontier {
    d: isize,
    reach: Vec<Option<usize>>,
}

impl Frontier {
    fn new(d: isize) -> Self {
        Frontier {
            d,
            reach: vec![None; (2 * d + 1) as usize],
        }
    }

    fn get(&self, k: isize) -> Option<usize> {
        if k < -self.d || k > self.d {
            return None;
        }
        self.reach[(k + self.d) as usize]
    }

    fn set(&mut self, k: isize, x: usize) {
        self.reach[(k + self.d) as usize] = Some(x);
    }

    /// Where diagonal `k` starts in the next step, and the edit that gets there
    ///
    /// An insertion moves down from diagonal `k + 1`, a deletion moves right
    /// from diagonal `k - 1`. Moves that would leave the `n` x `m` grid are
    /// not candidates. The insertion wins when it reaches at least as far.
    fn origin(&self, k: isize, n: usize, m: usize) -> Option<(usize, Move)> {
        let down = self
            .get(k + 1)
            .filter(|&x| x as isize - k <= m as isize)
            .map(|x| (x, Move::Insert));
        let right = self
            .get(k - 1)
            .map(|x| x + 1)
            .filter(|&x| x <= n)
            .map(|x| (x, Move::Delete));

        match (down, right) {
            (Some(down), Some(right)) if down.0 >= right.0 => Some(down),
            (_, Some(right)) => Some(right),
            (down, None) => down,
        }
    }
}

pub trait DiffAlgorithm<'d> {
    type Trace;
    type EditPath;

    fn compute_shortest_edit(&self) -> Result<Self::Trace, PatchError>;
    fn backtrack(&self, trace: &Self::Trace) -> Self::EditPath;
    fn diff(&self) -> Result<EditScript<'d>, PatchError>;
}

#[derive(Debug)]
pub struct MyersDiff<'d> {
    old: TokenizedLines<'d>,
    new: TokenizedLines<'d>,
    /// Length of the common prefix, matched before the search
    prefix: usize,
    /// Length of the common suffix, matched before the search
    suffix: usize,
    budget: WorkBudget,
}

impl<'d> MyersDiff<'d> {
    pub fn new(old: &'d [Line], new: &'d [Line]) -> Self {
        Self::with_budget(old, new, WorkBudget::unlimited())
    }

    pub fn with_budget(old: &'d [Line], new: &'d [Line], budget: WorkBudget) -> Self {
        let old = TokenizedLines::new(old);
        let new = TokenizedLines::new(new);

        let prefix = (0..old.len().min(new.len()))
            .take_while(|&i| old.same(i, &new, i))
            .count();
        let suffix = (0..(old.len() - prefix).min(new.len() - prefix))
            .take_while(|&i| old.same(old.len() - 1 - i, &new, new.len() - 1 - i))
            .count();

        MyersDiff {
            old,
            new,
            prefix,
            suffix,
            budget,
        }
    }

    fn old_window(&self) -> usize {
        self.old.len() - self.prefix - self.suffix
    }

    fn new_window(&self) -> usize {
        self.new.len() - self.prefix - self.suffix
    }

    fn same(&self, x: usize, y: usize) -> bool {
        self.old.same(self.prefix + x, &self.new, self.prefix + y)
    }

    fn equal(&self, x: usize, y: usize) -> Edit {
        Edit::Equal {
            old_index: self.prefix + x,
            new_index: self.prefix + y,
        }
    }
}

impl<'d> DiffAlgorithm<'d> for MyersDiff<'d> {
    type Trace = Vec<Frontier>;
    type EditPath = Vec<Edit>;

    fn compute_shortest_edit(&self) -> Result<Self::Trace, PatchError> {
        let (n, m) = (self.old_window(), self.new_window());
        let mut counter = WorkCounter::new(self.budget);
        let mut trace: Vec<Frontier> = Vec::new();

        for d in 0..=(n + m) as isize {
            let mut frontier = Frontier::new(d);

            for k in (-d..=d).step_by(2) {
                counter.charge()?;

                let start = match trace.last() {
                    None => Some(0),
                    Some(previous) => previous.origin(k, n, m).map(|(x, _)| x),
                };
                let Some(mut x) = start else {
                    continue;
                };
                let mut y = (x as isize - k) as usize;

                // snake
                while x < n && y < m && self.same(x, y) {
                    counter.charge()?;
                    x += 1;
                    y += 1;
                }

                frontier.set(k, x);

                if x == n && y == m {
                    trace.push(frontier);
                    debug!(distance = d, work = counter.spent, "shortest edit found");
                    return Ok(trace);
                }
            }

            trace.push(frontier);
        }

        Ok(trace)
    }

    fn backtrack(&self, trace: &Self::Trace) -> Self::EditPath {
        let (n, m) = (self.old_window(), self.new_window());
        let (mut x, mut y) = (n, m);
        let mut path = Vec::new();

        for d in (1..trace.len()).rev() {
            let k = x as isize - y as isize;
            let Some((start_x, step)) = trace[d - 1].origin(k, n, m) else {
                unreachable!("a reached diagonal always has an origin in the previous step");
            };

            while x > start_x {
                x -= 1;
                y -= 1;
                path.push(self.equal(x, y));
            }

            match step {
                Move::Insert => {
                    y -= 1;
                    path.push(Edit::Insert {
                        new_index: self.prefix + y,
                    });
                }
                Move::Delete => {
                    x -= 1;
                    path.push(Edit::Delete {
                        old_index: self.prefix + x,
                    });
                }
            }
        }

        while x > 0 && y > 0 {
            x -= 1;
            y -= 1;
            path.push(self.equal(x, y));
        }

        path.reverse();
        path
    }

    fn diff(&self) -> Result<EditScript<'d>, PatchError> {
        let (n, m) = (self.old_window(), self.new_window());
        debug!(
            prefix = self.prefix,
            suffix = self.suffix,
            old_window = n,
            new_window = m,
            "diffing line sequences"
        );

        let mut edits = Vec::with_capacity(self.old.len() + self.new.len());
        edits.extend((0..self.prefix).map(|i| Edit::Equal {
            old_index: i,
            new_index: i,
        }));

        match (n, m) {
            (0, _) => edits.extend((0..m).map(|j| Edit::Insert {
                new_index: self.prefix + j,
            })),
            (_, 0) => edits.extend((0..n).map(|i| Edit::Delete {
                old_index: self.prefix + i,
            })),
            _ => {
                let trace = self.compute_shortest_edit()?;
                edits.extend(self.backtrack(&trace));
            }
        }

        let (old_tail, new_tail) = (self.prefix + n, self.prefix + m);
        edits.extend((0..self.suffix).map(|i| Edit::Equal {
            old_index: old_tail + i,
            new_index: new_tail + i,
        }));

        Ok(EditScript::new(self.old.lines, self.new.lines, edits))
    }
}

/// Computes a minimal edit script turning `old` into `new`.
///
/// # Examples
///
/// ```
/// use makepatch::artifacts::diff::diff_algorithm::{diff, Edit};
/// use makepatch::artifacts::diff::line::split_lines;
///
/// let old = split_lines("a\nb\nc\n");
/// let new = split_lines("a\nx\nc\n");
/// let script = diff(&old, &new);
/// assert_eq!(script.edits(), &[
///     Edit::Equal { old_index: 0, new_index: 0 },
///     Edit::Delete { old_index: 1 },
///     Edit::Insert { new_index: 1 },
///     Edit::Equal { old_index: 2, new_index: 2 },
/// ]);
/// ```
pub fn diff<'d>(old: &'d [Line], new: &'d [Line]) -> EditScript<'d> {
    match MyersDiff::new(old, new).diff() {
        Ok(script) => script,
        Err(_) => unreachable!("an unlimited work budget is never exhausted"),
    }
}

/// Same as [`diff`], failing fast once a caller-imposed limit is exceeded.
pub fn diff_with_limits<'d>(
    old: &'d [Line],
    new: &'d [Line],
    limits: &DiffLimits,
) -> Result<EditScript<'d>, PatchError> {
    limits.check_input(old, new)?;
    MyersDiff::with_budget(old, new, limits.work_budget()).diff()
}
