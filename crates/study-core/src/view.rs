//! Pure derivations over a task snapshot.
//!
//! Nothing here mutates: every function takes an immutable slice of the
//! collection and recomputes its answer from scratch on each call.

use chrono::NaiveDate;

use crate::task::{Subject, Task};

// ─────────────────────────────────────────────────────────────────────────────
// Filter
// ─────────────────────────────────────────────────────────────────────────────

/// Ephemeral subject filter for the task list. Not persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    /// Show every task.
    #[default]
    All,
    /// Show only tasks in this subject.
    Subject(Subject),
}

impl Filter {
    /// Whether `task` passes the filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Subject(subject) => task.subject == subject,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Derivations
// ─────────────────────────────────────────────────────────────────────────────

/// Aggregate progress counts over a snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of tasks.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// `total - completed`.
    pub pending: usize,
    /// `round(completed / total * 100)`, `0` for an empty collection.
    pub progress_percent: u8,
}

/// The subsequence of `tasks` passing `filter`, in original order.
#[must_use]
pub fn filtered(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Aggregate counts and rounded progress for a snapshot.
#[must_use]
pub fn stats(tasks: &[Task]) -> Stats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();
    let progress_percent = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    };
    Stats {
        total,
        completed,
        pending: total - completed,
        progress_percent,
    }
}

/// Whether a deadline has passed as of `today`.
///
/// `None` is never overdue; otherwise true iff the deadline's calendar date
/// is strictly before `today` (a same-day deadline is not yet overdue).
/// Completed-agnostic: callers gate any "overdue" display on
/// `!task.completed` as well.
#[must_use]
pub fn is_overdue(deadline: Option<NaiveDate>, today: NaiveDate) -> bool {
    deadline.is_some_and(|date| date < today)
}

impl Task {
    /// Per-task form of [`is_overdue`]. Equally completed-agnostic.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        is_overdue(self.deadline, today)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
