//! In-progress field values for a task being created or edited.

use chrono::NaiveDate;

use crate::task::{Priority, Subject, Task};

/// The draft shape shared by create and update.
///
/// Defaults mirror a freshly cleared form: empty title, Math, no deadline,
/// Medium priority.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Proposed title. Must be non-empty after trimming to be accepted.
    pub title: String,
    /// Proposed subject.
    pub subject: Subject,
    /// Proposed deadline, if any.
    pub deadline: Option<NaiveDate>,
    /// Proposed priority.
    pub priority: Priority,
}

impl TaskDraft {
    /// Build a draft from raw form fields.
    ///
    /// The title is carried as-is (validation happens at the store
    /// boundary). Every other field falls back to its default when
    /// malformed: unknown subjects become [`Subject::Math`], unknown
    /// priorities [`Priority::Medium`], unparseable dates no deadline.
    #[must_use]
    pub fn from_fields(title: &str, subject: &str, deadline: &str, priority: &str) -> Self {
        Self {
            title: title.to_string(),
            subject: subject.parse().unwrap_or_default(),
            deadline: NaiveDate::parse_from_str(deadline, "%Y-%m-%d").ok(),
            priority: priority.parse().unwrap_or_default(),
        }
    }

    /// Whether the draft would pass title validation.
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Pre-populate a draft from an existing task, as when editing starts.
impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            subject: task.subject,
            deadline: task.deadline,
            priority: task.priority,
        }
    }
}
