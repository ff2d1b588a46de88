//! The task entity and its closed-set field types.
//!
//! Wire format matches the persisted JSON array element:
//!
//! ```json
//! {
//!   "id": 3,
//!   "title": "Chapter 4 exercises",
//!   "subject": "Math",
//!   "deadline": "2026-09-01",
//!   "priority": "High",
//!   "completed": false
//! }
//! ```
//!
//! `deadline` is the empty string when the task has no deadline.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// TaskId
// ─────────────────────────────────────────────────────────────────────────────

/// Branded identifier for a [`Task`].
///
/// Assigned by the store at creation and immutable afterwards. Unique for
/// the lifetime of a collection; ids are never reused after deletion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Subject
// ─────────────────────────────────────────────────────────────────────────────

/// Study subject a task belongs to. Closed set: a task can never hold a
/// value outside these six variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    /// Mathematics.
    #[default]
    Math,
    /// Natural sciences.
    Science,
    /// History.
    History,
    /// Language study.
    Language,
    /// Programming practice.
    Coding,
    /// Anything that fits nowhere else.
    Other,
}

impl Subject {
    /// All subjects, in display order.
    pub const ALL: [Subject; 6] = [
        Subject::Math,
        Subject::Science,
        Subject::History,
        Subject::Language,
        Subject::Coding,
        Subject::Other,
    ];

    /// Canonical name, as serialized.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::History => "History",
            Subject::Language => "Language",
            Subject::Coding => "Coding",
            Subject::Other => "Other",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a [`Subject`] from its canonical name.
#[derive(Debug, Error)]
#[error("unknown subject: {0:?}")]
pub struct ParseSubjectError(String);

impl FromStr for Subject {
    type Err = ParseSubjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.name() == s)
            .ok_or_else(|| ParseSubjectError(s.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Priority
// ─────────────────────────────────────────────────────────────────────────────

/// Task priority. Closed set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Can slip.
    Low,
    /// The form default.
    #[default]
    Medium,
    /// Do first.
    High,
}

impl Priority {
    /// Canonical name, as serialized.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a [`Priority`] from its canonical name.
#[derive(Debug, Error)]
#[error("unknown priority: {0:?}")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            other => Err(ParsePriorityError(other.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Task
// ─────────────────────────────────────────────────────────────────────────────

/// A single trackable study item.
///
/// INVARIANT: `title` is never empty (after trimming) in a task accepted by
/// the store; `id` is assigned once and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned at creation.
    pub id: TaskId,
    /// What needs to be done.
    pub title: String,
    /// Subject the task belongs to.
    pub subject: Subject,
    /// Optional due date. `None` means "no deadline".
    #[serde(with = "deadline_fmt", default)]
    pub deadline: Option<NaiveDate>,
    /// Task priority.
    pub priority: Priority,
    /// Whether the task is done.
    pub completed: bool,
}

/// Encodes `Option<NaiveDate>` as `"YYYY-MM-DD"`, with the empty string
/// standing in for `None`.
mod deadline_fmt {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.collect_str(&date.format(FORMAT)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&raw, FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Task {
        Task {
            id: TaskId(7),
            title: "Chapter 4 exercises".into(),
            subject: Subject::Math,
            deadline: NaiveDate::from_ymd_opt(2026, 9, 1),
            priority: Priority::High,
            completed: false,
        }
    }

    #[test]
    fn wire_shape_matches_persisted_layout() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "title": "Chapter 4 exercises",
                "subject": "Math",
                "deadline": "2026-09-01",
                "priority": "High",
                "completed": false
            })
        );
    }

    #[test]
    fn deadline_none_serializes_as_empty_string() {
        let mut task = sample();
        task.deadline = None;
        let value = serde_json::to_value(task).unwrap();
        assert_eq!(value["deadline"], "");
    }

    #[test]
    fn empty_deadline_string_deserializes_as_none() {
        let task: Task = serde_json::from_value(json!({
            "id": 1,
            "title": "x",
            "subject": "Other",
            "deadline": "",
            "priority": "Low",
            "completed": true
        }))
        .unwrap();
        assert_eq!(task.deadline, None);
        assert!(task.completed);
    }

    #[test]
    fn missing_deadline_field_deserializes_as_none() {
        let task: Task = serde_json::from_value(json!({
            "id": 1,
            "title": "x",
            "subject": "Science",
            "priority": "Medium",
            "completed": false
        }))
        .unwrap();
        assert_eq!(task.deadline, None);
    }

    #[test]
    fn serde_roundtrip_is_field_for_field() {
        let task = sample();
        let encoded = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&encoded).unwrap();
        assert_eq!(task, back);
    }

    #[test]
    fn out_of_range_subject_is_rejected() {
        let result = serde_json::from_value::<Task>(json!({
            "id": 1,
            "title": "x",
            "subject": "Astrology",
            "deadline": "",
            "priority": "Low",
            "completed": false
        }));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_deadline_is_rejected() {
        let result = serde_json::from_value::<Task>(json!({
            "id": 1,
            "title": "x",
            "subject": "Math",
            "deadline": "next tuesday",
            "priority": "Low",
            "completed": false
        }));
        assert!(result.is_err());
    }

    #[test]
    fn subject_parse_roundtrip() {
        for subject in Subject::ALL {
            assert_eq!(subject.name().parse::<Subject>().unwrap(), subject);
        }
        assert!("math".parse::<Subject>().is_err());
    }

    #[test]
    fn priority_parse_roundtrip() {
        for priority in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(priority.name().parse::<Priority>().unwrap(), priority);
        }
        assert!("URGENT".parse::<Priority>().is_err());
    }
}
