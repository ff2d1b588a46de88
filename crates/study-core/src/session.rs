//! Editing-session state: which task, if any, the form is editing.

use crate::task::TaskId;

/// At most one task may be under edit at a time.
///
/// Transitions:
/// - `Idle → Editing(id)` when editing starts on an existing task
/// - `Editing(id) → Idle` on submit, explicit cancel, or deletion of the
///   targeted task
///
/// Submitting while `Idle` creates a task and stays `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditingSession {
    /// No task targeted; the form shows defaults.
    #[default]
    Idle,
    /// The form is pre-populated from this task.
    Editing(TaskId),
}

impl EditingSession {
    /// Target editing at `id`.
    pub fn start(&mut self, id: TaskId) {
        *self = EditingSession::Editing(id);
    }

    /// Return to idle.
    pub fn clear(&mut self) {
        *self = EditingSession::Idle;
    }

    /// The targeted task id, if editing.
    #[must_use]
    pub fn target(self) -> Option<TaskId> {
        match self {
            EditingSession::Idle => None,
            EditingSession::Editing(id) => Some(id),
        }
    }

    /// Whether this session targets `id`.
    #[must_use]
    pub fn is_editing(self, id: TaskId) -> bool {
        self == EditingSession::Editing(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn defaults_to_idle() {
        assert_matches!(EditingSession::default(), EditingSession::Idle);
    }

    #[test]
    fn start_targets_the_task() {
        let mut session = EditingSession::default();
        session.start(TaskId(4));
        assert_matches!(session, EditingSession::Editing(TaskId(4)));
        assert_eq!(session.target(), Some(TaskId(4)));
        assert!(session.is_editing(TaskId(4)));
        assert!(!session.is_editing(TaskId(5)));
    }

    #[test]
    fn clear_returns_to_idle() {
        let mut session = EditingSession::Editing(TaskId(4));
        session.clear();
        assert_matches!(session, EditingSession::Idle);
        assert_eq!(session.target(), None);
    }

    #[test]
    fn restart_retargets() {
        let mut session = EditingSession::Editing(TaskId(1));
        session.start(TaskId(2));
        assert_eq!(session.target(), Some(TaskId(2)));
    }
}
