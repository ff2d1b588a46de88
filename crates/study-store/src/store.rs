//! The authoritative task store.
//!
//! Every mutation validates, applies, then persists the full collection
//! through the injected [`StateStore`] port before returning. Readers get
//! immutable snapshots; derivations are recomputed from the snapshot on
//! every call. Operations run to completion; there is no suspension and
//! no second writer path.

use tracing::{debug, warn};

use study_core::draft::TaskDraft;
use study_core::session::EditingSession;
use study_core::task::{Task, TaskId};
use study_core::theme::Theme;
use study_core::view::{self, Filter, Stats};

use crate::port::{StateStore, TASKS_KEY, THEME_KEY};

/// Single in-process state container: the task collection plus the
/// ephemeral filter and editing-session selections, persisted through `S`.
///
/// INVARIANT: `next_id` only ever grows, so ids are unique for the lifetime
/// of the collection and never reused after deletion.
pub struct TaskStore<S> {
    backend: S,
    tasks: Vec<Task>,
    next_id: u64,
    filter: Filter,
    session: EditingSession,
    theme: Theme,
}

impl<S: StateStore> TaskStore<S> {
    /// Initialize from whatever the backend holds.
    ///
    /// A missing key, an unreadable backend, or a stored value that fails
    /// to parse all start the collection empty. Corrupt data is treated as
    /// no data, never a startup failure.
    pub fn open(backend: S) -> Self {
        let tasks = load_tasks(&backend);
        let theme = load_theme(&backend);
        let next_id = tasks.iter().map(|task| task.id.0).max().map_or(1, |max| max + 1);
        debug!(count = tasks.len(), next_id, "task store opened");
        Self {
            backend,
            tasks,
            next_id,
            filter: Filter::All,
            session: EditingSession::Idle,
            theme,
        }
    }

    // ─── Mutations ───────────────────────────────────────────────────────────

    /// Prepend a new task built from `draft`, with a fresh id and
    /// `completed = false`.
    ///
    /// A draft whose title is empty after trimming is silently ignored so
    /// the caller's form state stays put for correction.
    pub fn create(&mut self, draft: TaskDraft) {
        if !draft.has_title() {
            return;
        }
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.insert(
            0,
            Task {
                id,
                title: draft.title,
                subject: draft.subject,
                deadline: draft.deadline,
                priority: draft.priority,
                completed: false,
            },
        );
        debug!(%id, "task created");
        self.persist_tasks();
    }

    /// Replace every field of the task `id` except `id` itself and
    /// `completed`, which editing never touches.
    ///
    /// No-op when `id` is absent or the draft's title is empty.
    pub fn update(&mut self, id: TaskId, draft: TaskDraft) {
        if !draft.has_title() {
            return;
        }
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return;
        };
        task.title = draft.title;
        task.subject = draft.subject;
        task.deadline = draft.deadline;
        task.priority = draft.priority;
        debug!(%id, "task updated");
        self.persist_tasks();
    }

    /// Flip the `completed` flag of task `id`. No-op when absent.
    pub fn toggle_completion(&mut self, id: TaskId) {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return;
        };
        task.completed = !task.completed;
        debug!(%id, completed = task.completed, "task toggled");
        self.persist_tasks();
    }

    /// Remove task `id`. No-op when absent. Deleting the task under an
    /// active editing session clears the session.
    pub fn delete(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return;
        }
        if self.session.is_editing(id) {
            self.session.clear();
        }
        debug!(%id, "task deleted");
        self.persist_tasks();
    }

    /// Submit the form: while editing, update the targeted task and return
    /// to idle; otherwise create. An empty title is ignored either way and
    /// leaves the session untouched.
    pub fn submit(&mut self, draft: TaskDraft) {
        if !draft.has_title() {
            return;
        }
        match self.session {
            EditingSession::Editing(id) => {
                self.update(id, draft);
                self.session.clear();
            }
            EditingSession::Idle => self.create(draft),
        }
    }

    /// Target the editing session at an existing task. Unknown ids are
    /// ignored.
    pub fn start_editing(&mut self, id: TaskId) {
        if self.tasks.iter().any(|task| task.id == id) {
            self.session.start(id);
        }
    }

    /// Drop the editing session without touching the collection.
    pub fn cancel_editing(&mut self) {
        self.session.clear();
    }

    /// Select which subjects the filtered view shows.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Set and persist the appearance preference.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(error) = self.backend.write(THEME_KEY, theme.as_str()) {
            warn!(%error, "failed to persist theme preference");
        }
    }

    // ─── Reads ───────────────────────────────────────────────────────────────

    /// Snapshot of the full collection, most recently created first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The task with this id, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Current subject filter.
    #[must_use]
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Current editing session.
    #[must_use]
    pub fn session(&self) -> EditingSession {
        self.session
    }

    /// Current appearance preference.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Aggregate counts over the full (unfiltered) collection.
    #[must_use]
    pub fn stats(&self) -> Stats {
        view::stats(&self.tasks)
    }

    /// The collection as seen through the current filter, original order.
    #[must_use]
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        view::filtered(&self.tasks, self.filter)
    }

    /// Borrow the backend, mainly so tests can inspect persisted state.
    #[must_use]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    // ─── Persistence ─────────────────────────────────────────────────────────

    fn persist_tasks(&mut self) {
        let encoded = match serde_json::to_string_pretty(&self.tasks) {
            Ok(encoded) => encoded,
            Err(error) => {
                warn!(%error, "failed to encode tasks, skipping persist");
                return;
            }
        };
        if let Err(error) = self.backend.write(TASKS_KEY, &encoded) {
            warn!(%error, "failed to persist tasks");
        }
    }
}

fn load_tasks<S: StateStore>(backend: &S) -> Vec<Task> {
    match backend.read(TASKS_KEY) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(error) => {
                warn!(%error, "stored tasks failed to parse, starting empty");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(error) => {
            warn!(%error, "could not read stored tasks, starting empty");
            Vec::new()
        }
    }
}

fn load_theme<S: StateStore>(backend: &S) -> Theme {
    match backend.read(THEME_KEY) {
        Ok(Some(raw)) => Theme::from_stored(&raw),
        Ok(None) => Theme::default(),
        Err(error) => {
            warn!(%error, "could not read theme preference, using default");
            Theme::default()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
