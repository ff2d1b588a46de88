//! # study-core
//!
//! Foundation types and pure derivations for the Smart Study task tracker.
//!
//! This crate provides the shared vocabulary the store and any presentation
//! layer depend on:
//!
//! - **Tasks**: [`task::Task`] with the branded [`task::TaskId`] newtype and
//!   the [`task::Subject`] / [`task::Priority`] closed-set enums
//! - **Drafts**: [`draft::TaskDraft`] — in-progress field values for a task
//!   being created or edited, with lenient boundary parsing
//! - **Editing session**: [`session::EditingSession`] tagged value
//!   (`Idle | Editing(id)`)
//! - **Views**: [`view::filtered`], [`view::stats`], [`view::is_overdue`]
//!   pure derivations over a task snapshot, plus [`view::Filter`]
//! - **Theme**: [`theme::Theme`] appearance preference
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by `study-store`; contains no I/O and no
//! mutable state of its own.

#![deny(unsafe_code)]

pub mod draft;
pub mod session;
pub mod task;
pub mod theme;
pub mod view;

pub use draft::TaskDraft;
pub use session::EditingSession;
pub use task::{Priority, Subject, Task, TaskId};
pub use theme::Theme;
pub use view::{Filter, Stats};
