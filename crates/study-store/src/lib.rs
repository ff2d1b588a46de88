//! # study-store
//!
//! Authoritative task store for the Smart Study tracker.
//!
//! [`TaskStore`] owns the task collection; every mutation passes through it
//! and is persisted through an injected [`StateStore`] port before the call
//! returns. Two port implementations ship with the crate:
//!
//! - [`FileStore`] — one file per key under a local data directory
//! - [`MemoryStore`] — `HashMap`-backed fake for tests and ephemeral use
//!
//! Loading is forgiving: a missing key, an unreadable backend, or a stored
//! value that fails to parse all initialize the store empty rather than
//! failing startup.
//!
//! ## Crate Position
//!
//! Depends on `study-core` for the task vocabulary and the pure view
//! functions. Presentation layers consume this crate's API and never touch
//! the collection directly.

#![deny(unsafe_code)]

pub mod errors;
pub mod file;
pub mod memory;
pub mod port;
pub mod store;

pub use errors::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use port::{StateStore, TASKS_KEY, THEME_KEY};
pub use store::TaskStore;
