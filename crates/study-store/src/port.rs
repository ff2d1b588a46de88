//! The durable key-value port the store persists through.

use crate::errors::Result;

/// Key holding the serialized task collection.
pub const TASKS_KEY: &str = "study-tasks";

/// Key holding the appearance preference.
pub const THEME_KEY: &str = "study-theme";

/// Durable string-keyed storage.
///
/// Values are raw strings: the task collection is stored as a JSON array,
/// the theme as a bare `"dark"`/`"light"`. Implementations only need to get
/// and put whole values; there is no partial update.
pub trait StateStore {
    /// Read the value under `key`, `None` when the key has never been
    /// written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Durably replace the value under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}
