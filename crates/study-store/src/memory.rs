//! In-memory state store, the test double for the persistence port.

use std::collections::HashMap;

use crate::errors::Result;
use crate::port::StateStore;

/// `HashMap`-backed [`StateStore`]. Nothing survives the process; intended
/// for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, as if a previous session had written it.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        let _ = store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let _ = self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
