//! File-backed state store: one file per key under a data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::errors::Result;
use crate::port::StateStore;

/// Stores each key as a file named after the key inside `dir`.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` as the storage root, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open the per-user default data directory.
    pub fn open_default() -> Result<Self> {
        let proj = ProjectDirs::from("com", "smartstudy", "smart-study")
            .ok_or_else(|| io::Error::other("unable to resolve a data directory"))?;
        Self::new(proj.data_dir())
    }

    /// The storage root.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl StateStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_of_unwritten_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        assert_eq!(store.read("study-tasks").unwrap(), None);
    }

    #[test]
    fn write_then_read_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path()).unwrap();
        store.write("study-theme", "dark").unwrap();
        assert_eq!(store.read("study-theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileStore::new(dir.path()).unwrap();
            store.write("study-tasks", "[]").unwrap();
        }
        let store = FileStore::new(dir.path()).unwrap();
        assert_eq!(store.read("study-tasks").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn keys_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path()).unwrap();
        store.write("study-tasks", "[]").unwrap();
        store.write("study-theme", "light").unwrap();
        assert_eq!(store.read("study-tasks").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.read("study-theme").unwrap().as_deref(), Some("light"));
    }
}
