//! File-backed storage backend.

use std::fs;
use std::path::{Path, PathBuf};

use super::Storage;
use crate::error::Result;

/// File-backed key-value storage.
///
/// Each key maps to one JSON file under the base directory. The directory is
/// created on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    /// Creates a storage rooted at the given directory.
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Creates a storage rooted at the platform data directory.
    #[must_use]
    pub fn in_data_dir() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mailpane");
        Self::new(base)
    }

    /// Directory the storage writes into.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
