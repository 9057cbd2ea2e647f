use std::fs;
use std::path::{Path, PathBuf};

use super::{DataStore, Vault};
use crate::error::Result;

/// File-backed store: the whole vault in one JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vault> {
        if !self.path.exists() {
            return Ok(Vault::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&mut self, vault: &Vault) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(vault)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
