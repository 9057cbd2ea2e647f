use super::{DataStore, Vault};
use crate::error::Result;

/// In-memory storage for testing. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    vault: Option<Vault>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vault> {
        Ok(self.vault.clone().unwrap_or_default())
    }

    fn save(&mut self, vault: &Vault) -> Result<()> {
        self.vault = Some(vault.clone());
        Ok(())
    }
}
