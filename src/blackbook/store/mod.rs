//! # Storage Layer
//!
//! The whole state — address book plus notes — is persisted as one
//! [`Vault`]. The [`DataStore`] trait abstracts where it lives:
//!
//! - [`fs::FileStore`]: production, a single pretty-printed JSON file
//! - [`memory::InMemoryStore`]: tests, no persistence
//!
//! The on-disk schema is explicit (field names, string-encoded validated
//! fields, a `schema` version number) rather than a dump of the in-memory
//! layout, so the format stays stable and migratable. A store with no prior
//! data loads as two empty collections.

use serde::{Deserialize, Serialize};

use crate::book::AddressBook;
use crate::error::Result;
use crate::notes::Notes;

pub mod fs;
pub mod memory;

pub const SCHEMA_VERSION: u32 = 1;

/// The full persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vault {
    #[serde(default = "default_schema")]
    pub schema: u32,
    #[serde(default)]
    pub contacts: AddressBook,
    #[serde(default)]
    pub notes: Notes,
}

impl Default for Vault {
    fn default() -> Self {
        Self {
            schema: SCHEMA_VERSION,
            contacts: AddressBook::new(),
            notes: Notes::new(),
        }
    }
}

fn default_schema() -> u32 {
    SCHEMA_VERSION
}

/// Abstract interface for vault storage. One writer, whole-state saves.
pub trait DataStore {
    /// Load the vault, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<Vault>;

    /// Persist the whole vault.
    fn save(&mut self, vault: &Vault) -> Result<()>;
}
