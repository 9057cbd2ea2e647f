//! # API Facade
//!
//! The single entry point for all blackbook operations, regardless of the UI
//! driving them. The facade loads the whole vault through a [`DataStore`] on
//! open, exposes one method per user-level operation, and writes the vault
//! back through the store after every successful mutation.
//!
//! From here inward nothing touches stdout or stderr, assumes a terminal, or
//! exits the process; errors are returned as typed values for the UI layer
//! to translate.
//!
//! Generic over `DataStore`:
//! - production: `BlackbookApi<FileStore>`
//! - testing: `BlackbookApi<InMemoryStore>`

use chrono::NaiveDate;

use crate::book::{AddressBook, UpcomingBirthday};
use crate::collection::{Collection, SortOrder};
use crate::entity::Entity;
use crate::error::{BlackbookError, Result};
use crate::note::Note;
use crate::notes::Notes;
use crate::record::Record;
use crate::store::DataStore;

pub struct BlackbookApi<S: DataStore> {
    store: S,
    contacts: AddressBook,
    notes: Notes,
}

impl<S: DataStore> BlackbookApi<S> {
    /// Load the persisted state (or start empty) and wrap it.
    pub fn open(store: S) -> Result<Self> {
        let vault = store.load()?;
        Ok(Self {
            store,
            contacts: vault.contacts,
            notes: vault.notes,
        })
    }

    pub fn contacts(&self) -> &AddressBook {
        &self.contacts
    }

    pub fn notes(&self) -> &Notes {
        &self.notes
    }

    fn persist(&mut self) -> Result<()> {
        let vault = crate::store::Vault {
            contacts: self.contacts.clone(),
            notes: self.notes.clone(),
            ..Default::default()
        };
        self.store.save(&vault)
    }

    fn contact_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.contacts
            .find_mut(name)
            .ok_or_else(|| BlackbookError::NotFound(format!("contact '{}'", name)))
    }

    // --- Contacts ---

    pub fn add_contact(&mut self, name: &str) -> Result<()> {
        self.contacts.add(Record::new(name)?)?;
        self.persist()
    }

    pub fn remove_contact(&mut self, name: &str) -> Result<()> {
        self.contacts.delete(name)?;
        self.persist()
    }

    pub fn rename_contact(&mut self, old: &str, new: &str) -> Result<()> {
        self.contacts.change_name(old, new)?;
        self.persist()
    }

    pub fn get_contact(&self, name: &str) -> Result<&Record> {
        self.contacts
            .find(name)
            .ok_or_else(|| BlackbookError::NotFound(format!("contact '{}'", name)))
    }

    pub fn add_phone(&mut self, name: &str, number: &str) -> Result<()> {
        self.contact_mut(name)?.add_phone(number)?;
        self.persist()
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<()> {
        self.contact_mut(name)?.edit_phone(old, new)?;
        self.persist()
    }

    pub fn remove_phone(&mut self, name: &str, number: &str) -> Result<()> {
        self.contact_mut(name)?.remove_phone(number);
        self.persist()
    }

    pub fn set_email(&mut self, name: &str, email: &str) -> Result<()> {
        self.contact_mut(name)?.add_email(email)?;
        self.persist()
    }

    pub fn set_address(&mut self, name: &str, address: &str) -> Result<()> {
        self.contact_mut(name)?.add_address(address)?;
        self.persist()
    }

    pub fn set_birthday(&mut self, name: &str, date: &str) -> Result<()> {
        self.contact_mut(name)?.add_birthday(date)?;
        self.persist()
    }

    pub fn tag_contact(&mut self, name: &str, tags: &[String]) -> Result<()> {
        self.contact_mut(name)?.add_tags(tags)?;
        self.persist()
    }

    pub fn untag_contact(&mut self, name: &str, tags: &[String]) -> Result<()> {
        self.contact_mut(name)?.remove_tags(tags);
        self.persist()
    }

    pub fn search_contacts(
        &self,
        query: &str,
        tag: &str,
        sort_key: &str,
        order: SortOrder,
    ) -> Result<Vec<Record>> {
        self.contacts.search(query, tag, sort_key, order)
    }

    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<UpcomingBirthday> {
        self.contacts.get_upcoming_birthdays(reference)
    }

    // --- Notes ---

    pub fn add_note(&mut self, title: &str, content: &str) -> Result<()> {
        self.notes.add_note(title, content)?;
        self.persist()
    }

    pub fn edit_note(&mut self, title: &str, content: &str) -> Result<()> {
        self.notes
            .find_note_mut(title)?
            .ok_or_else(|| BlackbookError::NotFound(format!("note '{}'", title)))?
            .set_content(content)?;
        self.persist()
    }

    /// Returns whether a note was actually removed.
    pub fn remove_note(&mut self, title: &str) -> Result<bool> {
        let removed = self.notes.delete_note(title)?;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    pub fn get_note(&self, title: &str) -> Result<&Note> {
        self.notes
            .find_note(title)?
            .ok_or_else(|| BlackbookError::NotFound(format!("note '{}'", title)))
    }

    pub fn tag_note(&mut self, title: &str, tags: &[String]) -> Result<()> {
        self.notes
            .find_note_mut(title)?
            .ok_or_else(|| BlackbookError::NotFound(format!("note '{}'", title)))?
            .add_tags(tags)?;
        self.persist()
    }

    pub fn untag_note(&mut self, title: &str, tags: &[String]) -> Result<()> {
        self.notes
            .find_note_mut(title)?
            .ok_or_else(|| BlackbookError::NotFound(format!("note '{}'", title)))?
            .remove_tags(tags);
        self.persist()
    }

    pub fn search_notes(
        &self,
        query: &str,
        tag: &str,
        sort_key: &str,
        order: SortOrder,
    ) -> Result<Vec<Note>> {
        self.notes.search(query, tag, sort_key, order)
    }
}
