//! The notes container: an insertion-ordered sequence of [`Note`]s.
//!
//! Titles are unique at insertion time, mirroring the address book's
//! name-uniqueness, so title lookups are unambiguous.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::error::{BlackbookError, Result};
use crate::note::Note;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notes {
    notes: Vec<Note>,
}

impl Notes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Construct and append a note. A title already in use is rejected with
    /// `DuplicateKey`.
    pub fn add_note(&mut self, title: &str, content: &str) -> Result<()> {
        let note = Note::new(title, content)?;
        if self.notes.iter().any(|n| n.title().value() == title) {
            return Err(BlackbookError::DuplicateKey(format!("note '{}'", title)));
        }
        self.notes.push(note);
        Ok(())
    }

    /// First exact-title match. An empty title is a validation error; an
    /// unknown title is simply `None`.
    pub fn find_note(&self, title: &str) -> Result<Option<&Note>> {
        if title.is_empty() {
            return Err(BlackbookError::Validation(
                "The note title should not be empty.".to_string(),
            ));
        }
        Ok(self.notes.iter().find(|n| n.title().value() == title))
    }

    pub fn find_note_mut(&mut self, title: &str) -> Result<Option<&mut Note>> {
        if title.is_empty() {
            return Err(BlackbookError::Validation(
                "The note title should not be empty.".to_string(),
            ));
        }
        Ok(self.notes.iter_mut().find(|n| n.title().value() == title))
    }

    /// Remove the first exact-title match. Absence is an outcome, not an
    /// error: returns whether a note was removed.
    pub fn delete_note(&mut self, title: &str) -> Result<bool> {
        if title.is_empty() {
            return Err(BlackbookError::Validation(
                "The note title should not be empty.".to_string(),
            ));
        }
        match self.notes.iter().position(|n| n.title().value() == title) {
            Some(position) => {
                self.notes.remove(position);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Collection for Notes {
    type Item = Note;

    fn get_all(&self) -> Vec<&Note> {
        self.notes.iter().collect()
    }
}
