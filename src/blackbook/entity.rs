//! Shared tag behavior for records and notes.
//!
//! Both entity types own an insertion-ordered set of [`Tag`] values, unique
//! by tag value. The trait requires only the storage accessors; the tag
//! operations themselves are provided once here so the two entity types
//! cannot drift apart.

use crate::error::Result;
use crate::field::Tag;

pub trait Entity {
    fn tags(&self) -> &[Tag];

    fn tags_mut(&mut self) -> &mut Vec<Tag>;

    /// Attach every distinct input value not already present. The whole call
    /// is atomic: all inputs are validated before any tag is appended, so one
    /// bad value leaves the entity untouched. Duplicates inside the input
    /// collapse to one; tags already present are skipped without
    /// re-validation.
    fn add_tags<S: AsRef<str>>(&mut self, tags: &[S]) -> Result<()> {
        let mut fresh: Vec<Tag> = Vec::new();
        for raw in tags {
            let raw = raw.as_ref();
            if self.includes_tag(raw) || fresh.iter().any(|t| t.value() == raw) {
                continue;
            }
            fresh.push(Tag::new(raw)?);
        }
        self.tags_mut().append(&mut fresh);
        Ok(())
    }

    /// Drop every tag whose value appears in the input. Values not present
    /// are silently ignored.
    fn remove_tags<S: AsRef<str>>(&mut self, tags: &[S]) {
        self.tags_mut()
            .retain(|t| !tags.iter().any(|raw| raw.as_ref() == t.value()));
    }

    /// Exact, case-sensitive membership test.
    fn includes_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t.value() == tag)
    }
}
