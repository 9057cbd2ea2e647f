//! A single text note: title, content, tags.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::collection::Searchable;
use crate::entity::Entity;
use crate::error::Result;
use crate::field::{Content, Tag, Title};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: Title,
    content: Content,
    #[serde(default)]
    tags: Vec<Tag>,
}

impl Note {
    pub fn new(title: &str, content: &str) -> Result<Self> {
        Ok(Self {
            title: Title::new(title)?,
            content: Content::new(content)?,
            tags: Vec::new(),
        })
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Replace the content wholesale. Validate-then-assign, so a rejected
    /// value leaves the previous content in place. The title has no such
    /// operation; it is fixed at creation.
    pub fn set_content(&mut self, value: &str) -> Result<()> {
        self.content = Content::new(value)?;
        Ok(())
    }
}

impl Entity for Note {
    fn tags(&self) -> &[Tag] {
        &self.tags
    }

    fn tags_mut(&mut self) -> &mut Vec<Tag> {
        &mut self.tags
    }
}

impl Searchable for Note {
    const SORT_KEYS: &'static [&'static str] = &["title", "content"];

    fn match_fields(&self) -> Vec<&str> {
        vec![self.title.value(), self.content.value()]
    }

    fn sort_field(&self, key: &str) -> &str {
        match key {
            "title" => self.title.value(),
            "content" => self.content.value(),
            _ => "",
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags = if self.tags.is_empty() {
            "n/a".to_string()
        } else {
            self.tags
                .iter()
                .map(Tag::value)
                .collect::<Vec<&str>>()
                .join("; ")
        };
        writeln!(f, "Title: {}", self.title)?;
        writeln!(
            f,
            "Content: {}",
            if self.content.is_empty() {
                "n/a"
            } else {
                self.content.value()
            }
        )?;
        write!(f, "Tags: {}", tags)
    }
}
