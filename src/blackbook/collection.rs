//! # Generic Collection Search
//!
//! One search/sort/filter engine shared by the address book and the notes
//! container. The engine itself is entity-agnostic: each entity type
//! declares which string fields a query matches against and which field
//! names it can be sorted by, and [`Collection::search`] does the rest.
//!
//! Matching rules:
//! - a non-empty `tag` requires exact tag membership on the entity
//! - a non-empty `query` matches case-insensitively as a substring of any
//!   declared match field; an empty query accepts everything
//!
//! The sort is stable, so entities with equal sort values keep the order in
//! which [`Collection::get_all`] enumerates them (insertion order). Asking
//! for a field the entity type does not expose fails with
//! [`BlackbookError::InvalidSortKey`], even when nothing matched.

use crate::entity::Entity;
use crate::error::{BlackbookError, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = BlackbookError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(BlackbookError::Validation(format!(
                "Unknown sort order '{}'. Use 'asc' or 'desc'.",
                other
            ))),
        }
    }
}

/// What an entity type contributes to the generic search engine.
pub trait Searchable: Entity {
    /// Field names accepted as a sort key for this entity type.
    const SORT_KEYS: &'static [&'static str];

    /// The string fields a query is matched against.
    fn match_fields(&self) -> Vec<&str>;

    /// The wrapped value of the named sort field. Absent optional fields
    /// sort as the empty string. Only called with a key from `SORT_KEYS`.
    fn sort_field(&self, key: &str) -> &str;
}

pub trait Collection {
    type Item: Searchable + Clone;

    /// All entities in enumeration (insertion) order.
    fn get_all(&self) -> Vec<&Self::Item>;

    /// Filter by query and tag, then stable-sort by the named field.
    /// Returns a freshly built sequence; the collection is never mutated.
    fn search(
        &self,
        query: &str,
        tag: &str,
        sort_key: &str,
        order: SortOrder,
    ) -> Result<Vec<Self::Item>> {
        if !Self::Item::SORT_KEYS.contains(&sort_key) {
            return Err(BlackbookError::InvalidSortKey(sort_key.to_string()));
        }

        let query = query.to_lowercase();
        let mut matched: Vec<(String, &Self::Item)> = Vec::new();
        for entity in self.get_all() {
            if !matches_entity(entity, &query, tag) {
                continue;
            }
            matched.push((entity.sort_field(sort_key).to_string(), entity));
        }

        match order {
            SortOrder::Asc => matched.sort_by(|(a, _), (b, _)| a.cmp(b)),
            SortOrder::Desc => matched.sort_by(|(a, _), (b, _)| b.cmp(a)),
        }

        Ok(matched.into_iter().map(|(_, entity)| entity.clone()).collect())
    }
}

/// `query` must already be lower-cased.
fn matches_entity<T: Searchable>(entity: &T, query: &str, tag: &str) -> bool {
    if !tag.is_empty() && !entity.includes_tag(tag) {
        return false;
    }
    if query.is_empty() {
        return true;
    }
    entity
        .match_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}
