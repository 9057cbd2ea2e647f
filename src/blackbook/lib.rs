//! # Blackbook Architecture
//!
//! Blackbook is a **UI-agnostic personal-information library**: an address
//! book of contacts and a companion set of text notes. The CLI is just one
//! client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, cli/, wired by main.rs)                │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One method per user-level operation                      │
//! │  - Loads the vault on open, saves after every mutation      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain Model (field, entity, record, note, collection,     │
//! │  book, notes)                                               │
//! │  - Validated fields, tag semantics, generic search/sort     │
//! │  - Pure: no I/O assumptions whatsoever                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait over the whole-state Vault      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Validate Then Assign
//!
//! Every scalar lives in a validated [`field`] wrapper constructed through a
//! fallible constructor. Mutations across the crate validate first and
//! assign only on success, so no operation ever leaves a record or note
//! half-applied.
//!
//! ## Generic Search
//!
//! The address book and the notes container share one search/sort engine
//! ([`collection::Collection`]); each entity type only declares its match
//! fields and sort keys ([`collection::Searchable`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`book`]: The contacts collection and the upcoming-birthday computation
//! - [`collection`]: The generic search/sort/filter contract
//! - [`entity`]: Shared tag behavior for records and notes
//! - [`error`]: Error types
//! - [`field`]: Validated scalar wrappers
//! - [`note`] / [`notes`]: A single note and the notes collection
//! - [`record`]: One contact's field set and mutators
//! - [`store`]: Storage abstraction and implementations

pub mod api;
pub mod book;
pub mod collection;
pub mod entity;
pub mod error;
pub mod field;
pub mod note;
pub mod notes;
pub mod record;
pub mod store;
