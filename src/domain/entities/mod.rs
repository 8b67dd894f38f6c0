//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation input
//! uses a separate struct (`NewLink`) so the store owns id assignment and
//! timestamps; `LinkDraft` carries caller-supplied fields for the save
//! operations.

pub mod link;

pub use link::{Link, LinkDraft, NewLink};
