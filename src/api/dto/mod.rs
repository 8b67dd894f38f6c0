//! Request and response DTOs for the JSON API.

pub mod link;

pub use link::{CreateLinkRequest, LinkResponse, UpdateLinkRequest};
