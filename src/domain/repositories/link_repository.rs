//! Repository trait for link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for persisted links.
///
/// Polymorphic over the storage backend. Lookups return `Ok(None)` when the
/// record is absent — "not found" is a valid outcome at this layer, not an
/// error. All operations are atomic at single-record granularity.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new link.
    ///
    /// The store assigns the id, stamps `created_at` and starts
    /// `click_count` at 0.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend failure.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend failure.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Finds a link by its short alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend failure.
    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its original long URL.
    ///
    /// Backs the create-time uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend failure.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links in insertion order (id ascending).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend failure.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Replaces the mutable fields of an existing link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `link.id` does not exist.
    /// Returns [`AppError::Internal`] on backend failure.
    async fn update(&self, link: Link) -> Result<Link, AppError>;

    /// Deletes a link by id.
    ///
    /// Returns `Ok(true)` if the link was found and deleted, `Ok(false)` if
    /// it was already absent. Never corrupts state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend failure.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Atomically increments the click counter of the link with this alias.
    ///
    /// The read-modify-write happens inside the store (single-row UPDATE or
    /// equivalent), so concurrent increments of the same alias are never
    /// lost. Returns the updated link, or `None` when the alias is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend failure.
    async fn increment_clicks(&self, short_url: &str) -> Result<Option<Link>, AppError>;
}
