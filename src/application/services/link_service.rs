//! Link management and resolution service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{Link, LinkDraft, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_long_url;

/// Service orchestrating the code generator and the link store.
///
/// Enforces the business invariants (long URL uniqueness, existence checks,
/// the id sentinel) and translates every failure beneath it into the
/// three-kind error taxonomy. No raw backend error crosses this boundary.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates a link for a long URL, or returns the existing one.
    ///
    /// # Deduplication
    ///
    /// If a link for the identical long URL already exists, the existing
    /// record is returned and nothing is inserted. The lookup-then-insert is
    /// not serialized against concurrent creates of the same URL; the narrow
    /// duplicate window is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - `draft.id` is not the new-record sentinel (0)
    /// - the long URL is empty or not a valid http(s) URL
    ///
    /// Returns [`AppError::Internal`] on store failure.
    pub async fn create_link(&self, draft: LinkDraft) -> Result<Link, AppError> {
        if draft.id != 0 {
            return Err(AppError::bad_request(
                "A new link must not carry an id",
                json!({ "id": draft.id }),
            ));
        }

        validate_long_url(&draft.long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing) = self.repository.find_by_long_url(&draft.long_url).await? {
            tracing::debug!(id = existing.id, "long URL already shortened");
            return Ok(existing);
        }

        let short_url = generate_code(&draft.long_url)?;

        let link = self
            .repository
            .create(NewLink {
                long_url: draft.long_url,
                short_url,
            })
            .await?;

        tracing::info!(id = link.id, short_url = %link.short_url, "link created");
        Ok(link)
    }

    /// Retrieves a link by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for non-positive ids.
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on store failure.
    pub async fn get_link(&self, id: i64) -> Result<Link, AppError> {
        if id <= 0 {
            return Err(AppError::bad_request(
                "Link id must be positive",
                json!({ "id": id }),
            ));
        }

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))
    }

    /// Lists all links in insertion order.
    ///
    /// A store failure surfaces as an explicit error; it is never collapsed
    /// into an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failure.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list().await
    }

    /// Replaces the mutable fields of an existing link.
    ///
    /// Overwrites `long_url`, `created_at` and `click_count` with the
    /// caller-supplied values and recomputes the alias from the new long URL.
    /// Full replace, no merge.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - `draft.id` is not positive
    /// - the long URL is empty or not a valid http(s) URL
    /// - `draft.created_at` lies in the future
    /// - `draft.click_count` is negative
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on store failure.
    pub async fn update_link(&self, draft: LinkDraft) -> Result<Link, AppError> {
        if draft.id <= 0 {
            return Err(AppError::bad_request(
                "Link id must be positive",
                json!({ "id": draft.id }),
            ));
        }

        validate_long_url(&draft.long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if draft.created_at.date_naive() > Utc::now().date_naive() {
            return Err(AppError::bad_request(
                "Creation date cannot be in the future",
                json!({ "created_at": draft.created_at }),
            ));
        }

        if draft.click_count < 0 {
            return Err(AppError::bad_request(
                "Click count cannot be negative",
                json!({ "click_count": draft.click_count }),
            ));
        }

        let existing = self
            .repository
            .find_by_id(draft.id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": draft.id })))?;

        let short_url = generate_code(&draft.long_url)?;

        let updated = self
            .repository
            .update(Link {
                id: existing.id,
                long_url: draft.long_url,
                short_url,
                created_at: draft.created_at,
                click_count: draft.click_count,
            })
            .await?;

        tracing::info!(id = updated.id, "link updated");
        Ok(updated)
    }

    /// Deletes a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on store failure.
    pub async fn delete_link(&self, id: i64) -> Result<(), AppError> {
        let link = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))?;

        let deleted = self.repository.delete(link.id).await?;
        if !deleted {
            // Lost a race with a concurrent delete.
            return Err(AppError::not_found("Link not found", json!({ "id": id })));
        }

        tracing::info!(id, "link deleted");
        Ok(())
    }

    /// Resolves a short alias to its long URL, counting the click.
    ///
    /// The counter increment happens atomically inside the store, exactly
    /// once per successful resolution, before the long URL is returned.
    /// An unknown alias changes no state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    /// Returns [`AppError::Internal`] on store failure.
    pub async fn resolve_short_url(&self, short_url: &str) -> Result<String, AppError> {
        match self.repository.increment_clicks(short_url).await? {
            Some(link) => Ok(link.long_url),
            None => Err(AppError::not_found(
                "Short link not found",
                json!({ "short_url": short_url }),
            )),
        }
    }
}
