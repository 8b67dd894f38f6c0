//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with usage metadata.
///
/// Pairs a long URL with its derived short alias. The alias is computed once
/// at creation time and stored, so resolution never recomputes it.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        long_url: String,
        short_url: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Self {
        Self {
            id,
            long_url,
            short_url,
            created_at,
            click_count,
        }
    }
}

/// Input data for creating a new link.
///
/// The store assigns `id`, stamps `created_at` and starts `click_count` at 0.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub long_url: String,
    pub short_url: String,
}

/// Caller-supplied form data for the save operations.
///
/// `id == 0` is the "new record" sentinel: create requires it, update
/// requires a positive id. Update replaces `long_url`, `created_at` and
/// `click_count` wholesale; the alias is recomputed from the new long URL.
#[derive(Debug, Clone)]
pub struct LinkDraft {
    pub id: i64,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}
