//! DTOs for the link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request body for `POST /api/v1/links`.
///
/// `id` defaults to 0, the new-record sentinel. Supplying any other value is
/// rejected by the service.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub id: i64,

    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub long_url: String,
}

/// Request body for `PUT /api/v1/links/{id}`.
///
/// Full replace: `long_url`, `created_at` and `click_count` all overwrite
/// the stored values; the alias is recomputed from the new long URL.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(url(message = "Invalid URL format"))]
    pub long_url: String,

    /// Replacement creation date; must not lie in the future.
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub click_count: i64,
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub long_url: String,
    pub short_url: String,
    /// Absolute short link composed from the configured base host.
    pub short_link: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl LinkResponse {
    /// Builds the response, composing the absolute short link from the
    /// configured base host.
    pub fn from_link(link: Link, base_url: &str) -> Self {
        let short_link = format!("{}/{}", base_url.trim_end_matches('/'), link.short_url);

        Self {
            id: link.id,
            long_url: link.long_url,
            short_url: link.short_url,
            short_link,
            created_at: link.created_at,
            click_count: link.click_count,
        }
    }
}
