//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short alias to its original URL.
///
/// # Endpoint
///
/// `GET /{short_url}`
///
/// # Click Tracking
///
/// The click counter is incremented atomically inside the store before the
/// redirect is returned — exactly once per successful resolution, including
/// under concurrent resolutions of the same alias.
///
/// # Errors
///
/// Returns 404 Not Found if the alias is unknown; no state changes.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.link_service.resolve_short_url(&short_url).await?;

    Ok(Redirect::temporary(&long_url))
}
