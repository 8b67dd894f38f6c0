//! Handlers for the link management endpoints.
//!
//! Thin adapters only: each handler translates the HTTP request into one
//! Link Service call and maps the returned taxonomy to a status code
//! (success 200, validation 400, not found 404, internal 500).

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde_json::{Value, json};
use validator::Validate;

use crate::api::dto::{CreateLinkRequest, LinkResponse, UpdateLinkRequest};
use crate::domain::entities::LinkDraft;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all links in insertion order.
///
/// # Endpoint
///
/// `GET /api/v1/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(
        links
            .into_iter()
            .map(|link| LinkResponse::from_link(link, &state.base_url))
            .collect(),
    ))
}

/// Retrieves a single link by id.
///
/// # Endpoint
///
/// `GET /api/v1/links/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request for non-positive ids.
/// Returns 404 Not Found if the id does not exist.
pub async fn get_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(id).await?;

    Ok(Json(LinkResponse::from_link(link, &state.base_url)))
}

/// Creates a shortened link for a long URL.
///
/// # Endpoint
///
/// `POST /api/v1/links`
///
/// # Behavior
///
/// Creating the same long URL twice does not insert a second record; the
/// existing link is returned instead.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is invalid or a non-zero id is
/// supplied in the body.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(LinkDraft {
            id: payload.id,
            long_url: payload.long_url,
            created_at: Utc::now(),
            click_count: 0,
        })
        .await?;

    Ok(Json(LinkResponse::from_link(link, &state.base_url)))
}

/// Replaces the mutable fields of an existing link.
///
/// # Endpoint
///
/// `PUT /api/v1/links/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is invalid, the creation date lies in
/// the future, or the click count is negative.
/// Returns 404 Not Found if the id does not exist.
pub async fn update_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .update_link(LinkDraft {
            id,
            long_url: payload.long_url,
            created_at: payload.created_at,
            click_count: payload.click_count,
        })
        .await?;

    Ok(Json(LinkResponse::from_link(link, &state.base_url)))
}

/// Deletes a link by id.
///
/// # Endpoint
///
/// `DELETE /api/v1/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id does not exist.
pub async fn delete_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    state.link_service.delete_link(id).await?;

    Ok(Json(json!({ "message": "Link deleted" })))
}
