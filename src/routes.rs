//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /{short_url}` - Short link redirect (public)
//! - `/api/v1/*`        - JSON link management API
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{short_url}", get(redirect_handler))
        .nest("/api/v1", api::routes::link_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
