//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Application state shared across requests.
///
/// Holds no per-request mutable data; the storage pool inside the service's
/// repository is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Base host used to compose absolute short links. Configuration
    /// metadata only — never an input to alias derivation.
    pub base_url: String,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, base_url: String) -> Self {
        Self {
            link_service,
            base_url,
        }
    }
}
