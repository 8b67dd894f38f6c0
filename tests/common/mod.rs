#![allow(dead_code)]

use std::sync::Arc;

use link_shortener::application::services::LinkService;
use link_shortener::infrastructure::persistence::InMemoryLinkRepository;
use link_shortener::state::AppState;

pub const TEST_BASE_URL: &str = "https://sho.rt";

/// Builds an application state over a fresh in-memory store.
pub fn create_test_state() -> AppState {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(repository));

    AppState::new(link_service, TEST_BASE_URL.to_string())
}
