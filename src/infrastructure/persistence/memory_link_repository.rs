//! In-memory implementation of the link repository.
//!
//! Backs the integration test suite and lets the service run without a
//! database. A single mutex guards the map, so every operation — including
//! the click increment — is serialized at record granularity exactly like
//! the row-level atomicity the SQL backend provides.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Mutex-guarded map of links keyed by id.
pub struct InMemoryLinkRepository {
    links: Mutex<BTreeMap<i64, Link>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<i64, Link>>, AppError> {
        self.links
            .lock()
            .map_err(|_| AppError::internal("Link store mutex poisoned", json!({})))
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let link = Link::new(id, new_link.long_url, new_link.short_url, Utc::now(), 0);

        self.lock()?.insert(id, link.clone());
        Ok(link)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        Ok(self.lock()?.get(&id).cloned())
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .lock()?
            .values()
            .find(|l| l.short_url == short_url)
            .cloned())
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .lock()?
            .values()
            .find(|l| l.long_url == long_url)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        // BTreeMap iterates in key order, which is insertion order here.
        Ok(self.lock()?.values().cloned().collect())
    }

    async fn update(&self, link: Link) -> Result<Link, AppError> {
        let mut links = self.lock()?;

        if !links.contains_key(&link.id) {
            return Err(AppError::not_found(
                "Link not found",
                json!({ "id": link.id }),
            ));
        }

        links.insert(link.id, link.clone());
        Ok(link)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock()?.remove(&id).is_some())
    }

    async fn increment_clicks(&self, short_url: &str) -> Result<Option<Link>, AppError> {
        let mut links = self.lock()?;

        let link = links.values_mut().find(|l| l.short_url == short_url);

        Ok(link.map(|l| {
            l.click_count += 1;
            l.clone()
        }))
    }
}
