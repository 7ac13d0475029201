//! In-process link store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link store kept in process memory.
///
/// Used when no database is configured and by the HTTP tests. Ids start at 1
/// and come from an atomic counter, so concurrent writers never share one.
/// Contents are lost on restart.
pub struct MemoryLinkRepository {
    next_id: AtomicI64,
    links: RwLock<BTreeMap<i64, Link>>,
}

impl MemoryLinkRepository {
    /// Creates an empty store whose first allocated id is 1.
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self {
            next_id: AtomicI64::new(1),
            links: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn allocate_id(&self) -> Result<i64, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        if id < 1 {
            return Err(AppError::storage("id space exhausted"));
        }
        Ok(id)
    }

    async fn insert(&self, link: &Link) -> Result<(), AppError> {
        let mut links = self.links.write().await;
        if links.contains_key(&link.id) {
            return Err(AppError::storage(format!(
                "id {} is already stored",
                link.id
            )));
        }
        links.insert(link.id, link.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        Ok(self.links.read().await.get(&id).cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.read().await.len() as i64)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
