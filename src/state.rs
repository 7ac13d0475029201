//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::cache::{CacheService, NullCache};

/// Default upper bound on a `PUT` body, in bytes.
pub const DEFAULT_MAX_URL_BYTES: usize = 8 * 1024;

/// State owned by the router and cloned into each request.
///
/// Built once at startup from explicitly constructed collaborators; there is
/// no global registration.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub cache: Arc<dyn CacheService>,
    pub max_url_bytes: usize,
}

impl AppState {
    /// Creates state with caching disabled and the default body limit.
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self {
            link_service,
            cache: Arc::new(NullCache::new()),
            max_url_bytes: DEFAULT_MAX_URL_BYTES,
        }
    }

    /// Replaces the redirect cache.
    pub fn with_cache(mut self, cache: Arc<dyn CacheService>) -> Self {
        self.cache = cache;
        self
    }

    /// Replaces the `PUT` body limit.
    pub fn with_max_url_bytes(mut self, max_url_bytes: usize) -> Self {
        self.max_url_bytes = max_url_bytes;
        self
    }
}
