//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors raised while setting up a cache backend.
///
/// Operations on a connected cache fail open and never surface an error.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Read-through cache of link id to original URL.
///
/// Links are immutable, so an entry never goes stale; entries only leave the
/// cache by TTL. Implementations fail open: a broken cache degrades to store
/// lookups and never fails a redirect.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached URL for a link id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Production implementations log backend errors and report a miss.
    async fn get_path(&self, id: i64) -> CacheResult<Option<String>>;

    /// Stores the URL for a link id, with an optional TTL in seconds.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers.
    async fn set_path(&self, id: i64, path: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;
}
