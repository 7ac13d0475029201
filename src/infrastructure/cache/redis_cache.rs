//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache of link id to original URL.
///
/// Shares one multiplexed connection through `ConnectionManager`, which
/// reconnects on its own. All operations are fail-open: errors are logged
/// and reported as misses.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set_path`] is
    ///   called without one; controlled via `CACHE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "shortlink:".to_string(),
        })
    }

    fn build_key(&self, id: i64) -> String {
        format!("{}{}", self.key_prefix, id)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_path(&self, id: i64) -> CacheResult<Option<String>> {
        let key = self.build_key(id);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(path)) => {
                debug!("Cache HIT: {} -> {}", id, path);
                Ok(Some(path))
            }
            Ok(None) => {
                debug!("Cache MISS: {}", id);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", id, e);
                Ok(None)
            }
        }
    }

    async fn set_path(&self, id: i64, path: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let key = self.build_key(id);
        let mut conn = self.client.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        if let Err(e) = conn.set_ex::<_, _, ()>(&key, path, ttl).await {
            warn!("Redis SET error for {}: {}", id, e);
        } else {
            debug!("Cache SET: {} -> {} (TTL: {}s)", id, path, ttl);
        }

        Ok(())
    }
}
