//! Repository trait for short link storage.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage capability behind the short link service.
///
/// The store owns id allocation: every call to [`allocate_id`](Self::allocate_id)
/// returns a key that has never been handed out before, and keys never
/// decrease. Records are written once and never modified.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Allocates a fresh, never-used id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store cannot allocate.
    async fn allocate_id(&self) -> Result<i64, AppError>;

    /// Persists a link under the id it carries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on write failure, including an attempt
    /// to write an id twice.
    async fn insert(&self, link: &Link) -> Result<(), AppError>;

    /// Finds a link by its numeric id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on read failure.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on read failure.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks that the store is reachable.
    async fn health_check(&self) -> bool;
}
