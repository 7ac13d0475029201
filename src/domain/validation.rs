//! Reachability check performed before a URL is stored.

use async_trait::async_trait;

/// Reasons a candidate URL fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchFailure {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("target responded with status {0}")]
    Status(u16),
}

/// Outbound check that a candidate URL can be fetched.
///
/// Implementations perform at most one request per call and never retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::validation::HttpUrlValidator`] - `reqwest`-backed `GET`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlValidator: Send + Sync {
    /// Checks that `url` is fetchable.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchFailure`] describing why the URL was refused.
    async fn validate(&self, url: &str) -> Result<(), FetchFailure>;
}
