//! Link creation and lookup service.

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::domain::validation::UrlValidator;
use crate::error::AppError;
use crate::utils::id_codec;

/// Service for creating and resolving short links.
///
/// Holds no mutable state of its own: id allocation and concurrency control
/// belong to the repository, reachability to the validator.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    validator: Arc<dyn UrlValidator>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>, validator: Arc<dyn UrlValidator>) -> Self {
        Self {
            link_repository,
            validator,
        }
    }

    /// Validates `path`, stores it under a fresh id and returns the short id.
    ///
    /// # Flow
    ///
    /// 1. One outbound fetch of `path` through the validator
    /// 2. Allocate an id from the store
    /// 3. Persist `{id, path, created_at = now}`
    /// 4. Return the base-36 form of the id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnreachableUrl`] if validation fails; nothing is
    /// written in that case.
    ///
    /// Returns [`AppError::Storage`] if allocation or the write fails.
    pub async fn create(&self, path: &str) -> Result<String, AppError> {
        self.validator
            .validate(path)
            .await
            .map_err(|reason| AppError::unreachable(path, reason))?;

        self.store(path).await
    }

    /// Stores `path` under a fresh id without the reachability check.
    ///
    /// Used by the admin CLI's `--skip-validation` flag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if allocation or the write fails.
    pub async fn create_unchecked(&self, path: &str) -> Result<String, AppError> {
        self.store(path).await
    }

    /// Looks up a link by numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has that id.
    /// Returns [`AppError::Storage`] on read failure.
    pub async fn find(&self, id: i64) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                debug!("No link stored under id {}", id);
                AppError::not_found(id)
            })
    }

    /// Builds the public short URL for a host and short id.
    pub fn short_url(&self, host: &str, short_id: &str) -> String {
        format!("http://{}/{}", host, short_id)
    }

    async fn store(&self, path: &str) -> Result<String, AppError> {
        info!("Generating a new short link for: {}", path);

        let id = self.link_repository.allocate_id().await?;
        let link = Link::new(id, path.to_string(), Utc::now());
        self.link_repository.insert(&link).await?;

        Ok(id_codec::encode(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::domain::validation::{FetchFailure, MockUrlValidator};

    fn accepting_validator() -> MockUrlValidator {
        let mut validator = MockUrlValidator::new();
        validator.expect_validate().returning(|_| Ok(()));
        validator
    }

    fn rejecting_validator() -> MockUrlValidator {
        let mut validator = MockUrlValidator::new();
        validator
            .expect_validate()
            .returning(|_| Err(FetchFailure::Transport("connection refused".to_string())));
        validator
    }

    #[tokio::test]
    async fn test_create_returns_encoded_id() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_allocate_id()
            .times(1)
            .returning(|| Ok(46_656));

        mock_link_repo
            .expect_insert()
            .withf(|link| link.id == 46_656 && link.path == "https://example.com")
            .times(1)
            .returning(|_| Ok(()));

        let service = LinkService::new(Arc::new(mock_link_repo), Arc::new(accepting_validator()));

        let sid = service.create("https://example.com").await.unwrap();
        assert_eq!(sid, "1000");
    }

    #[tokio::test]
    async fn test_create_validates_the_given_url() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_allocate_id().returning(|| Ok(1));
        mock_link_repo.expect_insert().returning(|_| Ok(()));

        let mut validator = MockUrlValidator::new();
        validator
            .expect_validate()
            .withf(|url| url == "https://rust-lang.org")
            .times(1)
            .returning(|_| Ok(()));

        let service = LinkService::new(Arc::new(mock_link_repo), Arc::new(validator));

        assert!(service.create("https://rust-lang.org").await.is_ok());
    }

    #[tokio::test]
    async fn test_create_rejected_url_is_not_persisted() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_allocate_id().times(0);
        mock_link_repo.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo), Arc::new(rejecting_validator()));

        let result = service.create("http://unreachable.invalid").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::UnreachableUrl { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_storage_failure() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_allocate_id().returning(|| Ok(3));
        mock_link_repo
            .expect_insert()
            .returning(|_| Err(AppError::storage("disk full")));

        let service = LinkService::new(Arc::new(mock_link_repo), Arc::new(accepting_validator()));

        let result = service.create("https://example.com").await;

        assert!(matches!(result.unwrap_err(), AppError::Storage { .. }));
    }

    #[tokio::test]
    async fn test_create_allocation_failure_skips_write() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_allocate_id()
            .returning(|| Err(AppError::storage("sequence unavailable")));
        mock_link_repo.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo), Arc::new(accepting_validator()));

        assert!(matches!(
            service.create("https://example.com").await.unwrap_err(),
            AppError::Storage { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_unchecked_skips_validator() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_allocate_id().returning(|| Ok(10));
        mock_link_repo.expect_insert().times(1).returning(|_| Ok(()));

        let mut validator = MockUrlValidator::new();
        validator.expect_validate().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo), Arc::new(validator));

        assert_eq!(
            service.create_unchecked("https://example.com").await.unwrap(),
            "a"
        );
    }

    #[tokio::test]
    async fn test_find_existing() {
        let mut mock_link_repo = MockLinkRepository::new();
        let link = Link::new(5, "https://example.com".to_string(), Utc::now());
        let expected = link.clone();
        mock_link_repo
            .expect_find_by_id()
            .withf(|id| *id == 5)
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        let service = LinkService::new(Arc::new(mock_link_repo), Arc::new(accepting_validator()));

        assert_eq!(service.find(5).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_find_missing() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_link_repo), Arc::new(accepting_validator()));

        assert!(matches!(
            service.find(99).await.unwrap_err(),
            AppError::NotFound { id: 99 }
        ));
    }

    #[tokio::test]
    async fn test_find_storage_failure_is_not_not_found() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_find_by_id()
            .returning(|_| Err(AppError::storage("connection reset")));

        let service = LinkService::new(Arc::new(mock_link_repo), Arc::new(accepting_validator()));

        assert!(matches!(
            service.find(1).await.unwrap_err(),
            AppError::Storage { .. }
        ));
    }

    #[test]
    fn test_short_url() {
        let service = LinkService::new(
            Arc::new(MockLinkRepository::new()),
            Arc::new(MockUrlValidator::new()),
        );

        assert_eq!(service.short_url("short.ly", "1"), "http://short.ly/1");
        assert_eq!(
            service.short_url("localhost:3000", "zz"),
            "http://localhost:3000/zz"
        );
    }
}
