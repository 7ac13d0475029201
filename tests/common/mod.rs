#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shortlink::application::services::LinkService;
use shortlink::domain::entities::Link;
use shortlink::domain::repositories::LinkRepository;
use shortlink::domain::validation::{FetchFailure, UrlValidator};
use shortlink::error::AppError;
use shortlink::infrastructure::cache::{CacheResult, CacheService};
use shortlink::infrastructure::persistence::MemoryLinkRepository;
use shortlink::routes::app_router;
use shortlink::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// Validator that accepts every URL and counts the calls it received.
#[derive(Default)]
pub struct AcceptAll {
    pub calls: AtomicUsize,
}

#[async_trait]
impl UrlValidator for AcceptAll {
    async fn validate(&self, _url: &str) -> Result<(), FetchFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Validator that refuses every URL as unreachable.
pub struct RejectAll;

#[async_trait]
impl UrlValidator for RejectAll {
    async fn validate(&self, _url: &str) -> Result<(), FetchFailure> {
        Err(FetchFailure::Transport("connection refused".to_string()))
    }
}

/// In-process cache that remembers every write.
#[derive(Default)]
pub struct MapCache {
    pub entries: Mutex<HashMap<i64, String>>,
}

#[async_trait]
impl CacheService for MapCache {
    async fn get_path(&self, id: i64) -> CacheResult<Option<String>> {
        Ok(self.entries.lock().await.get(&id).cloned())
    }

    async fn set_path(&self, id: i64, path: &str, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        self.entries.lock().await.insert(id, path.to_string());
        Ok(())
    }
}

/// Store whose every operation fails as if the database were down.
pub struct FailingRepository;

#[async_trait]
impl LinkRepository for FailingRepository {
    async fn allocate_id(&self) -> Result<i64, AppError> {
        Err(AppError::storage("connection to 10.0.0.5:5432 refused"))
    }

    async fn insert(&self, _link: &Link) -> Result<(), AppError> {
        Err(AppError::storage("connection to 10.0.0.5:5432 refused"))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Link>, AppError> {
        Err(AppError::storage("connection to 10.0.0.5:5432 refused"))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::storage("connection to 10.0.0.5:5432 refused"))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Server whose store fails every call and whose validator accepts everything.
pub fn failing_store_server() -> TestServer {
    let link_service = Arc::new(LinkService::new(
        Arc::new(FailingRepository),
        Arc::new(AcceptAll::default()),
    ));
    create_test_server(AppState::new(link_service))
}

pub fn create_test_state(
    validator: Arc<dyn UrlValidator>,
) -> (AppState, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(repository.clone(), validator));

    (AppState::new(link_service), repository)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

/// Server over an empty in-memory store whose validator accepts everything.
pub fn accepting_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repository) = create_test_state(Arc::new(AcceptAll::default()));
    (create_test_server(state), repository)
}
