//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `PUT /`       - Create a short link (any path under `/` is accepted)
//! - `GET /{id}`   - Redirect to the stored URL
//! - other methods - 500
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router.
///
/// The router owns the state it is given; handlers receive it through
/// axum's `State` extractor.
pub fn app_router(state: AppState) -> Router {
    api::routes::dispatch_routes()
        .with_state(state)
        .layer(tracing::layer())
}
