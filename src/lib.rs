//! # shortlink
//!
//! A small URL shortener built with Axum. Each stored URL gets a numeric id
//! from an auto-incrementing store, and the public short identifier is that
//! id written in base 36.
//!
//! ## HTTP surface
//!
//! ```bash
//! $ curl -X PUT --data 'http://example.com' http://short.ly/
//! http://short.ly/1
//! $ curl -i http://short.ly/1
//! HTTP/1.1 301 Moved Permanently
//! location: http://example.com
//! ```
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The link entity, store and validator contracts
//! - **Application Layer** ([`application`]) - Link creation and lookup
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL/in-memory stores,
//!   Redis cache, `reqwest` validator
//! - **API Layer** ([`api`]) - Method dispatch and handlers
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::Link;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::domain::validation::{FetchFailure, UrlValidator};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::id_codec::{decode, encode, id_from_path};
}
