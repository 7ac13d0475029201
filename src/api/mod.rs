//! HTTP layer translating requests into service calls.
//!
//! # Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Method dispatch on the `/` prefix

pub mod handlers;
pub mod middleware;
pub mod routes;
