//! Application layer services implementing business logic.
//!
//! Services consume the domain contracts (store and validator) and give the
//! HTTP handlers and the admin CLI a single entry point.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and lookup

pub mod services;
