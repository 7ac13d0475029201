//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the contracts defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`persistence`] - Link stores (PostgreSQL and in-memory)
//! - [`validation`] - Outbound reachability check over HTTP

pub mod cache;
pub mod persistence;
pub mod validation;
