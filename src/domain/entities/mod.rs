//! Core domain entities.
//!
//! The service has a single entity, [`Link`]: a store-allocated numeric id
//! mapped to the original URL and its creation time.

pub mod link;

pub use link::Link;
