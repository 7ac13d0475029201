//! Domain layer containing business entities and the contracts of external
//! collaborators.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//! - [`validation`] - Outbound reachability check contract
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; both the store and the validator are injected as trait objects.

pub mod entities;
pub mod repositories;
pub mod validation;
