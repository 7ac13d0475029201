//! Outbound URL validation.

mod http_validator;

pub use http_validator::{HttpUrlValidator, ValidationPolicy};
