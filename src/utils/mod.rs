//! Utility functions shared by the handlers, the service and the admin CLI.
//!
//! - [`id_codec`] - Base-36 short identifier encoding and path extraction
//! - [`request_host`] - Host extraction from HTTP requests

pub mod id_codec;
pub mod request_host;
