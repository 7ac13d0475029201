//! Handler for methods the service does not implement.

use axum::{http::StatusCode, response::IntoResponse};
use tracing::debug;

/// Body returned for any method other than `GET` and `PUT`.
pub const MSG_UNSUPPORTED: &str = "Unsupported method, use GET or PUT\n";

/// Answers any method other than `GET` and `PUT` with 500, regardless of path
/// or body.
pub async fn unsupported_method_handler(method: axum::http::Method) -> impl IntoResponse {
    debug!("Rejecting {} request", method);
    (StatusCode::INTERNAL_SERVER_ERROR, MSG_UNSUPPORTED)
}
