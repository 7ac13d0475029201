//! Method dispatch for the `/` path prefix.

use crate::api::handlers::{redirect_handler, shorten_handler, unsupported_method_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes every path under `/` by HTTP method.
///
/// axum answers `HEAD` with the `GET` handler unless one is set, so `HEAD`
/// is routed to the unsupported handler explicitly.
///
/// # Endpoints
///
/// - `PUT  /*`    - Shorten the URL in the request body
/// - `GET  /*`    - Redirect the identifier in the path (usage text if none)
/// - anything else - 500, `HEAD` included
pub fn dispatch_routes() -> Router<AppState> {
    let dispatch = get(redirect_handler)
        .put(shorten_handler)
        .head(unsupported_method_handler)
        .fallback(unsupported_method_handler);

    Router::new()
        .route("/", dispatch.clone())
        .route("/{*path}", dispatch)
}
