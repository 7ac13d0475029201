//! Handler for short URL redirect.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use tracing::{debug, error};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::id_codec::id_from_path;

/// Plain-text help returned when a path carries no identifier.
pub const USAGE: &str = "\
Usage:
  PUT /        body: the URL to shorten, answers with the short URL
  GET /{id}    redirects to the URL stored under {id}
";

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Request Flow
///
/// 1. Percent-decode the path, extract its first alphanumeric run and decode
///    it as base 36
/// 2. Check cache for the id
/// 3. On cache miss, query the store
/// 4. Asynchronously update cache
/// 5. Return 301 Moved Permanently
///
/// A path without a decodable identifier is answered with [`USAGE`], not an
/// error.
///
/// # Errors
///
/// Returns 404 Not Found if the id decodes but nothing is stored under it.
/// Returns 500 on store failures.
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let request_path = percent_decode_str(uri.path()).decode_utf8_lossy();
    let id = match id_from_path(&request_path) {
        Ok(id) => id,
        Err(e) => {
            debug!("No identifier in {}: {}", request_path, e);
            return Ok(usage());
        }
    };

    let path = match state.cache.get_path(id).await {
        Ok(Some(cached)) => cached,
        Ok(None) => {
            let link = state.link_service.find(id).await?;

            let cache = state.cache.clone();
            let path = link.path.clone();
            tokio::spawn(async move {
                if let Err(e) = cache.set_path(id, &path, None).await {
                    error!("Failed to cache link {}: {}", id, e);
                }
            });

            link.path
        }
        Err(e) => {
            error!("Cache error: {}", e);
            state.link_service.find(id).await?.path
        }
    };

    moved_permanently(&path)
}

fn usage() -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        USAGE,
    )
        .into_response()
}

fn moved_permanently(path: &str) -> Result<Response, AppError> {
    let location = location_header(path)?;
    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` value, percent-encoding through `url` when the stored
/// text is not plain visible ASCII.
fn location_header(path: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(path) {
        return Ok(value);
    }

    Url::parse(path)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| AppError::storage(format!("stored URL is not a valid Location: {}", path)))
}
