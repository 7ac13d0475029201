//! Handler for link creation.

use axum::{
    body::{Body, to_bytes},
    extract::State,
    http::{HeaderMap, Uri, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_host::request_host;

/// Shortens the URL carried in the request body.
///
/// # Endpoint
///
/// `PUT /` (any path)
///
/// # Request Body
///
/// The raw URL, e.g. `http://example.com`. Surrounding whitespace is ignored.
///
/// # Response
///
/// ```text
/// HTTP/1.1 200 OK
/// Content-Type: text/plain; charset=utf-8
///
/// http://short.ly/1
/// ```
///
/// # Errors
///
/// - 400 if the body cannot be read, exceeds the size limit, is not UTF-8,
///   or the request has no host
/// - 500 if the URL cannot be fetched
/// - 500 if the store fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    body: Body,
) -> Result<impl IntoResponse, AppError> {
    let bytes = to_bytes(body, state.max_url_bytes)
        .await
        .map_err(|e| AppError::bad_request(format!("failed to read body: {}", e)))?;

    let url = String::from_utf8(bytes.to_vec())
        .map_err(|_| AppError::bad_request("body is not valid UTF-8"))?;
    let url = url.trim();

    let host = request_host(&headers, &uri)?;

    let short_id = state.link_service.create(url).await?;
    let short_url = state.link_service.short_url(&host, &short_id);

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("{}\n", short_url),
    ))
}
