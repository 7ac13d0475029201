//! Host extraction from HTTP requests.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};

/// Returns the host the client addressed, port included.
///
/// Reads the `Host` header and falls back to the URI authority (HTTP/2
/// requests carry the host there). The value is returned as sent so short
/// URLs point back at the same host and port the client used.
///
/// # Errors
///
/// Returns [`AppError::MalformedRequest`] if:
/// - Neither a `Host` header nor a URI authority is present
/// - The header value is not valid visible ASCII
/// - The header value is empty
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "short.ly:8080".parse().unwrap());
///
/// let host = request_host(&headers, &Uri::from_static("/")).unwrap();
/// assert_eq!(host, "short.ly:8080");
/// ```
pub fn request_host(headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header"))?
            .trim()
            .to_string(),
        None => uri
            .authority()
            .map(|authority| authority.as_str().to_string())
            .ok_or_else(|| AppError::bad_request("Missing Host header"))?,
    };

    if host.is_empty() {
        return Err(AppError::bad_request("Empty Host header"));
    }

    Ok(host)
}
