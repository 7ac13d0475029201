//! Base-36 identifier codec.
//!
//! Short identifiers are the lowercase base-36 text form of the numeric key
//! the store allocated for a link. The mapping is a pure bijection between
//! `0..=i64::MAX` and canonical base-36 strings, so no lookup table is needed
//! to go either way.

use regex::Regex;
use std::sync::LazyLock;

/// Digits used by the encoder, in value order.
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const RADIX: u32 = 36;

/// First run of ASCII letters and digits in a request path.
static ID_IN_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-zA-Z0-9]+").expect("static regex is valid"));

/// Errors produced when a short identifier cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier contains non-alphanumeric characters: {0}")]
    InvalidDigit(String),

    #[error("identifier is out of range: {0}")]
    Overflow(String),
}

/// Encodes a numeric id as a lowercase base-36 string.
///
/// Store ids are never negative. A negative value is still encoded (with a
/// leading `-`) so the function stays total, but [`decode`] rejects it.
///
/// ```
/// use shortlink::utils::id_codec::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(35), "z");
/// assert_eq!(encode(36), "10");
/// ```
pub fn encode(id: i64) -> String {
    let mut value = id.unsigned_abs();
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(13);
    while value > 0 {
        digits.push(ALPHABET[(value % RADIX as u64) as usize]);
        value /= RADIX as u64;
    }
    if id < 0 {
        digits.push(b'-');
    }
    digits.reverse();

    // Every byte comes from ALPHABET or is '-'.
    digits.into_iter().map(char::from).collect()
}

/// Decodes a base-36 identifier into its numeric id.
///
/// Letters are accepted in either case. Signs, whitespace and any other
/// non-alphanumeric character are rejected.
///
/// # Errors
///
/// - [`CodecError::Empty`] for an empty string
/// - [`CodecError::InvalidDigit`] if any character is not `[0-9a-zA-Z]`
/// - [`CodecError::Overflow`] if the value does not fit in an `i64`
pub fn decode(text: &str) -> Result<i64, CodecError> {
    if text.is_empty() {
        return Err(CodecError::Empty);
    }

    if !text.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(CodecError::InvalidDigit(text.to_string()));
    }

    // Only digits and letters reach here, so the sole failure is overflow.
    i64::from_str_radix(text, RADIX).map_err(|_| CodecError::Overflow(text.to_string()))
}

/// Extracts the identifier from a request path and decodes it.
///
/// The identifier is the first maximal alphanumeric run in the path, so
/// `/1`, `/1/` and `/1.html` all resolve to id `1`.
///
/// # Errors
///
/// Returns [`CodecError::Empty`] when the path holds no alphanumeric run,
/// otherwise the errors of [`decode`].
pub fn id_from_path(path: &str) -> Result<i64, CodecError> {
    let sid = ID_IN_PATH
        .find(path)
        .map(|m| m.as_str())
        .ok_or(CodecError::Empty)?;

    decode(sid)
}
