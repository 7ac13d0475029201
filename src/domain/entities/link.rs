//! Link entity representing a stored short link.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored mapping from a store-allocated id to an original URL.
///
/// Links are written once and never updated or deleted, so every field is
/// fixed for the lifetime of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub id: i64,
    pub path: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, path: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            path,
            created_at,
        }
    }

    /// Returns the public short identifier for this link.
    pub fn short_id(&self) -> String {
        crate::utils::id_codec::encode(self.id)
    }
}
