//! Short link entity representing an alias mapping.

use chrono::{DateTime, Utc};

/// A persisted mapping from a public alias to its target URL.
///
/// Links are immutable once created. The only lifecycle transition is removal.
/// `id` is assigned by the store and only used for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortLink {
    pub id: i64,
    pub alias: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    pub fn new(id: i64, alias: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            alias,
            target_url,
            created_at,
        }
    }
}
