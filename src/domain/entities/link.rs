//! Link entity representing a slug-to-URL mapping.

use chrono::{DateTime, Utc};

/// A short link with its human-readable label.
///
/// Represents the immutable mapping between a 6-character slug and the
/// original long URL. Once created a link is never mutated; there are no
/// update or delete operations.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub label: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        slug: String,
        label: String,
        original_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            slug,
            label,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// `created_at` is assigned by the database at insert time.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub slug: String,
    pub label: String,
    pub original_url: String,
}
