//! Domain entities mirrored from persistent storage.

use serde::Serialize;
use time::OffsetDateTime;

/// A blog post, addressed by its slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRecord {
    pub slug: String,
    pub title: String,
    pub markdown: String,
    pub updated_at: OffsetDateTime,
}
