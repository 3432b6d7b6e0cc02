use time::OffsetDateTime;

use crate::domain::entities::PostRecord;

pub(super) const POST_COLUMNS: &str = "slug, title, markdown, updated_at";

#[derive(sqlx::FromRow)]
pub(crate) struct PostRow {
    pub(crate) slug: String,
    pub(crate) title: String,
    pub(crate) markdown: String,
    pub(crate) updated_at: OffsetDateTime,
}

impl From<PostRow> for PostRecord {
    fn from(row: PostRow) -> Self {
        Self {
            slug: row.slug,
            title: row.title,
            markdown: row.markdown,
            updated_at: row.updated_at,
        }
    }
}
