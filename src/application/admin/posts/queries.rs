use crate::domain::entities::PostRecord;

use super::service::AdminPostService;
use super::types::AdminPostError;

impl AdminPostService {
    pub async fn list(&self) -> Result<Vec<PostRecord>, AdminPostError> {
        self.reader.list_posts().await.map_err(AdminPostError::from)
    }

    pub async fn load_post(&self, slug: &str) -> Result<Option<PostRecord>, AdminPostError> {
        self.reader
            .find_by_slug(slug)
            .await
            .map_err(AdminPostError::from)
    }

    /// Loads the post behind an editor URL, failing when the slug is blank or unknown.
    pub async fn load_for_edit(&self, slug: &str) -> Result<PostRecord, AdminPostError> {
        if slug.trim().is_empty() {
            return Err(AdminPostError::MissingParameter("slug"));
        }

        self.load_post(slug)
            .await?
            .ok_or_else(|| AdminPostError::NotFound {
                slug: slug.to_string(),
            })
    }
}
