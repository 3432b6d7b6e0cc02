use async_trait::async_trait;

use crate::application::repos::{PostsWriteRepo, RepoError, UpdatePostParams};
use crate::domain::entities::PostRecord;
use crate::infra::db::map_sqlx_error;

use super::PostgresRepositories;
use super::types::{POST_COLUMNS, PostRow};

#[async_trait]
impl PostsWriteRepo for PostgresRepositories {
    async fn update_post(&self, params: UpdatePostParams) -> Result<PostRecord, RepoError> {
        let UpdatePostParams {
            slug,
            title,
            markdown,
        } = params;

        let sql = format!(
            "UPDATE posts SET title = $2, markdown = $3, updated_at = now() \
             WHERE slug = $1 RETURNING {POST_COLUMNS}"
        );

        // fetch_one maps a missing row to RowNotFound -> RepoError::NotFound.
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug)
            .bind(title)
            .bind(markdown)
            .fetch_one(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(PostRecord::from(row))
    }

    async fn delete_post(&self, slug: &str) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM posts WHERE slug = $1")
            .bind(slug)
            .execute(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
