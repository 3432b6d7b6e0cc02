use metrics::counter;
use tracing::{debug, info};

use crate::application::repos::UpdatePostParams;
use crate::domain::entities::PostRecord;

use super::service::AdminPostService;
use super::types::{AdminPostError, PostSubmission, SubmitOutcome, UpdatePostCommand};

impl AdminPostService {
    /// Single entry point for editor submissions: waits out the configured delay,
    /// then dispatches to [`Self::update_post`] or [`Self::delete_post`].
    pub async fn submit(&self, submission: PostSubmission) -> Result<SubmitOutcome, AdminPostError> {
        if !self.submit_delay.is_zero() {
            debug!(
                target = "postdesk::application::admin::posts",
                delay_ms = self.submit_delay.as_millis() as u64,
                "delaying submission"
            );
            tokio::time::sleep(self.submit_delay).await;
        }

        info!(
            target = "postdesk::application::admin::posts",
            kind = submission.kind().as_str(),
            slug = submission.slug().unwrap_or(""),
            "processing post submission"
        );

        counter!(
            "postdesk_post_submissions_total",
            "kind" => submission.kind().as_str()
        )
        .increment(1);

        match submission {
            PostSubmission::Delete { slug } => {
                // Deletion does not validate; an absent slug reaches the store as "".
                self.delete_post(slug.as_deref().unwrap_or_default()).await?;
                Ok(SubmitOutcome::Applied)
            }
            PostSubmission::Update(fields) => match fields.validate() {
                Ok(command) => {
                    self.update_post(command).await?;
                    Ok(SubmitOutcome::Applied)
                }
                Err(errors) => Ok(SubmitOutcome::Rejected(errors)),
            },
        }
    }

    pub async fn update_post(
        &self,
        command: UpdatePostCommand,
    ) -> Result<PostRecord, AdminPostError> {
        let params = UpdatePostParams {
            slug: command.slug,
            title: command.title,
            markdown: command.markdown,
        };

        let post = self.writer.update_post(params).await?;

        info!(
            target = "postdesk::application::admin::posts",
            slug = %post.slug,
            "post updated"
        );

        Ok(post)
    }

    pub async fn delete_post(&self, slug: &str) -> Result<(), AdminPostError> {
        self.writer.delete_post(slug).await?;

        info!(
            target = "postdesk::application::admin::posts",
            slug = %slug,
            "post deleted"
        );

        Ok(())
    }
}
