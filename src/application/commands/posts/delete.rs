// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{
    application::{
        commands::access::ensure_admin,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        ensure_admin(actor, "delete posts")?;

        let id = PostId::new(command.id)?;
        let post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let report = self.assets.discard_all([&post.image]).await;
        if !report.is_clean() {
            tracing::warn!(post_id = id.0, orphaned = ?report.failed, "post image left on media host");
        }

        self.repo.delete(id).await?;
        Ok(())
    }
}
