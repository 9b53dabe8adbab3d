// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        commands::access::ensure_admin,
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
        ports::media::AssetUpload,
    },
    domain::{
        asset::AssetNamespace,
        post::{NewPost, PostExcerpt, PostTitle},
    },
};

pub struct CreatePostCommand {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<AssetUpload>,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        ensure_admin(actor, "create posts")?;

        let title = PostTitle::new(command.title)?;
        let excerpt = PostExcerpt::parse(command.excerpt);
        let upload = command
            .image
            .ok_or_else(|| ApplicationError::validation("post image is required"))?;

        let image = self.assets.store_one(upload, AssetNamespace::Posts).await?;

        let now = self.clock.now();
        let new_post = NewPost {
            title,
            excerpt,
            image: image.clone(),
            content: command.content.unwrap_or_default(),
            created_by: actor.id,
            created_at: now,
            updated_at: now,
        };

        match self.repo.insert(new_post).await {
            Ok(created) => {
                tracing::info!(post_id = created.id.0, "post created");
                Ok(created.into())
            }
            Err(err) => {
                self.assets.discard_all([&image]).await;
                Err(err.into())
            }
        }
    }
}
