// src/application/commands/posts/update.rs
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
        post::{PostExcerpt, PostId, PostTitle},
    },
};

pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<AssetUpload>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        ensure_admin(actor, "update posts")?;

        let id = PostId::new(command.id)?;
        let title = command.title.map(PostTitle::new).transpose()?;
        let mut post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let mut stored = None;
        if let Some(upload) = command.image {
            let image = self
                .assets
                .replace(Some(&post.image), upload, AssetNamespace::Posts)
                .await?;
            stored = Some(image.clone());
            post.image = image;
        }

        if let Some(title) = title {
            post.title = title;
        }
        if command.excerpt.is_some() {
            post.excerpt = PostExcerpt::parse(command.excerpt);
        }
        if let Some(content) = command.content {
            post.content = content;
        }
        post.updated_at = self.clock.now();

        match self.repo.update(&post).await {
            Ok(updated) => Ok(updated.into()),
            Err(err) => {
                self.assets.discard_all(stored.iter()).await;
                Err(err.into())
            }
        }
    }
}
