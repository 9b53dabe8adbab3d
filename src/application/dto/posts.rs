use crate::application::dto::AssetReferenceDto;
use crate::domain::post::{Post, PostExcerpt};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub image: AssetReferenceDto,
    pub content: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            excerpt: post.excerpt.map(PostExcerpt::into_inner),
            image: post.image.into(),
            content: post.content,
            created_by: post.created_by,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
