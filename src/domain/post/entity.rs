// src/domain/post/entity.rs
use crate::domain::asset::AssetReference;
use crate::domain::post::value_objects::{PostExcerpt, PostId, PostTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub excerpt: Option<PostExcerpt>,
    pub image: AssetReference,
    pub content: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub excerpt: Option<PostExcerpt>,
    pub image: AssetReference,
    pub content: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
