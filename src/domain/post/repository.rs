use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::post::entity::{NewPost, Post};
use crate::domain::post::value_objects::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn list_page(&self, request: &PageRequest) -> DomainResult<Page<Post>>;
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, post: &Post) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}
