// src/application/queries/posts.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{PageDto, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        pagination::PageRequest,
        post::{PostId, PostRepository},
    },
};

pub struct ListPostsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

pub struct PostQueryService {
    repo: Arc<dyn PostRepository>,
}

impl PostQueryService {
    #[must_use]
    pub const fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<PageDto<PostDto>> {
        let request = PageRequest::new(query.page, query.limit, query.search);
        let page = self.repo.list_page(&request).await?;
        Ok(PageDto::from_page(&request, page))
    }

    pub async fn get_post_by_id(&self, id: i64) -> ApplicationResult<PostDto> {
        let id = PostId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }
}
