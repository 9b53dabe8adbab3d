// src/application/queries/categories.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{CategoryId, CategoryRepository},
        slug::Slug,
    },
};

pub struct CategoryQueryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    #[must_use]
    pub const fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get_category_by_id(&self, id: i64) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }

    pub async fn get_category_by_slug(&self, slug: &str) -> ApplicationResult<CategoryDto> {
        let slug = Slug::new(slug)
            .map_err(|_| ApplicationError::not_found("category not found"))?;
        self.repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }
}
