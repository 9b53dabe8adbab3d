// src/application/queries/products.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{PageDto, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        pagination::PageRequest,
        product::{ProductId, ProductRepository},
        slug::Slug,
    },
};

pub struct ListProductsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

pub struct ProductQueryService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductQueryService {
    #[must_use]
    pub const fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_products(
        &self,
        query: ListProductsQuery,
    ) -> ApplicationResult<PageDto<ProductDto>> {
        let request = PageRequest::new(query.page, query.limit, query.search);
        let page = self.repo.list_page(&request).await?;
        Ok(PageDto::from_page(&request, page))
    }

    pub async fn get_product_by_id(&self, id: i64) -> ApplicationResult<ProductDto> {
        let id = ProductId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("product not found"))
    }

    pub async fn get_product_by_slug(&self, slug: &str) -> ApplicationResult<ProductDto> {
        let slug =
            Slug::new(slug).map_err(|_| ApplicationError::not_found("product not found"))?;
        self.repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("product not found"))
    }
}
