// src/domain/product/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::product::entity::{NewProduct, Product};
use crate::domain::product::value_objects::ProductId;
use crate::domain::slug::{Slug, SlugIndex};
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: SlugIndex<ProductId> {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>>;
    /// Newest first; `search` matches the product name case-insensitively.
    async fn list_page(&self, request: &PageRequest) -> DomainResult<Page<Product>>;
    async fn insert(&self, product: NewProduct) -> DomainResult<Product>;
    async fn update(&self, product: &Product) -> DomainResult<Product>;
    async fn delete(&self, id: ProductId) -> DomainResult<()>;
}
