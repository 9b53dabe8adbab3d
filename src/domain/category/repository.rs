// src/domain/category/repository.rs
use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugIndex};
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: SlugIndex<CategoryId> {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    /// All categories, newest first.
    async fn list(&self) -> DomainResult<Vec<Category>>;
    /// Whether another category already uses `name`, ignoring `exclude`.
    async fn name_exists(
        &self,
        name: &CategoryName,
        exclude: Option<CategoryId>,
    ) -> DomainResult<bool>;
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    /// Persist the full reconciled record in one write.
    async fn update(&self, category: &Category) -> DomainResult<Category>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    /// Number of products filed under the category.
    async fn count_products(&self, id: CategoryId) -> DomainResult<u64>;
}
