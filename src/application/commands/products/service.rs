// src/application/commands/products/service.rs
use std::sync::Arc;

use crate::{
    application::{
        assets::AssetReferenceManager,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        slugs::SlugAllocator,
    },
    domain::{
        category::{CategoryId, CategoryRepository},
        product::ProductRepository,
    },
};

pub struct ProductCommandService {
    pub(super) repo: Arc<dyn ProductRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) slugs: Arc<SlugAllocator>,
    pub(super) assets: Arc<AssetReferenceManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProductCommandService {
    #[must_use]
    pub const fn new(
        repo: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
        slugs: Arc<SlugAllocator>,
        assets: Arc<AssetReferenceManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            categories,
            slugs,
            assets,
            clock,
        }
    }

    /// Resolve the category up front so a dangling reference is rejected
    /// before any upload happens.
    pub(super) async fn ensure_category(&self, raw_id: i64) -> ApplicationResult<CategoryId> {
        let id = CategoryId::new(raw_id)?;
        match self.categories.find_by_id(id).await? {
            Some(_) => Ok(id),
            None => Err(ApplicationError::validation(format!(
                "category {raw_id} does not exist"
            ))),
        }
    }
}
