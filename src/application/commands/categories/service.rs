// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::{
        assets::AssetReferenceManager,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        slugs::SlugAllocator,
    },
    domain::category::{CategoryId, CategoryName, CategoryRepository},
};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) slugs: Arc<SlugAllocator>,
    pub(super) assets: Arc<AssetReferenceManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    #[must_use]
    pub const fn new(
        repo: Arc<dyn CategoryRepository>,
        slugs: Arc<SlugAllocator>,
        assets: Arc<AssetReferenceManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slugs,
            assets,
            clock,
        }
    }

    /// Reject a name another category already holds, before any slug or
    /// media host work happens.
    pub(super) async fn ensure_name_free(
        &self,
        name: &CategoryName,
        exclude: Option<CategoryId>,
    ) -> ApplicationResult<()> {
        if self.repo.name_exists(name, exclude).await? {
            return Err(ApplicationError::conflict(format!(
                "category name {name} already exists"
            )));
        }
        Ok(())
    }
}
