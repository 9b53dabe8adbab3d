// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::{
    application::{
        commands::access::ensure_admin,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategoryId,
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        ensure_admin(actor, "delete categories")?;

        let id = CategoryId::new(command.id)?;
        let category = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let products = self.repo.count_products(id).await?;
        if products > 0 {
            return Err(ApplicationError::conflict(format!(
                "category still has {products} products"
            )));
        }

        let report = self.assets.discard_all(category.image.iter()).await;
        if !report.is_clean() {
            tracing::warn!(category_id = id.0, orphaned = ?report.failed, "category image left on media host");
        }

        self.repo.delete(id).await?;
        Ok(())
    }
}
