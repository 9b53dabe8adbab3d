// src/application/commands/products/delete.rs
use super::ProductCommandService;
use crate::{
    application::{
        commands::access::ensure_admin,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::ProductId,
};

pub struct DeleteProductCommand {
    pub id: i64,
}

impl ProductCommandService {
    /// Discard every gallery image in stored order, then remove the record.
    /// Media host failures do not block the delete.
    pub async fn delete_product(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteProductCommand,
    ) -> ApplicationResult<()> {
        ensure_admin(actor, "delete products")?;

        let id = ProductId::new(command.id)?;
        let product = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let report = self.assets.discard_all(&product.images).await;
        if !report.is_clean() {
            tracing::warn!(product_id = id.0, orphaned = ?report.failed, "product images left on media host");
        }

        self.repo.delete(id).await?;
        Ok(())
    }
}
