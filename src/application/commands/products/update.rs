// src/application/commands/products/update.rs
use std::collections::HashSet;

use super::ProductCommandService;
use crate::{
    application::{
        commands::access::ensure_admin,
        dto::{AuthenticatedUser, ProductDto},
        error::{ApplicationError, ApplicationResult},
        ports::media::AssetUpload,
    },
    domain::{
        asset::{AssetList, AssetNamespace, AssetReference},
        product::{MAX_PRODUCT_IMAGES, Price, ProductCode, ProductId, ProductName},
    },
};

pub struct UpdateProductCommand {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<i64>,
    pub code: Option<String>,
    pub category_id: Option<i64>,
    pub content: Option<String>,
    /// Public ids to drop from the gallery, already normalised to one list.
    pub remove_images: Vec<String>,
    pub images: Vec<AssetUpload>,
}

impl ProductCommandService {
    pub async fn update_product(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        ensure_admin(actor, "update products")?;

        let UpdateProductCommand {
            id,
            name,
            price,
            code,
            category_id,
            content,
            remove_images,
            images,
        } = command;

        let id = ProductId::new(id)?;
        let name = name.map(ProductName::new).transpose()?;
        let price = price.map(Price::new).transpose()?;
        let code = code.map(ProductCode::new).transpose()?;

        let mut product = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let category_id = match category_id {
            Some(raw) => Some(self.ensure_category(raw).await?),
            None => None,
        };

        if let Some(name) = name.filter(|n| product.is_renamed_to(n)) {
            let slug = self
                .slugs
                .allocate(name.as_str(), "product", self.repo.as_ref(), Some(id))
                .await?;
            product.rename(name, slug);
        }

        let previous = std::mem::replace(&mut product.images, AssetList::empty());
        let held: HashSet<String> = previous
            .iter()
            .map(|asset| asset.public_id().to_string())
            .collect();
        let (reconciled, report) = self
            .assets
            .reconcile(
                previous,
                &remove_images,
                images,
                AssetNamespace::Products,
                MAX_PRODUCT_IMAGES,
            )
            .await?;
        if !report.is_clean() {
            tracing::warn!(product_id = id.0, orphaned = ?report.failed, "removed product images left on media host");
        }
        let added: Vec<AssetReference> = reconciled
            .iter()
            .filter(|asset| !held.contains(asset.public_id()))
            .cloned()
            .collect();
        product.images = reconciled;

        if let Some(price) = price {
            product.price = price;
        }
        if let Some(code) = code {
            product.code = code;
        }
        if let Some(category_id) = category_id {
            product.category_id = category_id;
        }
        if let Some(content) = content {
            product.content = content;
        }
        product.updated_at = self.clock.now();

        match self.repo.update(&product).await {
            Ok(updated) => Ok(updated.into()),
            Err(err) => {
                self.assets.discard_all(&added).await;
                Err(err.into())
            }
        }
    }
}
