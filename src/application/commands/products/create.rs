// src/application/commands/products/create.rs
use super::ProductCommandService;
use crate::{
    application::{
        commands::access::ensure_admin,
        dto::{AuthenticatedUser, ProductDto},
        error::{ApplicationError, ApplicationResult},
        ports::media::AssetUpload,
    },
    domain::{
        asset::{AssetList, AssetNamespace},
        product::{MAX_PRODUCT_IMAGES, NewProduct, Price, ProductCode, ProductId, ProductName},
    },
};

pub struct CreateProductCommand {
    pub name: String,
    pub price: i64,
    pub code: String,
    pub category_id: i64,
    pub content: Option<String>,
    pub images: Vec<AssetUpload>,
}

impl ProductCommandService {
    pub async fn create_product(
        &self,
        actor: &AuthenticatedUser,
        command: CreateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        ensure_admin(actor, "create products")?;

        let name = ProductName::new(command.name)?;
        let price = Price::new(command.price)?;
        let code = ProductCode::new(command.code)?;
        if command.images.len() > MAX_PRODUCT_IMAGES {
            return Err(ApplicationError::validation(format!(
                "at most {MAX_PRODUCT_IMAGES} images are allowed"
            )));
        }
        let category_id = self.ensure_category(command.category_id).await?;

        let slug = self
            .slugs
            .allocate(name.as_str(), "product", self.repo.as_ref(), None::<ProductId>)
            .await?;

        let stored = self
            .assets
            .store_all(command.images, AssetNamespace::Products)
            .await?;
        let images = AssetList::new(stored.clone(), MAX_PRODUCT_IMAGES)?;

        let now = self.clock.now();
        let new_product = NewProduct {
            name,
            slug,
            price,
            code,
            category_id,
            images,
            content: command.content.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        match self.repo.insert(new_product).await {
            Ok(created) => {
                tracing::info!(
                    product_id = created.id.0,
                    slug = %created.slug,
                    images = created.images.len(),
                    "product created"
                );
                Ok(created.into())
            }
            Err(err) => {
                self.assets.discard_all(&stored).await;
                Err(err.into())
            }
        }
    }
}
