// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{
        commands::access::ensure_admin,
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
        ports::media::AssetUpload,
    },
    domain::{
        asset::AssetNamespace,
        category::{CategoryId, CategoryName, NewCategory},
    },
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub image: Option<AssetUpload>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_admin(actor, "create categories")?;

        let name = CategoryName::new(command.name)?;
        self.ensure_name_free(&name, None).await?;
        let slug = self
            .slugs
            .allocate(name.as_str(), "category", self.repo.as_ref(), None::<CategoryId>)
            .await?;

        let image = match command.image {
            Some(upload) => Some(
                self.assets
                    .store_one(upload, AssetNamespace::Categories)
                    .await?,
            ),
            None => None,
        };

        let now = self.clock.now();
        let new_category = NewCategory {
            name,
            slug,
            image: image.clone(),
            created_at: now,
            updated_at: now,
        };

        match self.repo.insert(new_category).await {
            Ok(created) => {
                tracing::info!(category_id = created.id.0, slug = %created.slug, "category created");
                Ok(created.into())
            }
            Err(err) => {
                self.assets.discard_all(image.iter()).await;
                Err(err.into())
            }
        }
    }
}
