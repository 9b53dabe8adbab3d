// src/application/commands/categories/update.rs
use super::CategoryCommandService;
use crate::{
    application::{
        commands::access::ensure_admin,
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
        ports::media::AssetUpload,
    },
    domain::{
        asset::AssetNamespace,
        category::{CategoryId, CategoryName},
    },
};

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub image: Option<AssetUpload>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_admin(actor, "update categories")?;

        let id = CategoryId::new(command.id)?;
        let name = command.name.map(CategoryName::new).transpose()?;
        let mut category = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        let now = self.clock.now();

        if let Some(name) = name.filter(|n| category.is_renamed_to(n)) {
            self.ensure_name_free(&name, Some(id)).await?;
            let slug = self
                .slugs
                .allocate(name.as_str(), "category", self.repo.as_ref(), Some(id))
                .await?;
            category.rename(name, slug, now);
        }

        let mut stored = None;
        if let Some(upload) = command.image {
            let image = self
                .assets
                .replace(category.image.as_ref(), upload, AssetNamespace::Categories)
                .await?;
            stored = Some(image.clone());
            category.set_image(Some(image), now);
        }

        category.updated_at = now;
        match self.repo.update(&category).await {
            Ok(updated) => Ok(updated.into()),
            Err(err) => {
                self.assets.discard_all(stored.iter()).await;
                Err(err.into())
            }
        }
    }
}
