// src/domain/category/entity.rs
use crate::domain::asset::AssetReference;
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub image: Option<AssetReference>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Whether `name` differs from the current one, i.e. the slug must be
    /// recomputed.
    #[must_use]
    pub fn is_renamed_to(&self, name: &CategoryName) -> bool {
        self.name != *name
    }

    pub fn rename(&mut self, name: CategoryName, slug: Slug, now: DateTime<Utc>) {
        self.name = name;
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_image(&mut self, image: Option<AssetReference>, now: DateTime<Utc>) {
        self.image = image;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: Slug,
    pub image: Option<AssetReference>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
