// src/domain/product/entity.rs
use crate::domain::asset::AssetList;
use crate::domain::category::CategoryId;
use crate::domain::product::value_objects::{Price, ProductCode, ProductId, ProductName};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

/// Upper bound on a product gallery.
pub const MAX_PRODUCT_IMAGES: usize = 6;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub slug: Slug,
    pub price: Price,
    pub code: ProductCode,
    pub category_id: CategoryId,
    pub images: AssetList,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    #[must_use]
    pub fn is_renamed_to(&self, name: &ProductName) -> bool {
        self.name != *name
    }

    pub fn rename(&mut self, name: ProductName, slug: Slug) {
        self.name = name;
        self.slug = slug;
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub slug: Slug,
    pub price: Price,
    pub code: ProductCode,
    pub category_id: CategoryId,
    pub images: AssetList,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
