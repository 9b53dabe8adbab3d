use crate::application::dto::AssetReferenceDto;
use crate::domain::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub price: i64,
    pub code: String,
    pub category_id: i64,
    pub images: Vec<AssetReferenceDto>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            name: product.name.into_inner(),
            slug: product.slug.into_inner(),
            price: product.price.amount(),
            code: product.code.into_inner(),
            category_id: product.category_id.into(),
            images: product.images.into_inner().into_iter().map(Into::into).collect(),
            content: product.content,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
