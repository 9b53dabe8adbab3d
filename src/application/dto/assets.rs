use crate::domain::asset::AssetReference;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssetReferenceDto {
    pub public_id: String,
    pub url: String,
}

impl From<AssetReference> for AssetReferenceDto {
    fn from(asset: AssetReference) -> Self {
        Self {
            public_id: asset.public_id().to_string(),
            url: asset.url().to_string(),
        }
    }
}
