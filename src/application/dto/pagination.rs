use crate::domain::pagination::{Page, PageRequest};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    #[must_use]
    pub fn new(request: &PageRequest, total: u64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages: total.div_ceil(u64::from(request.limit.max(1))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PageDto<T> {
    #[must_use]
    pub fn from_page<E>(request: &PageRequest, page: Page<E>) -> Self
    where
        T: From<E>,
    {
        let pagination = PaginationMeta::new(request, page.total);
        Self {
            items: page.items.into_iter().map(T::from).collect(),
            pagination,
        }
    }
}
