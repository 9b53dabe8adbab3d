// src/presentation/http/controllers/params.rs
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Query string accepted by every paginated listing.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// 1-based page number, defaults to 1.
    pub page: Option<u32>,
    /// Page size, defaults to 10 and is capped at 100.
    pub limit: Option<u32>,
    /// Case-insensitive substring filter.
    pub search: Option<String>,
}
