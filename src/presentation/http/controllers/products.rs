// src/presentation/http/controllers/products.rs
use crate::application::{
    commands::products::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand},
    dto::{PageDto, ProductDto},
    queries::products::ListProductsQuery,
};
use crate::presentation::http::{
    controllers::params::ListParams,
    error::{ErrorResponse, HttpResult, IntoHttpResult},
    extractors::AdminAuthenticated,
    multipart::MultipartForm,
    openapi::StatusResponse,
    state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

/// Multipart body for product create and update.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductForm {
    pub name: Option<String>,
    /// Integer amount in the smallest currency unit.
    pub price: Option<i64>,
    pub code: Option<String>,
    pub category_id: Option<i64>,
    pub content: Option<String>,
    /// Update only: public ids to drop, repeated or as a JSON array string.
    pub remove_images: Option<Vec<String>>,
    /// Up to six image files.
    #[schema(value_type = Option<Vec<String>>, format = Binary)]
    pub images: Option<Vec<Vec<u8>>>,
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(ListParams),
    responses((status = 200, body = PageDto<ProductDto>)),
    tag = "Products"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<PageDto<ProductDto>>> {
    let query = ListProductsQuery {
        page: params.page,
        limit: params.limit,
        search: params.search,
    };

    state
        .services
        .product_queries
        .list_products(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, body = ProductDto),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_queries
        .get_product_by_id(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/products/slug/{slug}",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, body = ProductDto),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_queries
        .get_product_by_slug(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body(content = ProductForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, body = ProductDto),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 403, body = ErrorResponse),
        (status = 409, body = ErrorResponse),
        (status = 502, body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(user): AdminAuthenticated,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<ProductDto>)> {
    let mut form = MultipartForm::read(multipart, state.upload_max_bytes).await?;
    let command = CreateProductCommand {
        name: form.require_text("name")?,
        price: form.require_integer("price")?,
        code: form.require_text("code")?,
        category_id: form.require_integer("category_id")?,
        content: form.text("content"),
        images: form.take_files("images"),
    };

    let created = state
        .services
        .product_commands
        .create_product(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body(content = ProductForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = ProductDto),
        (status = 400, description = "Validation failed or the image bound would be exceeded.", body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 502, body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(user): AdminAuthenticated,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> HttpResult<Json<ProductDto>> {
    let mut form = MultipartForm::read(multipart, state.upload_max_bytes).await?;
    let command = UpdateProductCommand {
        id,
        name: form.text("name"),
        price: form.integer("price")?,
        code: form.text("code"),
        category_id: form.integer("category_id")?,
        content: form.text("content"),
        remove_images: form.removal_list()?,
        images: form.take_files("images"),
    };

    state
        .services
        .product_commands
        .update_product(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, body = StatusResponse),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(user): AdminAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .product_commands
        .delete_product(&user, DeleteProductCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::deleted()))
}
