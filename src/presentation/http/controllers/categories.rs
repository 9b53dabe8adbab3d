// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand},
    dto::CategoryDto,
};
use crate::presentation::http::{
    error::{ErrorResponse, HttpResult, IntoHttpResult},
    extractors::AdminAuthenticated,
    multipart::MultipartForm,
    openapi::StatusResponse,
    state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{Multipart, Path},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

/// Multipart body for category create and update.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryForm {
    /// Required on create, optional on update.
    pub name: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses((status = 200, description = "All categories, newest first.", body = [CategoryDto])),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, body = CategoryDto),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category_by_id(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/categories/slug/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, body = CategoryDto),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category_by_slug(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body(content = CategoryForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, body = CategoryDto),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 403, body = ErrorResponse),
        (status = 409, body = ErrorResponse),
        (status = 502, body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(user): AdminAuthenticated,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let mut form = MultipartForm::read(multipart, state.upload_max_bytes).await?;
    let command = CreateCategoryCommand {
        name: form.require_text("name")?,
        image: form.take_file("image")?,
    };

    let created = state
        .services
        .category_commands
        .create_category(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body(content = CategoryForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = CategoryDto),
        (status = 404, body = ErrorResponse),
        (status = 409, body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(user): AdminAuthenticated,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> HttpResult<Json<CategoryDto>> {
    let mut form = MultipartForm::read(multipart, state.upload_max_bytes).await?;
    let command = UpdateCategoryCommand {
        id,
        name: form.text("name"),
        image: form.take_file("image")?,
    };

    state
        .services
        .category_commands
        .update_category(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, body = StatusResponse),
        (status = 404, body = ErrorResponse),
        (status = 409, description = "Category still has products.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(user): AdminAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .category_commands
        .delete_category(&user, DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::deleted()))
}
