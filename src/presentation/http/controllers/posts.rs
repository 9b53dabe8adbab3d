// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{PageDto, PostDto},
    queries::posts::ListPostsQuery,
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

/// Multipart body for post create and update.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PostForm {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    /// Required on create; on update a new file replaces the current image.
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

#[utoipa::path(
    get,
    path = "/api/posts",
    params(ListParams),
    responses((status = 200, body = PageDto<PostDto>)),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<PageDto<PostDto>>> {
    let query = ListPostsQuery {
        page: params.page,
        limit: params.limit,
        search: params.search,
    };

    state
        .services
        .post_queries
        .list_posts(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, body = PostDto),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_id(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/posts",
    request_body(content = PostForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, body = PostDto),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 403, body = ErrorResponse),
        (status = 502, body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(user): AdminAuthenticated,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let mut form = MultipartForm::read(multipart, state.upload_max_bytes).await?;
    let command = CreatePostCommand {
        title: form.require_text("title")?,
        excerpt: form.text("excerpt"),
        content: form.text("content"),
        image: form.take_file("image")?,
    };

    let created = state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body(content = PostForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = PostDto),
        (status = 404, body = ErrorResponse),
        (status = 502, body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(user): AdminAuthenticated,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> HttpResult<Json<PostDto>> {
    let mut form = MultipartForm::read(multipart, state.upload_max_bytes).await?;
    let command = UpdatePostCommand {
        id,
        title: form.text("title"),
        excerpt: form.text("excerpt"),
        content: form.text("content"),
        image: form.take_file("image")?,
    };

    state
        .services
        .post_commands
        .update_post(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, body = StatusResponse),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(user): AdminAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::deleted()))
}
