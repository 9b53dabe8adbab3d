// src/presentation/http/controllers/contacts.rs
use crate::application::{
    commands::contacts::{CreateContactCommand, DeleteContactCommand, UpdateContactCommand},
    dto::{ContactDto, PageDto},
    queries::contacts::ListContactsQuery,
};
use crate::presentation::http::{
    controllers::params::ListParams,
    error::{ErrorResponse, HttpResult, IntoHttpResult},
    extractors::AdminAuthenticated,
    openapi::StatusResponse,
    state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateContactRequest {
    pub title: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateContactRequest {
    pub title: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub content: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = CreateContactRequest,
    responses(
        (status = 201, body = ContactDto),
        (status = 400, body = ErrorResponse)
    ),
    security(()),
    tag = "Contacts"
)]
pub async fn create_contact(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateContactRequest>,
) -> HttpResult<(StatusCode, Json<ContactDto>)> {
    let command = CreateContactCommand {
        title: payload.title,
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        content: payload.content,
    };

    let created = state
        .services
        .contact_commands
        .create_contact(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/contacts",
    params(ListParams),
    responses(
        (status = 200, body = PageDto<ContactDto>),
        (status = 401, body = ErrorResponse),
        (status = 403, body = ErrorResponse)
    ),
    tag = "Contacts"
)]
pub async fn list_contacts(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(user): AdminAuthenticated,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<PageDto<ContactDto>>> {
    let query = ListContactsQuery {
        page: params.page,
        limit: params.limit,
        search: params.search,
    };

    state
        .services
        .contact_queries
        .list_contacts(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    params(("id" = i64, Path, description = "Contact id")),
    responses(
        (status = 200, body = ContactDto),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Contacts"
)]
pub async fn get_contact(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(user): AdminAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContactDto>> {
    state
        .services
        .contact_queries
        .get_contact_by_id(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    params(("id" = i64, Path, description = "Contact id")),
    request_body = UpdateContactRequest,
    responses(
        (status = 200, body = ContactDto),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Contacts"
)]
pub async fn update_contact(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(user): AdminAuthenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateContactRequest>,
) -> HttpResult<Json<ContactDto>> {
    let command = UpdateContactCommand {
        id,
        title: payload.title,
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        content: payload.content,
    };

    state
        .services
        .contact_commands
        .update_contact(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    params(("id" = i64, Path, description = "Contact id")),
    responses(
        (status = 200, body = StatusResponse),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Contacts"
)]
pub async fn delete_contact(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(user): AdminAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .contact_commands
        .delete_contact(&user, DeleteContactCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::deleted()))
}
