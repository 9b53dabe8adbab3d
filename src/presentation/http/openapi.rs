// src/presentation/http/openapi.rs
use crate::application::dto::{
    AssetReferenceDto, CategoryDto, ContactDto, PaginationMeta, PostDto, ProductDto,
};
use crate::presentation::http::controllers::{categories, contacts, params, posts, products};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use super::extractors::TOKEN_COOKIE;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
        }
    }

    #[must_use]
    pub fn deleted() -> Self {
        Self {
            status: "deleted".into(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        categories::list_categories,
        categories::get_category,
        categories::get_category_by_slug,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        products::list_products,
        products::get_product,
        products::get_product_by_slug,
        products::create_product,
        products::update_product,
        products::delete_product,
        posts::list_posts,
        posts::get_post,
        posts::create_post,
        posts::update_post,
        posts::delete_post,
        contacts::create_contact,
        contacts::list_contacts,
        contacts::get_contact,
        contacts::update_contact,
        contacts::delete_contact,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            params::ListParams,
            categories::CategoryForm,
            products::ProductForm,
            posts::PostForm,
            contacts::CreateContactRequest,
            contacts::UpdateContactRequest,
            AssetReferenceDto,
            PaginationMeta,
            CategoryDto,
            ProductDto,
            PostDto,
            ContactDto
        )
    ),
    tags(
        (name = "Categories", description = "Product categories"),
        (name = "Products", description = "Catalog products and their image galleries"),
        (name = "Posts", description = "Blog posts"),
        (name = "Contacts", description = "Contact form submissions"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = []), ("cookieAuth" = [])),
    info(
        title = "Bee Shop API",
        description = "Catalog backend for the Bee Shop storefront",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
        components.add_security_scheme(
            "cookieAuth",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(TOKEN_COOKIE))),
        );

        let urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            return;
        }

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();
        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

#[must_use]
pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
