// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Name of the cookie the storefront uses to carry the access token.
pub const TOKEN_COOKIE: &str = "token";

/// Caller holding a valid token with the admin role.
#[derive(Debug, Clone)]
pub struct AdminAuthenticated(pub AuthenticatedUser);

/// Bearer header first, then the token cookie.
fn raw_token(parts: &Parts) -> Option<String> {
    if let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() {
        return Some(header.token().to_string());
    }
    parts
        .headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(TOKEN_COOKIE).map(str::to_string))
        .filter(|token| !token.is_empty())
}

async fn http_state<S>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError>
where
    S: Send + Sync,
{
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::Infrastructure(
                "application state missing".into(),
            ))
        })?;
    Ok(app_state)
}

fn missing_token() -> HttpError {
    HttpError::from_error(ApplicationError::Unauthorized(
        "missing access token".into(),
    ))
}

impl<S> FromRequestParts<S> for AdminAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = http_state(parts, state).await?;
        let token = raw_token(parts).ok_or_else(missing_token)?;

        let user = app_state
            .services
            .authenticate_admin(&token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}
