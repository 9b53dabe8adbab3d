// tests/support/mocks/security.rs
use async_trait::async_trait;
use beeshop_core::application::{
    ApplicationResult,
    dto::{AuthenticatedUser, Role},
    error::ApplicationError,
    ports::security::TokenVerifier,
};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const CUSTOMER_TOKEN: &str = "customer-token";

/// Accepts two fixed tokens; everything else is rejected as invalid.
#[derive(Clone, Debug, Default)]
pub struct StaticTokenVerifier;

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ADMIN_TOKEN => Ok(AuthenticatedUser {
                id: 1,
                username: "admin".into(),
                role: Role::Admin,
            }),
            CUSTOMER_TOKEN => Ok(AuthenticatedUser {
                id: 2,
                username: "shopper".into(),
                role: Role::Customer,
            }),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
