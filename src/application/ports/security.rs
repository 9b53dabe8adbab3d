// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AuthenticatedUser};
use async_trait::async_trait;

#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify a bearer token issued by the account service and extract its subject.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
