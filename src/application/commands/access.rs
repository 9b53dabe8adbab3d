// src/application/commands/access.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

/// Catalog writes are reserved for administrators.
pub fn ensure_admin(actor: &AuthenticatedUser, action: &str) -> ApplicationResult<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "insufficient privileges to {action}"
        )))
    }
}
