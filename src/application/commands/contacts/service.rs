// src/application/commands/contacts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::access::ensure_admin,
        dto::{AuthenticatedUser, ContactDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::contact::{ContactDetails, ContactId, ContactRepository, NewContact},
};

pub struct CreateContactCommand {
    pub title: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub content: Option<String>,
}

pub struct UpdateContactCommand {
    pub id: i64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub content: Option<String>,
}

pub struct DeleteContactCommand {
    pub id: i64,
}

pub struct ContactCommandService {
    repo: Arc<dyn ContactRepository>,
    clock: Arc<dyn Clock>,
}

impl ContactCommandService {
    #[must_use]
    pub const fn new(repo: Arc<dyn ContactRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Public contact form submission; no authentication involved.
    pub async fn create_contact(&self, command: CreateContactCommand) -> ApplicationResult<ContactDto> {
        let details = ContactDetails::new(
            command.title,
            command.name,
            command.email,
            command.phone,
            command.content,
        )?;
        let now = self.clock.now();
        let created = self
            .repo
            .insert(NewContact {
                details,
                created_at: now,
                updated_at: now,
            })
            .await?;
        tracing::info!(contact_id = created.id.0, "contact received");
        Ok(created.into())
    }

    pub async fn update_contact(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateContactCommand,
    ) -> ApplicationResult<ContactDto> {
        ensure_admin(actor, "update contacts")?;

        let id = ContactId::new(command.id)?;
        let mut contact = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("contact not found"))?;

        let current = contact.details;
        contact.details = ContactDetails::new(
            command.title.unwrap_or(current.title),
            command.name.unwrap_or(current.name),
            command.email.unwrap_or(current.email),
            command.phone.unwrap_or(current.phone),
            Some(command.content.unwrap_or(current.content)),
        )?;
        contact.updated_at = self.clock.now();

        let updated = self.repo.update(&contact).await?;
        Ok(updated.into())
    }

    pub async fn delete_contact(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteContactCommand,
    ) -> ApplicationResult<()> {
        ensure_admin(actor, "delete contacts")?;

        let id = ContactId::new(command.id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("contact not found"))?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
