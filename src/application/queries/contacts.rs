// src/application/queries/contacts.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::access::ensure_admin,
        dto::{AuthenticatedUser, ContactDto, PageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        contact::{ContactId, ContactRepository},
        pagination::PageRequest,
    },
};

pub struct ListContactsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

/// Contact submissions carry personal data and are readable by admins only.
pub struct ContactQueryService {
    repo: Arc<dyn ContactRepository>,
}

impl ContactQueryService {
    #[must_use]
    pub const fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_contacts(
        &self,
        actor: &AuthenticatedUser,
        query: ListContactsQuery,
    ) -> ApplicationResult<PageDto<ContactDto>> {
        ensure_admin(actor, "read contacts")?;
        let request = PageRequest::new(query.page, query.limit, query.search);
        let page = self.repo.list_page(&request).await?;
        Ok(PageDto::from_page(&request, page))
    }

    pub async fn get_contact_by_id(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<ContactDto> {
        ensure_admin(actor, "read contacts")?;
        let id = ContactId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("contact not found"))
    }
}
