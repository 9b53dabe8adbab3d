use crate::domain::contact::entity::{Contact, ContactId, NewContact};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use async_trait::async_trait;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn find_by_id(&self, id: ContactId) -> DomainResult<Option<Contact>>;
    /// Newest first; `search` matches the title.
    async fn list_page(&self, request: &PageRequest) -> DomainResult<Page<Contact>>;
    async fn insert(&self, contact: NewContact) -> DomainResult<Contact>;
    async fn update(&self, contact: &Contact) -> DomainResult<Contact>;
    async fn delete(&self, id: ContactId) -> DomainResult<()>;
}
