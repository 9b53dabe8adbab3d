use crate::domain::contact::Contact;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactDto {
    pub id: i64,
    pub title: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Contact> for ContactDto {
    fn from(contact: Contact) -> Self {
        let details = contact.details;
        Self {
            id: contact.id.into(),
            title: details.title,
            name: details.name,
            email: details.email,
            phone: details.phone,
            content: details.content,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}
