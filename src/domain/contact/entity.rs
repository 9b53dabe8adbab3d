// src/domain/contact/entity.rs
use crate::domain::errors::{DomainError, DomainResult, required_text};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(pub i64);

impl ContactId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("contact id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ContactId> for i64 {
    fn from(value: ContactId) -> Self {
        value.0
    }
}

/// Validated contact form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub title: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub content: String,
}

impl ContactDetails {
    pub fn new(
        title: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        content: Option<String>,
    ) -> DomainResult<Self> {
        let email = required_text(email, "email")?;
        if !email.contains('@') {
            return Err(DomainError::Validation("email is malformed".into()));
        }
        Ok(Self {
            title: required_text(title, "title")?,
            name: required_text(name, "name")?,
            email,
            phone: required_text(phone, "phone")?,
            content: content.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Contact {
    pub id: ContactId,
    pub details: ContactDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContact {
    pub details: ContactDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
