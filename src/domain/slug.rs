// src/domain/slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;

/// URL-safe identifier derived from a display name: lowercase ASCII letters,
/// digits and single `-` separators, never starting or ending with `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub const MAX_LEN: usize = 200;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > Self::MAX_LEN {
            return Err(DomainError::Validation(format!(
                "slug cannot exceed {} characters",
                Self::MAX_LEN
            )));
        }
        let well_formed = !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--")
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !well_formed {
            return Err(DomainError::Validation(format!(
                "slug must be lowercase kebab-case: {value}"
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Existence check over one entity collection, used as the optimistic
/// uniqueness pre-check before a slug is persisted. The unique index on the
/// collection remains the final authority.
#[async_trait]
pub trait SlugIndex<Id>: Send + Sync
where
    Id: Copy + Send + Sync + 'static,
{
    async fn slug_exists(&self, slug: &Slug, exclude: Option<Id>) -> DomainResult<bool>;
}
