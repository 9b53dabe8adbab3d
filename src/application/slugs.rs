// src/application/slugs.rs
use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{time::Clock, util::SlugGenerator},
};
use crate::domain::slug::{Slug, SlugIndex};

/// Bound on the length of the base part, leaving room for a numeric suffix.
const MAX_BASE_LEN: usize = Slug::MAX_LEN - 12;

/// Produces slugs that are unique within one entity collection at the time of
/// the check. The collection's unique index stays the final authority: two
/// concurrent allocations for colliding names can both pass this pre-check,
/// and the second write is then rejected as a conflict.
pub struct SlugAllocator {
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
    max_attempts: u32,
}

impl SlugAllocator {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

    #[must_use]
    pub fn new(generator: Arc<dyn SlugGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            generator,
            clock,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Try `base`, then `base-2`, `base-3`, ... until `collection` reports the
    /// candidate unused. The record `exclude` (the one being updated) never
    /// collides with itself.
    pub async fn allocate<Id, C>(
        &self,
        name: &str,
        kind: &str,
        collection: &C,
        exclude: Option<Id>,
    ) -> ApplicationResult<Slug>
    where
        Id: Copy + Send + Sync + 'static,
        C: SlugIndex<Id> + ?Sized,
    {
        let base = self.base_slug(name, kind);

        for attempt in 1..=self.max_attempts {
            let candidate = if attempt == 1 {
                base.clone()
            } else {
                format!("{base}-{attempt}")
            };
            let slug = Slug::new(candidate)?;
            if !collection.slug_exists(&slug, exclude).await? {
                tracing::debug!(kind, slug = %slug, attempt, "allocated slug");
                return Ok(slug);
            }
        }

        tracing::warn!(kind, base = %base, attempts = self.max_attempts, "slug space exhausted");
        Err(ApplicationError::conflict(format!(
            "could not allocate a unique {kind} slug for \"{name}\" after {} attempts",
            self.max_attempts
        )))
    }

    fn base_slug(&self, name: &str, kind: &str) -> String {
        let mut base = self.generator.slugify(name);
        if base.len() > MAX_BASE_LEN {
            // slugify output is ASCII, so any byte index is a char boundary
            base.truncate(MAX_BASE_LEN);
            let trimmed = base.trim_end_matches('-').len();
            base.truncate(trimmed);
        }
        if base.is_empty() {
            format!("{kind}-{}", self.clock.now().timestamp())
        } else {
            base
        }
    }
}
