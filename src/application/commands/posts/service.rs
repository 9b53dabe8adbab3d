// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{assets::AssetReferenceManager, ports::time::Clock},
    domain::post::PostRepository,
};

pub struct PostCommandService {
    pub(super) repo: Arc<dyn PostRepository>,
    pub(super) assets: Arc<AssetReferenceManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    #[must_use]
    pub const fn new(
        repo: Arc<dyn PostRepository>,
        assets: Arc<AssetReferenceManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            assets,
            clock,
        }
    }
}
