// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        assets::AssetReferenceManager,
        commands::{
            access::ensure_admin, categories::CategoryCommandService,
            contacts::ContactCommandService, posts::PostCommandService,
            products::ProductCommandService,
        },
        dto::AuthenticatedUser,
        ports::{media::AssetStore, security::TokenVerifier, time::Clock, util::SlugGenerator},
        queries::{
            categories::CategoryQueryService, contacts::ContactQueryService,
            posts::PostQueryService, products::ProductQueryService,
        },
        slugs::SlugAllocator,
    },
    domain::{
        category::CategoryRepository, contact::ContactRepository, post::PostRepository,
        product::ProductRepository,
    },
};

pub struct ApplicationServices {
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub product_commands: Arc<ProductCommandService>,
    pub product_queries: Arc<ProductQueryService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub contact_commands: Arc<ContactCommandService>,
    pub contact_queries: Arc<ContactQueryService>,
    token_verifier: Arc<dyn TokenVerifier>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        product_repo: Arc<dyn ProductRepository>,
        post_repo: Arc<dyn PostRepository>,
        contact_repo: Arc<dyn ContactRepository>,
        asset_store: Arc<dyn AssetStore>,
        token_verifier: Arc<dyn TokenVerifier>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        slug_max_attempts: u32,
    ) -> Self {
        let slugs = Arc::new(
            SlugAllocator::new(Arc::clone(&slugger), Arc::clone(&clock))
                .with_max_attempts(slug_max_attempts),
        );
        let assets = Arc::new(AssetReferenceManager::new(asset_store));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slugs),
            Arc::clone(&assets),
            Arc::clone(&clock),
        ));
        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&product_repo),
            Arc::clone(&category_repo),
            Arc::clone(&slugs),
            Arc::clone(&assets),
            Arc::clone(&clock),
        ));
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_repo),
            Arc::clone(&assets),
            Arc::clone(&clock),
        ));
        let contact_commands = Arc::new(ContactCommandService::new(
            Arc::clone(&contact_repo),
            Arc::clone(&clock),
        ));

        Self {
            category_commands,
            category_queries: Arc::new(CategoryQueryService::new(category_repo)),
            product_commands,
            product_queries: Arc::new(ProductQueryService::new(product_repo)),
            post_commands,
            post_queries: Arc::new(PostQueryService::new(post_repo)),
            contact_commands,
            contact_queries: Arc::new(ContactQueryService::new(contact_repo)),
            token_verifier,
        }
    }

    #[must_use]
    pub fn token_verifier(&self) -> Arc<dyn TokenVerifier> {
        Arc::clone(&self.token_verifier)
    }

    /// Verify a raw token and require the admin role.
    ///
    /// Presentation extractors delegate here so the role check lives in one place.
    pub async fn authenticate_admin(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_verifier.authenticate(token).await?;
        ensure_admin(&user, "perform this action")?;
        Ok(user)
    }
}
