use beeshop_core::application::{
    ports::{media::AssetStore, security::TokenVerifier, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use beeshop_core::config::AppConfig;
use beeshop_core::domain::{
    category::CategoryRepository, contact::ContactRepository, post::PostRepository,
    product::ProductRepository,
};
use beeshop_core::infrastructure::{
    database,
    media::CloudinaryAssetStore,
    repositories::{
        PostgresCategoryRepository, PostgresContactRepository, PostgresPostRepository,
        PostgresProductRepository,
    },
    security::token::BiscuitTokenVerifier,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use beeshop_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let product_repo: Arc<dyn ProductRepository> =
        Arc::new(PostgresProductRepository::new(pool.clone()));
    let post_repo: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(pool.clone()));
    let contact_repo: Arc<dyn ContactRepository> =
        Arc::new(PostgresContactRepository::new(pool.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let token_verifier: Arc<dyn TokenVerifier> =
        Arc::new(BiscuitTokenVerifier::new(config.biscuit_public_key())?);
    let http_client = CloudinaryAssetStore::default_http_client()
        .context("failed to build media host HTTP client")?;
    let asset_store: Arc<dyn AssetStore> = Arc::new(CloudinaryAssetStore::new(
        http_client,
        config.cloudinary().clone(),
        Arc::clone(&clock),
    ));

    let services = Arc::new(ApplicationServices::new(
        category_repo,
        product_repo,
        post_repo,
        contact_repo,
        asset_store,
        token_verifier,
        Arc::clone(&clock),
        slugger,
        config.slug_max_attempts(),
    ));

    let state = HttpState {
        services,
        upload_max_bytes: config.upload_max_bytes(),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
