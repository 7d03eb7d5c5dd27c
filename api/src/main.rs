use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use ud_api::{create_app, AppState};
use ud_core::repositories::{PositionRepository, UserRepository};
use ud_core::services::photo::{ImageTransformer, PhotoPipeline, PhotoPipelineConfig};
use ud_core::services::{
    DirectoryService, InMemoryTokenStore, RegistrationService, RegistrationServiceConfig,
    TokenStore, TokenStoreConfig,
};
use ud_infra::database::{seed_positions, seed_users};
use ud_infra::{
    DatabasePool, MySqlPositionRepository, MySqlUserRepository, RedisClient, RedisTokenStore,
    TinifyImageTransformer,
};
use ud_shared::{AppConfig, LoggingConfig, TokenStoreDriver};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    tracing::info!(
        environment = %config.environment,
        bind = %config.server.bind_address(),
        "Starting user directory API"
    );

    // The image service is mandatory; refuse to start without credentials
    let transformer: Arc<dyn ImageTransformer> = Arc::new(
        TinifyImageTransformer::new(&config.image_service)
            .context("image optimization service is not configured")?,
    );

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    pool.ensure_schema().await?;

    let positions: Arc<dyn PositionRepository> =
        Arc::new(MySqlPositionRepository::new(pool.get_pool().clone()));
    let users: Arc<dyn UserRepository> =
        Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));

    if config.seed.positions {
        seed_positions(positions.as_ref()).await?;
    }
    if config.seed.users > 0 {
        seed_users(users.as_ref(), positions.as_ref(), config.seed.users).await?;
    }

    let tokens: Arc<dyn TokenStore> = match config.cache.driver {
        TokenStoreDriver::Memory => Arc::new(InMemoryTokenStore::with_config(TokenStoreConfig {
            ttl_minutes: config.cache.token_ttl_minutes,
        })),
        TokenStoreDriver::Redis => {
            let client = RedisClient::new(&config.cache)
                .await
                .context("failed to connect to Redis")?;
            Arc::new(RedisTokenStore::new(client, &config.cache))
        }
    };
    tracing::info!(driver = ?config.cache.driver, "Registration token store ready");

    let photo_config = PhotoPipelineConfig::from(&config.storage);
    tokio::fs::create_dir_all(photo_config.public_photo_dir())
        .await
        .context("failed to create the public photo directory")?;
    let pipeline = Arc::new(PhotoPipeline::new(transformer, photo_config));

    let registration = Arc::new(RegistrationService::new(
        tokens.clone(),
        users.clone(),
        positions.clone(),
        pipeline,
        RegistrationServiceConfig::default(),
    ));
    let directory = Arc::new(DirectoryService::new(users, positions));

    let state = web::Data::new(AppState::new(
        registration,
        directory,
        tokens,
        &config.server,
        config.storage.public_dir.clone(),
    ));

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(config.server.bind_address())?.run().await?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
