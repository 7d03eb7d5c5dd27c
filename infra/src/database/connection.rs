//! MySQL connection pool
//!
//! Owns the SQLx pool shared by both repositories and bootstraps the schema
//! from `sql/schema.sql`.

use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    MySqlPool,
};
use std::str::FromStr;

use ud_shared::DatabaseConfig;

use crate::InfrastructureError;

const SCHEMA: &str = include_str!("../../sql/schema.sql");

/// Shared pool handle; cloning is cheap
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
    create_schema: bool,
}

impl DatabasePool {
    /// Connect using `config`; an unparseable URL fails before any I/O
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let options = connect_options(&config.url)?;

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(config.idle_timeout())
            .connect_with(options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Could not open the MySQL pool");
                InfrastructureError::Database(e)
            })?;

        tracing::info!(max_connections = config.max_connections, "MySQL pool ready");

        Ok(Self {
            pool,
            create_schema: config.create_schema,
        })
    }

    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Create the `positions` and `users` tables if they are missing.
    /// No-op when the config disabled schema creation.
    pub async fn ensure_schema(&self) -> Result<(), InfrastructureError> {
        if !self.create_schema {
            tracing::debug!("Schema creation disabled");
            return Ok(());
        }
        for statement in schema_statements() {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        tracing::info!("Database schema verified");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("MySQL pool closed");
    }
}

/// Parse a `mysql://` or `mariadb://` URL; sqlx itself ignores the scheme
fn connect_options(url: &str) -> Result<MySqlConnectOptions, InfrastructureError> {
    let scheme = url.split_once("://").map(|(scheme, _)| scheme.to_ascii_lowercase());
    if !matches!(scheme.as_deref(), Some("mysql" | "mariadb")) {
        return Err(InfrastructureError::Config(
            "Invalid database URL: expected a mysql:// or mariadb:// scheme".to_string(),
        ));
    }
    MySqlConnectOptions::from_str(url)
        .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))
}

fn schema_statements() -> impl Iterator<Item = &'static str> {
    SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty())
}
