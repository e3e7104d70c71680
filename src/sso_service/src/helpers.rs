use sqlx::{PgPool, postgres::PgPoolOptions};
use sso_core::{AppStoreError, PasswordHasherError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid hashing parameters: {0}")]
    Hashing(#[from] PasswordHasherError),
    #[error("Failed to connect to PostgreSQL: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Failed to provision app: {0}")]
    Provisioning(#[from] AppStoreError),
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `url` - Database connection URL
/// * `max_connections` - Upper bound on pooled connections
///
/// # Returns
/// Result containing the PgPool or an error
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}
