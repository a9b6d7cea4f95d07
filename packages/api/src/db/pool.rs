//! Database connection pool using OnceCell pattern.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::settings::Database;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Migrations embedded from `migrations/`.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Get or initialize the database connection pool.
pub async fn get_pool(settings: &Database) -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        tracing::info!(
            host = %settings.host,
            database = %settings.database,
            "Connecting to database"
        );

        PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .connect(&settings.url())
            .await
    })
    .await
}

/// Apply every pending migration.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
