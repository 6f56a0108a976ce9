use crate::config::DatabaseSettings;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;

pub type DbPool = SqlitePool;

/// Opens the store. Pooled connections are never recycled, so an in-memory
/// database survives for the life of the process.
pub async fn create_pool(settings: &DatabaseSettings) -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(&settings.url)
        .await?;

    info!("Connected to store at {}", settings.url);
    Ok(pool)
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Store migrations applied");
    Ok(())
}
