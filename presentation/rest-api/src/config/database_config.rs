use persistence::db::{DatabaseConfig, create_lazy_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

pub const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string. When unset, no pool is
///   created and products are kept in memory.
/// - MIGRATIONS_PATH: Directory with SQL migrations (default: "./migrations")
///
/// An unreachable database is logged and does not stop the server.
///
/// # Errors
/// Returns error if DATABASE_URL is not a valid connection string
pub async fn init_database() -> anyhow::Result<Option<PgPool>> {
    let Ok(db_url) = env::var("DATABASE_URL") else {
        tracing::warn!("DATABASE_URL not set, products will be kept in memory");
        return Ok(None);
    };

    let pool = create_lazy_postgres_pool(&DatabaseConfig::new(db_url))?;

    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    match run_migrations(&pool, &migrations_path).await {
        Ok(()) => tracing::info!("Database connected"),
        Err(e) => tracing::error!(error = %e, "Unable to connect to the database"),
    }

    Ok(Some(pool))
}
