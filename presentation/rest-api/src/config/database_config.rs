use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: When set, migrations in this directory run before serving
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let max_connections = parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok());

    let config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_postgres_pool(&config).await?;

    if let Ok(migrations_path) = env::var("MIGRATIONS_PATH") {
        tracing::info!("Running migrations from {migrations_path}");
        run_migrations(&pool, &migrations_path).await?;
    }

    Ok(pool)
}

fn parse_max_connections(value: Option<String>) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_CONNECTIONS)
}
