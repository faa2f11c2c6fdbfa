use std::time::Duration;

use configs::DatabaseSettings;
use secrecy::ExposeSecret;
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Opens the shared connection pool. Connections are acquired per statement
/// by the repositories and returned as soon as the statement finishes.
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        max_connections = settings.max_connections,
        min_connections = settings.min_connections,
        "connecting to postgres"
    );
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(settings.url.expose_secret())
        .await
}
