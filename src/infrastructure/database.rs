//! PostgreSQL connection pool setup.

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::config::{Config, mask_connection_string};

/// Builds connect options from `DATABASE_URL` or the `BLOG_DB_*` components.
pub fn connect_options(config: &Config) -> Result<PgConnectOptions> {
    let options = match &config.database_url {
        Some(url) => PgConnectOptions::from_str(url)
            .with_context(|| format!("Invalid DATABASE_URL '{}'", mask_connection_string(url)))?,
        None => PgConnectOptions::new_without_pgpass()
            .host(&config.db.host)
            .port(config.db.port)
            .username(&config.db.user)
            .password(&config.db.password)
            .database(&config.db.database),
    };

    Ok(options.options([("client_encoding", config.db.charset.as_str())]))
}

/// Pool options derived from the `DB_*` settings.
pub fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Some(Duration::from_secs(config.db_idle_timeout)))
        .max_lifetime(Some(Duration::from_secs(config.db_max_lifetime)))
}

/// Opens the connection pool, retrying with exponential backoff.
///
/// # Errors
///
/// Returns the last connection error once `db_connect_retries` attempts
/// have failed.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let options = connect_options(config)?;
    let pool_options = pool_options(config);

    let strategy = ExponentialBackoff::from_millis(2)
        .factor(50)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_retries.saturating_sub(1));

    let pool = Retry::spawn(strategy, || {
        let options = options.clone();
        let pool_options = pool_options.clone();
        async move {
            pool_options.connect_with(options).await.inspect_err(|e| {
                tracing::warn!(error = %e, "database connection attempt failed");
            })
        }
    })
    .await
    .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}
