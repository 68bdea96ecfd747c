//! Lookup database configuration.
//!
//! The known-product catalog is an external store the tracker only reads.
//! This module resolves its connection URL and opens the SeaORM connection.

use crate::errors::Result;
use sea_orm::{Database, DatabaseConnection};
use tracing::info;

/// Environment variable that overrides the configured lookup URL
pub const LOOKUP_DATABASE_URL_VAR: &str = "LOOKUP_DATABASE_URL";

/// Resolves the lookup database URL.
///
/// Precedence: explicit command-line value, then `LOOKUP_DATABASE_URL`, then
/// the value from config.toml. Returns `None` when no lookup is configured.
#[must_use]
pub fn get_database_url(cli_url: Option<String>, configured: Option<&str>) -> Option<String> {
    resolve_database_url(
        cli_url,
        std::env::var(LOOKUP_DATABASE_URL_VAR).ok(),
        configured,
    )
}

/// Pure precedence rule behind [`get_database_url`].
#[must_use]
pub fn resolve_database_url(
    cli_url: Option<String>,
    env_url: Option<String>,
    configured: Option<&str>,
) -> Option<String> {
    cli_url
        .or(env_url)
        .or_else(|| configured.map(str::to_string))
        .filter(|url| !url.trim().is_empty())
}

/// Opens a connection to the known-product catalog.
///
/// # Errors
/// Returns an error if the database cannot be reached.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    info!("Connecting to known-product catalog...");
    Database::connect(database_url).await.map_err(Into::into)
}
