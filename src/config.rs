use anyhow::Result;
use sea_orm::Database;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Used when neither `--database-url` nor `DATABASE_URL` is given.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://pocketbook.db?mode=rwc";

/// Used when neither `--bind-address` nor `BIND_ADDRESS` is given.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8001";

/// Connect to the database and build the shared application state.
///
/// The connection is a pool; handlers borrow it per request.
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    info!("Connecting to database: {}", redact_database_url(database_url));

    let db = Database::connect(database_url).await?;
    debug!("Database connection pool ready");

    Ok(AppState { db })
}

/// Hides the password part of a connection string so it can be logged.
pub fn redact_database_url(database_url: &str) -> String {
    let Some((scheme, rest)) = database_url.split_once("://") else {
        return database_url.to_string();
    };
    let Some((credentials, host)) = rest.rsplit_once('@') else {
        return database_url.to_string();
    };
    match credentials.split_once(':') {
        Some((user, _password)) => format!("{}://{}:***@{}", scheme, user, host),
        None => database_url.to_string(),
    }
}
