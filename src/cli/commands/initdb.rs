use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use tracing::{debug, info};

use crate::config::redact_database_url;

/// Creates or upgrades the categories and transactions tables.
pub async fn init_database(database_url: &str) -> Result<()> {
    let redacted = redact_database_url(database_url);
    info!("Preparing finance schema in {}", redacted);

    let db = Database::connect(database_url)
        .await
        .with_context(|| format!("connecting to {}", redacted))?;

    let pending = Migrator::get_pending_migrations(&db)
        .await
        .context("listing pending migrations")?;
    debug!("{} pending migration(s)", pending.len());

    Migrator::up(&db, None)
        .await
        .context("applying the finance schema migrations")?;

    db.close().await?;

    info!("Finance schema is up to date");
    Ok(())
}
