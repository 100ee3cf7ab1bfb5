use crate::router::create_router;
use crate::schemas::AppState;
use axum::Router;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

/// Create an in-memory SQLite database for testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    // Run migrations
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create AppState for testing
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState { db }
}

/// Route test logs through the libtest capture.
///
/// The level comes from RUST_LOG and defaults to WARN. Safe to call from
/// every test; only the first call installs the subscriber.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Create axum app for testing
pub async fn setup_test_app() -> Router {
    init_test_tracing();

    let state = setup_test_app_state().await;
    create_router(state)
}
