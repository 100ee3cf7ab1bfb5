use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{debug, error, info};

use crate::config::{initialize_app_state_with_url, redact_database_url};
use crate::router::create_router;

/// Runs the finance tracker API until ctrl+c or SIGTERM.
pub async fn serve(database_url: &str, bind_address: &str) -> Result<()> {
    info!(
        "Starting Pocketbook finance tracker against {}",
        redact_database_url(database_url)
    );

    let state = initialize_app_state_with_url(database_url)
        .await
        .inspect_err(|e| error!("Could not open the finance database: {}", e))?;
    let app = create_router(state);

    let listener = TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("binding the API listener to {}", bind_address))
        .inspect_err(|e| error!("{:#}", e))?;

    info!("Finance API listening on http://{}/api", bind_address);
    debug!("OpenAPI document at http://{}/api-docs/openapi.json", bind_address);
    info!("Swagger UI at http://{}/swagger-ui", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| error!("Finance API stopped with an error: {}", e))?;

    info!("Finance API stopped; in-flight requests finished");
    Ok(())
}

/// Resolves on the first ctrl+c or terminate signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("SIGTERM handler unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => debug!("Received ctrl+c, draining requests"),
        _ = terminate => debug!("Received terminate signal, draining requests"),
    }
}
