use crate::handlers::{
    categories::{
        create_category, delete_category, get_categories, get_category, update_category,
    },
    health::{api_root, health_check},
    reports::{get_dashboard_summary, get_monthly_data},
    transactions::{
        create_transaction, delete_transaction, get_transaction, get_transactions,
        update_transaction,
    },
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        .route("/api", get(api_root))
        .route("/api/", get(api_root))
        // Category CRUD routes
        .route("/api/categories", get(get_categories).post(create_category))
        .route(
            "/api/categories/:category_id",
            get(get_category).put(update_category).delete(delete_category),
        )
        // Transaction CRUD routes
        .route("/api/transactions", get(get_transactions).post(create_transaction))
        .route(
            "/api/transactions/:transaction_id",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
        // Reports
        .route("/api/transactions/monthly", get(get_monthly_data))
        .route("/api/dashboard", get(get_dashboard_summary))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
