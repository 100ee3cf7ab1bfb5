use common::{CategoryDto, DashboardSummary, MonthlyData, TransactionDto};
use model::TransactionType;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::handlers::transactions::ListTransactionsQuery;
use crate::validation::{CategoryPayload, TransactionPayload};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Plain status message, returned by deletes and the API root
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::health::api_root,
        crate::handlers::categories::get_categories,
        crate::handlers::categories::get_category,
        crate::handlers::categories::create_category,
        crate::handlers::categories::update_category,
        crate::handlers::categories::delete_category,
        crate::handlers::transactions::get_transactions,
        crate::handlers::transactions::get_transaction,
        crate::handlers::transactions::create_transaction,
        crate::handlers::transactions::update_transaction,
        crate::handlers::transactions::delete_transaction,
        crate::handlers::reports::get_monthly_data,
        crate::handlers::reports::get_dashboard_summary,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            HealthResponse,
            CategoryPayload,
            TransactionPayload,
            ListTransactionsQuery,
            TransactionType,
            CategoryDto,
            TransactionDto,
            MonthlyData,
            DashboardSummary,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "categories", description = "Category management"),
        (name = "transactions", description = "Income and expense transactions"),
        (name = "reports", description = "Monthly totals and dashboard summary"),
    ),
    info(
        title = "Pocketbook API",
        description = "Personal Finance Tracker API - categorized income and expenses with monthly reporting",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
