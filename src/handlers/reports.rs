use axum::{extract::State, response::Json};
use common::{DashboardSummary, MonthlyData};
use compute::ReportsComputer;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::schemas::AppState;

/// Income and expense totals per calendar month over the last 180 days
#[utoipa::path(
    get,
    path = "/api/transactions/monthly",
    responses(
        (status = 200, description = "Monthly totals, oldest month first", body = Vec<MonthlyData>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "reports"
)]
#[instrument(skip(state))]
pub async fn get_monthly_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<MonthlyData>>, ApiError> {
    let monthly = ReportsComputer::new().monthly_data(&state.db).await?;
    debug!("Computed {} monthly buckets", monthly.len());
    Ok(Json(monthly))
}

/// All-time totals, balance, recent activity and monthly totals
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "reports"
)]
#[instrument(skip(state))]
pub async fn get_dashboard_summary(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, ApiError> {
    let summary = ReportsComputer::new().dashboard_summary(&state.db).await?;
    Ok(Json(summary))
}
