use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::TransactionDto;

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MonthlyData {
    /// Month label, e.g. "Jan 2025"
    pub month: String,
    pub income: f64,
    pub expenses: f64,
}

impl MonthlyData {
    /// An empty month: both sides start at zero.
    pub fn empty(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            income: 0.0,
            expenses: 0.0,
        }
    }
}

/// Overview shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DashboardSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    /// `total_income - total_expenses`
    pub balance: f64,
    /// Latest transactions by date, newest first.
    pub recent_transactions: Vec<TransactionDto>,
    /// Monthly series over the reporting window, oldest month first.
    pub monthly_data: Vec<MonthlyData>,
}

impl DashboardSummary {
    pub fn new(
        total_income: f64,
        total_expenses: f64,
        recent_transactions: Vec<TransactionDto>,
        monthly_data: Vec<MonthlyData>,
    ) -> Self {
        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            recent_transactions,
            monthly_data,
        }
    }
}
