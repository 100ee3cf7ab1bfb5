//! Transport-layer types shared between the reporting engine and the HTTP
//! handlers. These are the JSON shapes clients see.

mod converters;
mod reports;

pub use reports::{DashboardSummary, MonthlyData};

use chrono::{DateTime, Utc};
use model::TransactionType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===================== Categories =====================

/// Category response model.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Hex colour, `#RRGGBB`
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ===================== Transactions =====================

/// Transaction response model, with its category embedded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TransactionDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub category_id: i32,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category: CategoryDto,
}
