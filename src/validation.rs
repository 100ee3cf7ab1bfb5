//! Payload validation for category and transaction writes.
//!
//! Enum membership is checked by deserialization; everything else by the
//! `Validate` derives below. Both run in [`crate::extractors::ValidatedJson`]
//! before a handler is reached.

use chrono::{DateTime, Utc};
use model::TransactionType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Body of `POST /categories` and `PUT /categories/{id}`.
///
/// Updates replace every field, so create and update share one shape.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct CategoryPayload {
    /// Unique, case-sensitive name
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Hex colour code, e.g. "#10B981"
    #[validate(custom(function = "validate_color"))]
    pub color: String,
}

/// Body of `POST /transactions` and `PUT /transactions/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct TransactionPayload {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Strictly positive amount
    #[validate(range(exclusive_min = 0.0, message = "amount must be greater than 0"))]
    pub amount: f64,
    pub category_id: i32,
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
    /// When the income or expense happened
    pub date: DateTime<Utc>,
}

/// Accepts `#RRGGBB` with hex digits in either case.
pub fn validate_color(color: &str) -> Result<(), ValidationError> {
    let valid = color
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()));

    if valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("color");
        error.message = Some("color must be a hex code like #RRGGBB".into());
        Err(error)
    }
}
