//! CRUD operations over categories and transactions.
//!
//! Services borrow the connection pool for the duration of one request.
//! Every mutation runs in its own database transaction, which rolls back when
//! dropped on an error path.

pub mod categories;
pub mod transactions;

pub use categories::CategoryService;
pub use transactions::TransactionService;

use sea_orm::{DbErr, SqlErr};

use crate::error::ApiError;

/// Maps store-level constraint violations to the matching client error.
///
/// The service checks uniqueness and references up front, but a concurrent
/// writer can still trip the schema constraints between check and write.
fn constraint_error(err: DbErr, on_unique: &str, on_foreign_key: &str) -> ApiError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::Conflict(on_unique.to_string()),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            ApiError::Reference(on_foreign_key.to_string())
        }
        _ => ApiError::Database(err),
    }
}
