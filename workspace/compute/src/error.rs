use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Error from date operations
    #[error("Date error: {0}")]
    Date(String),

    /// A transaction row came back without the category it references
    #[error("Transaction {0} references a missing category")]
    MissingCategory(i32),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
