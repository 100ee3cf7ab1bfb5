pub mod entities;

pub use entities::TransactionType;
