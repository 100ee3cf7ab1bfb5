pub mod categories;
pub mod health;
pub mod reports;
pub mod transactions;
