pub mod error;
pub mod reports;

pub use error::{ComputeError, Result};
pub use reports::ReportsComputer;
