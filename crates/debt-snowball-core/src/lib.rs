pub mod config;
pub mod error;
pub mod loans;
pub mod statistics;
pub mod types;

#[cfg(feature = "charts")]
pub mod charts;

#[cfg(feature = "categories")]
pub mod categories;

#[cfg(feature = "display")]
pub mod display;

#[cfg(feature = "dashboard")]
pub mod dashboard;

pub use config::DashboardConfig;
pub use error::DebtSnowballError;
pub use loans::{LoanBook, LoanDraft};
pub use types::*;

/// Standard result type for all debt-snowball operations
pub type DebtSnowballResult<T> = Result<T, DebtSnowballError>;
