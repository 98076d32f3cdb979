use thiserror::Error;

use crate::types::LoanId;

#[derive(Debug, Error)]
pub enum DebtSnowballError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Duplicate loan id {0} in loan collection")]
    DuplicateLoanId(LoanId),

    #[error("Loan not found: {0}")]
    LoanNotFound(LoanId),

    #[error("No loan id left to issue after {0}")]
    LoanIdsExhausted(LoanId),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl DebtSnowballError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        DebtSnowballError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for DebtSnowballError {
    fn from(e: serde_json::Error) -> Self {
        DebtSnowballError::SerializationError(e.to_string())
    }
}
