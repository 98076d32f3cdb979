use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::DebtSnowballError;
use crate::types::Money;
use crate::DebtSnowballResult;

/// Longest loan name accepted, counted in characters after trimming.
pub const MAX_NAME_LEN: usize = 50;

/// Largest amount a single loan may carry (10^15). Keeps any realistic
/// collection's total far below `Decimal::MAX`.
pub const MAX_AMOUNT: Money = dec!(1000000000000000);

/// A validated name/amount pair, ready to be added to a book or applied as
/// an edit. Construction is the only place loan fields are validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDraft {
    pub name: String,
    pub amount: Money,
}

impl LoanDraft {
    pub fn new(name: &str, amount: Money) -> DebtSnowballResult<Self> {
        let name = validate_name(name)?;
        validate_amount(amount)?;
        Ok(LoanDraft { name, amount })
    }

    /// Validate raw form text. The amount must parse as a decimal number.
    pub fn parse(name: &str, amount: &str) -> DebtSnowballResult<Self> {
        let name = validate_name(name)?;
        let amount = parse_amount(amount)?;
        validate_amount(amount)?;
        Ok(LoanDraft { name, amount })
    }
}

/// Trim and check a loan name, returning the trimmed form.
pub fn validate_name(name: &str) -> DebtSnowballResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DebtSnowballError::invalid("name", "Loan name must not be empty"));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(DebtSnowballError::invalid(
            "name",
            format!("Loan name must be at most {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn validate_amount(amount: Money) -> DebtSnowballResult<()> {
    if amount <= Decimal::ZERO {
        return Err(DebtSnowballError::invalid("amount", "Amount must be positive"));
    }
    if amount > MAX_AMOUNT {
        return Err(DebtSnowballError::invalid(
            "amount",
            format!("Amount must not exceed {MAX_AMOUNT}"),
        ));
    }
    Ok(())
}

/// Parse a user-entered amount. Plain and scientific notation are accepted;
/// anything else is rejected rather than coerced.
pub fn parse_amount(text: &str) -> DebtSnowballResult<Money> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DebtSnowballError::invalid("amount", "Amount is required"));
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| {
            DebtSnowballError::invalid("amount", format!("'{trimmed}' is not a number"))
        })
}
