//! Text formatting for amounts and shares as the dashboard shows them.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Loan, LoanId, Money};

fn round_half_up(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Amount in thousands with a `k` suffix, e.g. `12.9k`.
pub fn format_thousands(amount: Money, decimals: u32) -> String {
    let value = round_half_up(amount / dec!(1000), decimals);
    format!("{:.*}k", decimals as usize, value)
}

/// `amount` as a percentage of `total`, e.g. `3.6%`. A zero total reads as 0.
pub fn format_share(amount: Money, total: Money, decimals: u32) -> String {
    let share = if total.is_zero() {
        Decimal::ZERO
    } else {
        round_half_up(amount / total * dec!(100), decimals)
    };
    format!("{:.*}%", decimals as usize, share)
}

/// Indian digit grouping: the last three integer digits, then pairs.
/// Fractions are rounded to two places and trailing zeros dropped,
/// e.g. `3,57,559.41` or `12,824`.
pub fn format_grouped(amount: Money) -> String {
    let rounded = round_half_up(amount, 2).normalize();
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + text.len() / 2);
    if integer.len() > 3 {
        let (head, tail) = integer.split_at(integer.len() - 3);
        let lead = head.len() % 2;
        if lead == 1 {
            grouped.push_str(&head[..1]);
        }
        for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
            if i > 0 || lead == 1 {
                grouped.push(',');
            }
            // ASCII digits only
            grouped.push_str(std::str::from_utf8(pair).unwrap_or_default());
        }
        grouped.push(',');
        grouped.push_str(tail);
    } else {
        grouped.push_str(integer);
    }

    if let Some(f) = fraction {
        grouped.push('.');
        grouped.push_str(f);
    }
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.insert(0, '-');
    }
    grouped
}

/// Display strings for one loan row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDisplay {
    pub id: LoanId,
    pub name: String,
    /// Full amount, en-IN grouped
    pub amount: String,
    pub thousands: String,
    /// Share of `total`
    pub share: String,
}

impl LoanDisplay {
    pub fn for_loan(loan: &Loan, total: Money) -> Self {
        LoanDisplay {
            id: loan.id,
            name: loan.name.clone(),
            amount: format_grouped(loan.amount),
            thousands: format_thousands(loan.amount, 1),
            share: format_share(loan.amount, total, 1),
        }
    }
}

pub fn display_loans(loans: &[Loan], total: Money) -> Vec<LoanDisplay> {
    loans.iter().map(|l| LoanDisplay::for_loan(l, total)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(format_thousands(dec!(12889), 1), "12.9k");
        assert_eq!(format_thousands(dec!(3000), 1), "3.0k");
        assert_eq!(format_thousands(dec!(357559.41), 0), "358k");
    }

    #[test]
    fn test_share() {
        assert_eq!(format_share(dec!(235.41), dec!(357559.41), 1), "0.1%");
        assert_eq!(format_share(dec!(1), dec!(4), 0), "25%");
        assert_eq!(format_share(dec!(1), Decimal::ZERO, 1), "0.0%");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_grouped(dec!(357559.41)), "3,57,559.41");
        assert_eq!(format_grouped(dec!(12824)), "12,824");
        assert_eq!(format_grouped(dec!(665550)), "6,65,550");
        assert_eq!(format_grouped(dec!(12345678)), "1,23,45,678");
        assert_eq!(format_grouped(dec!(999)), "999");
        assert_eq!(format_grouped(dec!(1000.50)), "1,000.5");
        assert_eq!(format_grouped(dec!(-1234)), "-1,234");
    }

    #[test]
    fn test_loan_rows() {
        let loans = vec![
            Loan::new(1u64, "One card Loan", dec!(235.41)),
            Loan::new(2u64, "Education Loan", dec!(12824)),
        ];
        let rows = display_loans(&loans, dec!(357559.41));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].amount, "235.41");
        assert_eq!(rows[0].thousands, "0.2k");
        assert_eq!(rows[0].share, "0.1%");
        assert_eq!(rows[1].amount, "12,824");
        assert_eq!(rows[1].thousands, "12.8k");
        assert_eq!(rows[1].share, "3.6%");
    }
}
