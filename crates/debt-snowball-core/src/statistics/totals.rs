use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Loan, Money};

/// Amounts below this are small.
pub const SMALL_LIMIT: Money = dec!(10_000);
/// Amounts from SMALL_LIMIT up to (not including) this are medium.
pub const MEDIUM_LIMIT: Money = dec!(30_000);
/// Amounts from MEDIUM_LIMIT up to and including this are large; above is high.
pub const LARGE_LIMIT: Money = dec!(100_000);

/// Size bucket of a single loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountBand {
    Small,
    Medium,
    Large,
    High,
}

impl AmountBand {
    pub fn classify(amount: Money) -> Self {
        if amount < SMALL_LIMIT {
            AmountBand::Small
        } else if amount < MEDIUM_LIMIT {
            AmountBand::Medium
        } else if amount <= LARGE_LIMIT {
            AmountBand::Large
        } else {
            AmountBand::High
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanTotals {
    pub total: Money,
    pub count: usize,
    pub small_count: usize,
    pub medium_count: usize,
    pub large_count: usize,
    pub high_count: usize,
}

/// Total outstanding and the number of loans in each amount band.
pub fn compute_totals(loans: &[Loan]) -> LoanTotals {
    let mut totals = LoanTotals {
        total: Decimal::ZERO,
        ..LoanTotals::default()
    };

    for loan in loans {
        totals.total += loan.amount;
        totals.count += 1;
        match AmountBand::classify(loan.amount) {
            AmountBand::Small => totals.small_count += 1,
            AmountBand::Medium => totals.medium_count += 1,
            AmountBand::Large => totals.large_count += 1,
            AmountBand::High => totals.high_count += 1,
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_breakpoints() {
        assert_eq!(AmountBand::classify(dec!(9999.99)), AmountBand::Small);
        assert_eq!(AmountBand::classify(dec!(10000)), AmountBand::Medium);
        assert_eq!(AmountBand::classify(dec!(29999.99)), AmountBand::Medium);
        assert_eq!(AmountBand::classify(dec!(30000)), AmountBand::Large);
        assert_eq!(AmountBand::classify(dec!(100000)), AmountBand::Large);
        assert_eq!(AmountBand::classify(dec!(100000.01)), AmountBand::High);
    }

    #[test]
    fn test_empty_totals_are_zero() {
        let totals = compute_totals(&[]);
        assert_eq!(totals, LoanTotals::default());
        assert!(totals.total.is_zero());
    }

    #[test]
    fn test_totals_over_sample_loans() {
        let loans = vec![
            Loan::new(1u64, "One card Loan", dec!(12889)),
            Loan::new(2u64, "Fed Credit card", dec!(41300)),
            Loan::new(7u64, "Education Loan", dec!(140000)),
            Loan::new(9u64, "Kummatti fund", dec!(3000)),
        ];
        let totals = compute_totals(&loans);
        assert_eq!(totals.total, dec!(197189));
        assert_eq!(totals.count, 4);
        assert_eq!(totals.small_count, 1);
        assert_eq!(totals.medium_count, 1);
        assert_eq!(totals.large_count, 1);
        assert_eq!(totals.high_count, 1);
    }
}
