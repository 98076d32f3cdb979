use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::statistics::amount_range;
use crate::types::{Length, Loan, LoanId, Money};

/// One row of the payoff pyramid: the bar grows with the loan's amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PyramidBar {
    pub id: LoanId,
    pub name: String,
    pub amount: Money,
    pub width: Length,
}

/// Interpolate a bar width between `min_width` and `max_width` by the
/// loan's position in `[min_amount, max_amount]`.
///
/// Returns `min_width` when the range is empty (every loan equal). Amounts
/// outside the range are pinned to its ends, so the result always lies in
/// `[min_width, max_width]`.
pub fn compute_pyramid_width(
    loan: &Loan,
    min_amount: Money,
    max_amount: Money,
    min_width: Length,
    max_width: Length,
) -> Length {
    if max_amount == min_amount {
        return min_width;
    }
    let ratio = ((loan.amount - min_amount) / (max_amount - min_amount))
        .clamp(Decimal::ZERO, Decimal::ONE);
    min_width + ratio * (max_width - min_width)
}

/// Bars for every loan, with the amount range taken from the loans themselves.
pub fn pyramid_widths(loans: &[Loan], min_width: Length, max_width: Length) -> Vec<PyramidBar> {
    let Some((min_amount, max_amount)) = amount_range(loans) else {
        return Vec::new();
    };

    loans
        .iter()
        .map(|loan| PyramidBar {
            id: loan.id,
            name: loan.name.clone(),
            amount: loan.amount,
            width: compute_pyramid_width(loan, min_amount, max_amount, min_width, max_width),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_linear_interpolation() {
        let loan = Loan::new(1u64, "A", dec!(550));
        let width = compute_pyramid_width(&loan, dec!(100), dec!(1000), dec!(20), dec!(100));
        // 20 + (450 / 900) * 80
        assert_eq!(width, dec!(60));
    }

    #[test]
    fn test_range_ends_map_to_width_ends() {
        let low = Loan::new(1u64, "low", dec!(100));
        let high = Loan::new(2u64, "high", dec!(1000));
        assert_eq!(
            compute_pyramid_width(&low, dec!(100), dec!(1000), dec!(20), dec!(100)),
            dec!(20)
        );
        assert_eq!(
            compute_pyramid_width(&high, dec!(100), dec!(1000), dec!(20), dec!(100)),
            dec!(100)
        );
    }

    #[test]
    fn test_equal_amounts_give_min_width() {
        let loan = Loan::new(1u64, "A", dec!(500));
        assert_eq!(
            compute_pyramid_width(&loan, dec!(500), dec!(500), dec!(30), dec!(100)),
            dec!(30)
        );
    }

    #[test]
    fn test_amount_outside_range_is_pinned() {
        let loan = Loan::new(1u64, "A", dec!(5000));
        assert_eq!(
            compute_pyramid_width(&loan, dec!(100), dec!(1000), dec!(20), dec!(100)),
            dec!(100)
        );
    }

    #[test]
    fn test_bars_follow_input_order() {
        let loans = vec![
            Loan::new(9u64, "Kummatti fund", dec!(3000)),
            Loan::new(1u64, "One card Loan", dec!(12889)),
            Loan::new(8u64, "Marriage Loan", dec!(332500)),
        ];
        let bars = pyramid_widths(&loans, dec!(30), dec!(100));
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].width, dec!(30));
        assert_eq!(bars[2].width, dec!(100));
        assert!(bars[1].width > dec!(30) && bars[1].width < dec!(40));
    }

    #[test]
    fn test_no_loans_no_bars() {
        assert!(pyramid_widths(&[], dec!(30), dec!(100)).is_empty());
    }
}
