use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PALETTE;
use crate::error::DebtSnowballError;
use crate::types::{Loan, LoanId, Money, Rate};
use crate::DebtSnowballResult;

/// One loan's slice of the circular overview chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSegment {
    pub id: LoanId,
    pub name: String,
    pub amount: Money,
    /// Share of the total, 0..=1
    pub percent: Rate,
    /// Sum of the percents of all preceding segments
    pub start: Rate,
    pub color: String,
}

/// Segments for `sorted_loans` in order, colored from the default palette.
///
/// A zero total yields no segments.
pub fn compute_chart_segments(sorted_loans: &[Loan], total: Money) -> Vec<ChartSegment> {
    build_segments(sorted_loans, total, &DEFAULT_PALETTE)
}

/// As [`compute_chart_segments`] with a caller-supplied palette.
pub fn compute_chart_segments_with_palette<S: AsRef<str>>(
    sorted_loans: &[Loan],
    total: Money,
    palette: &[S],
) -> DebtSnowballResult<Vec<ChartSegment>> {
    if palette.is_empty() {
        return Err(DebtSnowballError::invalid(
            "palette",
            "At least one color is required",
        ));
    }
    Ok(build_segments(sorted_loans, total, palette))
}

fn build_segments<S: AsRef<str>>(
    sorted_loans: &[Loan],
    total: Money,
    palette: &[S],
) -> Vec<ChartSegment> {
    if total.is_zero() {
        return Vec::new();
    }

    let mut accumulated = Decimal::ZERO;
    sorted_loans
        .iter()
        .enumerate()
        .map(|(index, loan)| {
            let percent = loan.amount / total;
            let start = accumulated;
            accumulated += percent;
            ChartSegment {
                id: loan.id,
                name: loan.name.clone(),
                amount: loan.amount,
                percent,
                start,
                color: palette[index % palette.len()].as_ref().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn loans() -> Vec<Loan> {
        vec![
            Loan::new(1u64, "A", dec!(100)),
            Loan::new(2u64, "B", dec!(300)),
            Loan::new(3u64, "C", dec!(600)),
        ]
    }

    #[test]
    fn test_percent_and_cumulative_start() {
        let segments = compute_chart_segments(&loans(), dec!(1000));
        let got: Vec<(Rate, Rate)> = segments.iter().map(|s| (s.percent, s.start)).collect();
        assert_eq!(
            got,
            vec![
                (dec!(0.1), dec!(0)),
                (dec!(0.3), dec!(0.1)),
                (dec!(0.6), dec!(0.4)),
            ]
        );
    }

    #[test]
    fn test_zero_total_yields_no_segments() {
        assert!(compute_chart_segments(&loans(), Decimal::ZERO).is_empty());
    }

    #[test]
    fn test_colors_wrap_around_palette() {
        let many: Vec<Loan> = (0..11u64)
            .map(|i| Loan::new(i, format!("L{i}"), dec!(1)))
            .collect();
        let segments = compute_chart_segments(&many, dec!(11));
        assert_eq!(segments[0].color, "#3b82f6");
        assert_eq!(segments[8].color, "#84cc16");
        assert_eq!(segments[9].color, segments[0].color);
        assert_eq!(segments[10].color, segments[1].color);
    }

    #[test]
    fn test_custom_palette() {
        let segments =
            compute_chart_segments_with_palette(&loans(), dec!(1000), &["red", "blue"]).unwrap();
        let colors: Vec<&str> = segments.iter().map(|s| s.color.as_str()).collect();
        assert_eq!(colors, vec!["red", "blue", "red"]);
    }

    #[test]
    fn test_empty_palette_rejected() {
        let palette: [&str; 0] = [];
        assert!(compute_chart_segments_with_palette(&loans(), dec!(1000), &palette).is_err());
    }
}
