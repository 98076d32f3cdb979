use debt_snowball_core::charts::{compute_chart_segments, compute_pyramid_width, compute_ring_offset};
use debt_snowball_core::statistics::{amount_range, compute_totals, derive_sorted_loans};
use debt_snowball_core::Loan;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Amounts from 0.01 up to ten million, in whole cents.
fn amount() -> impl Strategy<Value = Decimal> {
    (1i64..=1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn loans() -> impl Strategy<Value = Vec<Loan>> {
    prop::collection::vec(amount(), 0..40).prop_map(|amounts| {
        amounts
            .into_iter()
            .enumerate()
            .map(|(i, a)| Loan::new(i as u64 + 1, format!("Loan {}", i + 1), a))
            .collect()
    })
}

proptest! {
    #[test]
    fn sorted_is_non_decreasing_permutation(input in loans()) {
        let sorted = derive_sorted_loans(&input);
        prop_assert!(sorted.windows(2).all(|w| w[0].amount <= w[1].amount));

        let mut before: Vec<u64> = input.iter().map(|l| l.id.0).collect();
        let mut after: Vec<u64> = sorted.iter().map(|l| l.id.0).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn equal_amounts_keep_input_order(input in loans()) {
        let sorted = derive_sorted_loans(&input);
        for w in sorted.windows(2) {
            if w[0].amount == w[1].amount {
                // ids were assigned in input order
                prop_assert!(w[0].id < w[1].id);
            }
        }
    }

    #[test]
    fn total_is_sum_and_bands_partition_count(input in loans()) {
        let totals = compute_totals(&input);
        let sum: Decimal = input.iter().map(|l| l.amount).sum();
        prop_assert_eq!(totals.total, sum);
        prop_assert_eq!(totals.count, input.len());
        prop_assert_eq!(
            totals.small_count + totals.medium_count + totals.large_count + totals.high_count,
            input.len()
        );
    }

    #[test]
    fn segment_percents_sum_to_one(input in loans()) {
        let sorted = derive_sorted_loans(&input);
        let total = compute_totals(&sorted).total;
        let segments = compute_chart_segments(&sorted, total);
        if input.is_empty() {
            prop_assert!(segments.is_empty());
        } else {
            let sum: Decimal = segments.iter().map(|s| s.percent).sum();
            prop_assert!((sum - Decimal::ONE).abs() < dec!(0.000000001));
            prop_assert!(segments.iter().all(|s| s.start >= Decimal::ZERO && s.start < Decimal::ONE));
        }
    }

    #[test]
    fn pyramid_width_stays_in_bounds(
        input in loans(),
        min_width in 0u32..200,
        extra in 0u32..200,
    ) {
        let min_width = Decimal::from(min_width);
        let max_width = min_width + Decimal::from(extra);
        if let Some((lo, hi)) = amount_range(&input) {
            for loan in &input {
                let w = compute_pyramid_width(loan, lo, hi, min_width, max_width);
                prop_assert!(w >= min_width && w <= max_width);
                if lo == hi {
                    prop_assert_eq!(w, min_width);
                }
            }
        }
    }

    #[test]
    fn ring_offset_is_complement(percent in 0u32..=1000, circumference in 1u32..10_000) {
        let p = Decimal::new(percent as i64, 3);
        let c = Decimal::from(circumference);
        let offset = compute_ring_offset(p, c);
        prop_assert_eq!(offset + p * c, c);
    }
}
