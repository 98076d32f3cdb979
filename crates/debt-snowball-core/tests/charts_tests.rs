use debt_snowball_core::charts::{
    compute_chart_segments, compute_pyramid_width, compute_ring_offset, donut_arcs,
    priority_loans, pyramid_widths,
};
use debt_snowball_core::statistics::{compute_totals, derive_sorted_loans};
use debt_snowball_core::{ChartDimensions, Loan};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn sample_loans() -> Vec<Loan> {
    vec![
        Loan::new(1u64, "One card Loan", dec!(12889)),
        Loan::new(2u64, "Fed Credit card", dec!(41300)),
        Loan::new(7u64, "Education Loan", dec!(140000)),
        Loan::new(9u64, "Kummatti fund", dec!(3000)),
    ]
}

// ===========================================================================
// Donut chart
// ===========================================================================

#[test]
fn test_segments_percent_sum_to_one() {
    let sorted = derive_sorted_loans(&sample_loans());
    let total = compute_totals(&sorted).total;
    let segments = compute_chart_segments(&sorted, total);

    let sum: Decimal = segments.iter().map(|s| s.percent).sum();
    assert!((sum - Decimal::ONE).abs() < dec!(0.000000000001));
}

#[test]
fn test_each_segment_starts_where_previous_ends() {
    let sorted = derive_sorted_loans(&sample_loans());
    let total = compute_totals(&sorted).total;
    let segments = compute_chart_segments(&sorted, total);

    for pair in segments.windows(2) {
        assert_eq!(pair[1].start, pair[0].start + pair[0].percent);
    }
    assert!(segments.last().unwrap().start < Decimal::ONE);
}

#[test]
fn test_donut_arcs_span_full_circle() {
    let sorted = derive_sorted_loans(&sample_loans());
    let total = compute_totals(&sorted).total;
    let segments = compute_chart_segments(&sorted, total);
    let circumference = ChartDimensions::donut().circumference();
    let arcs = donut_arcs(&segments, circumference);

    let drawn: Decimal = arcs.iter().map(|a| a.arc_length).sum();
    assert!((drawn - circumference).abs() < dec!(0.0000001));
    assert_eq!(arcs[0].rotation_degrees, Decimal::ZERO);
    assert!(arcs.iter().all(|a| a.gap == circumference));
}

// ===========================================================================
// Pyramid and rings
// ===========================================================================

#[test]
fn test_pyramid_smallest_and_largest() {
    let sorted = derive_sorted_loans(&sample_loans());
    let bars = pyramid_widths(&sorted, dec!(30), dec!(100));
    assert_eq!(bars.first().unwrap().width, dec!(30));
    assert_eq!(bars.last().unwrap().width, dec!(100));
    for pair in bars.windows(2) {
        assert!(pair[0].width <= pair[1].width);
    }
}

#[test]
fn test_pyramid_single_loan() {
    let loan = Loan::new(1u64, "Only", dec!(900));
    assert_eq!(
        compute_pyramid_width(&loan, dec!(900), dec!(900), dec!(25), dec!(90)),
        dec!(25)
    );
}

#[test]
fn test_ring_offset_bounds() {
    let c = ChartDimensions::ring().circumference();
    assert_eq!(compute_ring_offset(Decimal::ZERO, c), c);
    assert_eq!(compute_ring_offset(Decimal::ONE, c), Decimal::ZERO);
}

#[test]
fn test_priority_follows_snowball() {
    let sorted = derive_sorted_loans(&sample_loans());
    let total = compute_totals(&sorted).total;
    let focus = priority_loans(&sorted, total, 3, &ChartDimensions::ring());

    let names: Vec<&str> = focus.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Kummatti fund", "One card Loan", "Fed Credit card"]);
    assert!(focus[0].ring_offset > focus[1].ring_offset);
}
