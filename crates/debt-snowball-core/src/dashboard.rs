use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::categories::{label_loans, CategoryLabel};
use crate::charts::{
    compute_chart_segments_with_palette, donut_arcs, priority_loans, pyramid_widths,
    ChartSegment, DonutArc, PriorityLoan, PyramidBar,
};
use crate::config::DashboardConfig;
use crate::loans::LoanBook;
use crate::statistics::{compute_totals, derive_sorted_loans, LoanTotals};
use crate::types::*;
use crate::DebtSnowballResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardInput {
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub config: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOutput {
    /// Snowball order, smallest first
    pub sorted_loans: Vec<Loan>,
    pub totals: LoanTotals,
    pub segments: Vec<ChartSegment>,
    pub donut_circumference: Length,
    pub donut_arcs: Vec<DonutArc>,
    pub pyramid: Vec<PyramidBar>,
    pub priority: Vec<PriorityLoan>,
    pub ring_circumference: Length,
    pub categories: Vec<CategoryLabel>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Derive everything the dashboard view renders from one loan snapshot.
///
/// The collection is loaded like any other (unique ids, trimmed valid
/// names, positive amounts) before any derivation runs.
pub fn build_dashboard(
    input: &DashboardInput,
) -> DebtSnowballResult<ComputationOutput<DashboardOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    let config = &input.config;

    config.validate()?;
    let book = LoanBook::from_loans(input.loans.clone())?;

    if input.loans.is_empty() {
        warnings.push("No loans recorded; chart segments are empty".into());
    }
    if input.loans.len() > config.palette.len() {
        warnings.push(format!(
            "{} loans share {} palette colors; colors repeat after position {}",
            input.loans.len(),
            config.palette.len(),
            config.palette.len()
        ));
    }

    let sorted = derive_sorted_loans(book.loans());
    let totals = compute_totals(&sorted);
    let segments =
        compute_chart_segments_with_palette(&sorted, totals.total, config.palette.as_slice())?;

    let donut_circumference = config.donut.circumference();
    let arcs = donut_arcs(&segments, donut_circumference);
    let pyramid = pyramid_widths(&sorted, config.pyramid_min_width, config.pyramid_max_width);
    let priority = priority_loans(&sorted, totals.total, config.priority_count, &config.ring);
    let categories = label_loans(&sorted);

    debug!(loans = sorted.len(), total = %totals.total, "built dashboard");

    let output = DashboardOutput {
        sorted_loans: sorted,
        totals,
        segments,
        donut_circumference,
        donut_arcs: arcs,
        pyramid,
        priority,
        ring_circumference: config.ring.circumference(),
        categories,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "ordering": "ascending amount, stable on ties",
        "bands": {
            "small": "< 10000",
            "medium": "[10000, 30000)",
            "large": "[30000, 100000]",
            "high": "> 100000",
        },
        "priority_count": config.priority_count,
        "palette_size": config.palette.len(),
    });

    Ok(with_metadata(
        "Debt Snowball Dashboard (smallest balance first)",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DebtSnowballError;
    use rust_decimal_macros::dec;

    fn base_input() -> DashboardInput {
        DashboardInput {
            loans: vec![
                Loan::new(3u64, "Marriage Loan", dec!(344500)),
                Loan::new(1u64, "One card Loan", dec!(235.41)),
                Loan::new(2u64, "Education Loan", dec!(12824)),
            ],
            config: DashboardConfig::default(),
        }
    }

    #[test]
    fn test_all_views_share_sorted_order() {
        let out = build_dashboard(&base_input()).unwrap().result;
        let order: Vec<u64> = out.sorted_loans.iter().map(|l| l.id.0).collect();
        assert_eq!(order, vec![1, 2, 3]);
        let seg_order: Vec<u64> = out.segments.iter().map(|s| s.id.0).collect();
        assert_eq!(seg_order, order);
        assert_eq!(out.donut_arcs.len(), 3);
        assert_eq!(out.pyramid.len(), 3);
        assert_eq!(out.categories.len(), 3);
        assert_eq!(out.priority.len(), 3);
    }

    #[test]
    fn test_empty_collection_warns() {
        let input = DashboardInput {
            loans: Vec::new(),
            config: DashboardConfig::default(),
        };
        let out = build_dashboard(&input).unwrap();
        assert!(out.result.segments.is_empty());
        assert!(out.result.totals.total.is_zero());
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut input = base_input();
        input.loans[0].id = LoanId(2);
        match build_dashboard(&input).unwrap_err() {
            DebtSnowballError::DuplicateLoanId(id) => assert_eq!(id, LoanId(2)),
            other => panic!("Expected DuplicateLoanId, got {other:?}"),
        }
    }

    #[test]
    fn test_palette_wrap_warning() {
        let mut input = base_input();
        input.config.palette = vec!["#000000".into(), "#ffffff".into()];
        let out = build_dashboard(&input).unwrap();
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.result.segments[2].color, "#000000");
    }

    #[test]
    fn test_metadata_populated() {
        let out = build_dashboard(&base_input()).unwrap();
        assert!(!out.methodology.is_empty());
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
    }
}
