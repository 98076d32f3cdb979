use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::charts::segments::ChartSegment;
use crate::types::{Length, LoanId};

/// Stroke parameters for one segment of the donut chart. Each segment is a
/// full circle whose dash pattern shows only `arc_length`, rotated so it
/// begins where the previous segment ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutArc {
    pub id: LoanId,
    pub color: String,
    pub arc_length: Length,
    /// Dash gap; the full circumference, so the pattern never repeats.
    pub gap: Length,
    pub rotation_degrees: Length,
}

impl DonutArc {
    /// Value for the SVG `stroke-dasharray` attribute.
    pub fn dasharray(&self) -> String {
        format!("{} {}", self.arc_length.normalize(), self.gap.normalize())
    }
}

pub fn donut_arcs(segments: &[ChartSegment], circumference: Length) -> Vec<DonutArc> {
    segments
        .iter()
        .map(|segment| DonutArc {
            id: segment.id,
            color: segment.color.clone(),
            arc_length: segment.percent * circumference,
            gap: circumference,
            rotation_degrees: segment.start * dec!(360),
        })
        .collect()
}
