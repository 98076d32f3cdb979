pub mod donut;
pub mod priority;
pub mod pyramid;
pub mod ring;
pub mod segments;

pub use donut::{donut_arcs, DonutArc};
pub use priority::{priority_loans, PriorityLoan};
pub use pyramid::{compute_pyramid_width, pyramid_widths, PyramidBar};
pub use ring::compute_ring_offset;
pub use segments::{compute_chart_segments, compute_chart_segments_with_palette, ChartSegment};
