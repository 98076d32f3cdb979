pub mod ordering;
pub mod totals;

pub use ordering::{amount_range, derive_sorted_loans};
pub use totals::{compute_totals, AmountBand, LoanTotals};
