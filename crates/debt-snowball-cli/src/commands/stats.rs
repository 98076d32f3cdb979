use serde_json::Value;

use debt_snowball_core::display::display_loans;
use debt_snowball_core::statistics::{compute_totals, derive_sorted_loans};

use crate::commands::LoanInputArgs;
use crate::input::loans::load_loans;

/// Loans in snowball order, smallest balance first.
pub fn run_sort(args: LoanInputArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loaded = load_loans(args.input.as_deref())?;
    let sorted = derive_sorted_loans(loaded.book.loans());
    Ok(serde_json::to_value(sorted)?)
}

/// Total outstanding and per-band loan counts.
pub fn run_totals(args: LoanInputArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loaded = load_loans(args.input.as_deref())?;
    let totals = compute_totals(loaded.book.loans());
    Ok(serde_json::to_value(totals)?)
}

/// Snowball-ordered rows with amounts formatted for display.
pub fn run_display(args: LoanInputArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loaded = load_loans(args.input.as_deref())?;
    let sorted = derive_sorted_loans(loaded.book.loans());
    let total = compute_totals(&sorted).total;
    Ok(serde_json::to_value(display_loans(&sorted, total))?)
}
