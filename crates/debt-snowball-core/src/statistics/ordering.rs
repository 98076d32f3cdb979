use crate::types::{Loan, Money};

/// Snowball order: smallest outstanding amount first. Loans with equal
/// amounts keep their relative input order. The input is not modified.
pub fn derive_sorted_loans(loans: &[Loan]) -> Vec<Loan> {
    let mut sorted = loans.to_vec();
    // sort_by is stable
    sorted.sort_by(|a, b| a.amount.cmp(&b.amount));
    sorted
}

/// Smallest and largest amount in the collection, or `None` when empty.
pub fn amount_range(loans: &[Loan]) -> Option<(Money, Money)> {
    let min = loans.iter().map(|l| l.amount).min()?;
    let max = loans.iter().map(|l| l.amount).max()?;
    Some((min, max))
}
