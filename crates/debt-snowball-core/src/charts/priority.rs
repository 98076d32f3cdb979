use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::charts::ring::compute_ring_offset;
use crate::types::{ChartDimensions, Length, Loan, LoanId, Money, Rate};

const FOCUS_COLOR: &str = "#2563eb";
const QUEUED_COLOR: &str = "#8b5cf6";

/// A loan in the snowball focus: the next few balances to pay off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityLoan {
    /// 1-based position in payoff order
    pub rank: usize,
    pub id: LoanId,
    pub name: String,
    pub amount: Money,
    pub share: Rate,
    pub ring_offset: Length,
    /// The loan currently being paid down
    pub is_focus: bool,
    pub color: String,
}

/// The first `count` loans of a smallest-first ordering, with the progress
/// ring geometry for each.
pub fn priority_loans(
    sorted_loans: &[Loan],
    total: Money,
    count: usize,
    ring: &ChartDimensions,
) -> Vec<PriorityLoan> {
    let circumference = ring.circumference();

    sorted_loans
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, loan)| {
            let share = if total.is_zero() {
                Decimal::ZERO
            } else {
                loan.amount / total
            };
            let is_focus = index == 0;
            PriorityLoan {
                rank: index + 1,
                id: loan.id,
                name: loan.name.clone(),
                amount: loan.amount,
                share,
                ring_offset: compute_ring_offset(share, circumference),
                is_focus,
                color: if is_focus { FOCUS_COLOR } else { QUEUED_COLOR }.to_string(),
            }
        })
        .collect()
}
