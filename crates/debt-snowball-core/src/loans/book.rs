use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::DebtSnowballError;
use crate::loans::draft::LoanDraft;
use crate::types::{Loan, LoanId};
use crate::DebtSnowballResult;

/// In-memory loan collection for one session.
///
/// Loans keep their insertion order; every derived view (sorting, totals,
/// chart geometry) is recomputed from [`LoanBook::loans`] on demand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoanBook {
    loans: Vec<Loan>,
    /// Largest id ever issued or loaded, including removed loans.
    highest_id: u64,
}

impl LoanBook {
    pub fn new() -> Self {
        LoanBook::default()
    }

    /// Load an existing collection. Names are normalised to their trimmed
    /// form; duplicate ids and invalid fields reject the whole collection.
    pub fn from_loans(loans: Vec<Loan>) -> DebtSnowballResult<Self> {
        validate_collection(&loans)?;

        let highest_id = loans.iter().map(|l| l.id.0).max().unwrap_or(0);
        let loans = loans
            .into_iter()
            .map(|loan| Loan {
                name: loan.name.trim().to_string(),
                ..loan
            })
            .collect::<Vec<_>>();

        debug!(count = loans.len(), "loaded loan book");
        Ok(LoanBook { loans, highest_id })
    }

    /// Add a loan with an id derived from the current time.
    pub fn add(&mut self, draft: LoanDraft) -> DebtSnowballResult<Loan> {
        self.add_at(draft, Utc::now().timestamp_millis())
    }

    /// Add a loan with an id derived from `now_millis`. When that timestamp
    /// is not newer than every id already issued, the next free integer is
    /// used instead so ids stay unique. Fails once `u64::MAX` has been issued.
    pub fn add_at(&mut self, draft: LoanDraft, now_millis: i64) -> DebtSnowballResult<Loan> {
        let candidate = u64::try_from(now_millis).unwrap_or(0);
        let id = if candidate > self.highest_id {
            candidate
        } else {
            self.highest_id.checked_add(1).ok_or_else(|| {
                warn!(highest_id = self.highest_id, "loan id space exhausted");
                DebtSnowballError::LoanIdsExhausted(LoanId(self.highest_id))
            })?
        };
        self.highest_id = id;

        let loan = Loan {
            id: LoanId(id),
            name: draft.name,
            amount: draft.amount,
        };
        debug!(id = %loan.id, amount = %loan.amount, "added loan");
        self.loans.push(loan.clone());
        Ok(loan)
    }

    /// Replace the name and amount of one loan. Position and id are kept.
    pub fn update(&mut self, id: LoanId, draft: LoanDraft) -> DebtSnowballResult<&Loan> {
        let loan = self
            .loans
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(DebtSnowballError::LoanNotFound(id))?;

        loan.name = draft.name;
        loan.amount = draft.amount;
        debug!(id = %id, amount = %loan.amount, "updated loan");
        Ok(&*loan)
    }

    /// Remove exactly one loan, returning it.
    pub fn remove(&mut self, id: LoanId) -> DebtSnowballResult<Loan> {
        let index = self
            .loans
            .iter()
            .position(|l| l.id == id)
            .ok_or(DebtSnowballError::LoanNotFound(id))?;

        let removed = self.loans.remove(index);
        debug!(id = %id, remaining = self.loans.len(), "removed loan");
        Ok(removed)
    }

    pub fn get(&self, id: LoanId) -> Option<&Loan> {
        self.loans.iter().find(|l| l.id == id)
    }

    /// Loans in insertion order.
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn into_loans(self) -> Vec<Loan> {
        self.loans
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }
}

/// Check a loan collection arriving from outside the book: ids must be
/// unique and every loan must pass the same checks as a [`LoanDraft`].
pub fn validate_collection(loans: &[Loan]) -> DebtSnowballResult<()> {
    let mut seen = HashSet::with_capacity(loans.len());
    for loan in loans {
        if !seen.insert(loan.id) {
            warn!(id = %loan.id, "rejected loan collection with duplicate id");
            return Err(DebtSnowballError::DuplicateLoanId(loan.id));
        }
        if let Err(e) = LoanDraft::new(&loan.name, loan.amount) {
            warn!(id = %loan.id, error = %e, "rejected loan collection with invalid loan");
            return Err(e);
        }
    }
    Ok(())
}
