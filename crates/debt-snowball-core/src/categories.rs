use serde::{Deserialize, Serialize};

use crate::types::{Loan, LoanId};

/// Display category inferred from a loan's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanCategory {
    CreditCard,
    Housing,
    Vehicle,
    Education,
    Wedding,
    Groceries,
    General,
}

impl LoanCategory {
    pub fn icon(&self) -> &'static str {
        match self {
            LoanCategory::CreditCard => "💳",
            LoanCategory::Housing => "🏠",
            LoanCategory::Vehicle => "🚗",
            LoanCategory::Education => "🎓",
            LoanCategory::Wedding => "💍",
            LoanCategory::Groceries => "🛒",
            LoanCategory::General => "💸",
        }
    }

    /// Color family used for the category badge.
    pub fn tone(&self) -> &'static str {
        match self {
            LoanCategory::CreditCard => "purple",
            LoanCategory::Housing => "blue",
            LoanCategory::Vehicle => "indigo",
            LoanCategory::Education => "green",
            LoanCategory::Wedding => "pink",
            LoanCategory::Groceries => "yellow",
            LoanCategory::General => "slate",
        }
    }
}

// Order matters: "card" must be tested before "car".
const RULES: &[(&[&str], LoanCategory)] = &[
    (&["card", "cred"], LoanCategory::CreditCard),
    (&["home", "house"], LoanCategory::Housing),
    (&["car", "auto"], LoanCategory::Vehicle),
    (&["edu", "school"], LoanCategory::Education),
    (&["marriage", "wedding"], LoanCategory::Wedding),
    (&["food", "grocery"], LoanCategory::Groceries),
];

/// First rule whose keyword appears in the lower-cased name wins.
pub fn categorize(name: &str) -> LoanCategory {
    let lowered = name.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, category)| *category)
        .unwrap_or(LoanCategory::General)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLabel {
    pub id: LoanId,
    pub category: LoanCategory,
    pub icon: String,
    pub tone: String,
}

impl CategoryLabel {
    pub fn for_loan(loan: &Loan) -> Self {
        let category = categorize(&loan.name);
        CategoryLabel {
            id: loan.id,
            category,
            icon: category.icon().to_string(),
            tone: category.tone().to_string(),
        }
    }
}

pub fn label_loans(loans: &[Loan]) -> Vec<CategoryLabel> {
    loans.iter().map(CategoryLabel::for_loan).collect()
}
