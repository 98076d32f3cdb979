use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use debt_snowball_core::{DashboardConfig, Loan, LoanBook};

use crate::input;

/// Object form of a loan document: a `loans` array plus an optional
/// embedded dashboard `config`. A bare array is also accepted.
#[derive(Debug, Deserialize)]
struct WrappedDocument {
    loans: Vec<Loan>,
    #[serde(default)]
    config: Option<DashboardConfig>,
}

/// Pick the document form by shape first, so a bad field inside either
/// form is reported as itself.
fn split_document(
    document: Value,
) -> Result<(Vec<Loan>, Option<DashboardConfig>), serde_json::Error> {
    if document.is_array() {
        Ok((serde_json::from_value(document)?, None))
    } else {
        let wrapped: WrappedDocument = serde_json::from_value(document)?;
        Ok((wrapped.loans, wrapped.config))
    }
}

/// A validated loan collection plus any configuration it carried.
pub struct LoadedLoans {
    pub book: LoanBook,
    pub config: Option<DashboardConfig>,
}

impl LoadedLoans {
    /// A `--config` file wins over a config embedded in the input document.
    pub fn effective_config(&self, cli_config: Option<&DashboardConfig>) -> DashboardConfig {
        cli_config
            .cloned()
            .or_else(|| self.config.clone())
            .unwrap_or_default()
    }
}

/// Load loans from `--input`, falling back to JSON piped on stdin.
/// Duplicate ids and invalid loans reject the whole document.
pub fn load_loans(path: Option<&str>) -> Result<LoadedLoans, Box<dyn std::error::Error>> {
    let document: Value = if let Some(path) = path {
        input::file::read_document(path)?
    } else if let Some(document) = input::stdin::read_stdin()? {
        document
    } else {
        return Err("--input file is required (or pipe loan JSON on stdin)".into());
    };

    let (loans, config) =
        split_document(document).map_err(|e| format!("Invalid loan document: {e}"))?;

    let book = LoanBook::from_loans(loans)?;
    debug!(count = book.len(), "loaded loans");
    Ok(LoadedLoans { book, config })
}
