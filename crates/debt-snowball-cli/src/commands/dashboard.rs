use clap::Args;
use serde::Serialize;
use serde_json::Value;

use debt_snowball_core::categories::{categorize, LoanCategory};
use debt_snowball_core::dashboard::{build_dashboard, DashboardInput};
use debt_snowball_core::DashboardConfig;

use crate::commands::LoanInputArgs;
use crate::input::loans::load_loans;

/// Arguments for category labelling
#[derive(Args)]
pub struct CategorizeArgs {
    /// Loan name to label
    #[arg(long)]
    pub name: String,
}

#[derive(Debug, Serialize)]
struct CategorizeOutput {
    name: String,
    category: LoanCategory,
    icon: &'static str,
    tone: &'static str,
}

/// Everything the dashboard renders, in one computation envelope.
pub fn run_dashboard(
    args: LoanInputArgs,
    cli_config: Option<&DashboardConfig>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let loaded = load_loans(args.input.as_deref())?;
    let config = loaded.effective_config(cli_config);

    let input = DashboardInput {
        loans: loaded.book.into_loans(),
        config,
    };
    let output = build_dashboard(&input)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_categorize(args: CategorizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let category = categorize(&args.name);
    let output = CategorizeOutput {
        name: args.name,
        category,
        icon: category.icon(),
        tone: category.tone(),
    };
    Ok(serde_json::to_value(output)?)
}
