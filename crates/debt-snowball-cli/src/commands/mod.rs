pub mod book;
pub mod charts;
pub mod dashboard;
pub mod stats;

use clap::Args;

/// Loan collection source shared by every command that reads loans
#[derive(Args)]
pub struct LoanInputArgs {
    /// Path to a JSON or YAML loan file (otherwise read JSON from stdin)
    #[arg(long)]
    pub input: Option<String>,
}
