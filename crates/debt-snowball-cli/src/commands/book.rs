use clap::Args;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use debt_snowball_core::{Loan, LoanBook, LoanDraft, LoanId};

use crate::commands::LoanInputArgs;
use crate::input::loans::load_loans;

/// Arguments for adding a loan
#[derive(Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub loans: LoanInputArgs,

    /// Start from an empty collection instead of reading input
    #[arg(long, conflicts_with = "input")]
    pub empty: bool,

    /// Loan name
    #[arg(long)]
    pub name: String,

    /// Outstanding amount
    #[arg(long)]
    pub amount: String,
}

/// Arguments for editing a loan
#[derive(Args)]
pub struct EditArgs {
    #[command(flatten)]
    pub loans: LoanInputArgs,

    /// Id of the loan to edit
    #[arg(long)]
    pub id: u64,

    /// New loan name
    #[arg(long)]
    pub name: String,

    /// New outstanding amount
    #[arg(long)]
    pub amount: String,
}

/// Arguments for removing a loan
#[derive(Args)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub loans: LoanInputArgs,

    /// Id of the loan to remove
    #[arg(long)]
    pub id: u64,
}

/// The affected loan and the collection after the change. The input file
/// itself is never rewritten.
#[derive(Debug, Serialize)]
struct MutationOutput {
    action: &'static str,
    loan: Loan,
    loans: Vec<Loan>,
}

pub fn run_add(args: AddArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let draft = LoanDraft::parse(&args.name, &args.amount)?;
    let mut book = if args.empty {
        LoanBook::new()
    } else {
        load_loans(args.loans.input.as_deref())?.book
    };

    let loan = book.add(draft)?;
    info!(id = %loan.id, "loan added");
    mutation_output("added", loan, book)
}

pub fn run_edit(args: EditArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let draft = LoanDraft::parse(&args.name, &args.amount)?;
    let mut book = load_loans(args.loans.input.as_deref())?.book;

    let loan = book.update(LoanId(args.id), draft)?.clone();
    info!(id = %loan.id, "loan updated");
    mutation_output("updated", loan, book)
}

pub fn run_remove(args: RemoveArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut book = load_loans(args.loans.input.as_deref())?.book;

    let loan = book.remove(LoanId(args.id))?;
    info!(id = %loan.id, "loan removed");
    mutation_output("removed", loan, book)
}

fn mutation_output(
    action: &'static str,
    loan: Loan,
    book: LoanBook,
) -> Result<Value, Box<dyn std::error::Error>> {
    let output = MutationOutput {
        action,
        loan,
        loans: book.into_loans(),
    };
    Ok(serde_json::to_value(output)?)
}
