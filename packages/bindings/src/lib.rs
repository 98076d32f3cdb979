use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use debt_snowball_core::categories::CategoryLabel;
use debt_snowball_core::charts::{
    compute_chart_segments, compute_chart_segments_with_palette, compute_pyramid_width,
    compute_ring_offset,
};
use debt_snowball_core::dashboard::DashboardInput;
use debt_snowball_core::display::display_loans;
use debt_snowball_core::statistics::{compute_totals, derive_sorted_loans};
use debt_snowball_core::{Loan, LoanBook, LoanDraft, LoanId};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Parse and validate a JSON loan array the way a data load does.
fn load_book(loans: Vec<Loan>) -> NapiResult<LoanBook> {
    LoanBook::from_loans(loans).map_err(to_napi_error)
}

fn to_json(value: &impl Serialize) -> NapiResult<String> {
    serde_json::to_string(value).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[napi]
pub fn sort_loans(loans_json: String) -> NapiResult<String> {
    let loans: Vec<Loan> = serde_json::from_str(&loans_json).map_err(to_napi_error)?;
    let book = load_book(loans)?;
    to_json(&derive_sorted_loans(book.loans()))
}

#[napi]
pub fn loan_totals(loans_json: String) -> NapiResult<String> {
    let loans: Vec<Loan> = serde_json::from_str(&loans_json).map_err(to_napi_error)?;
    let book = load_book(loans)?;
    to_json(&compute_totals(book.loans()))
}

// ---------------------------------------------------------------------------
// Chart geometry
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct SegmentsRequest {
    loans: Vec<Loan>,
    #[serde(default)]
    palette: Option<Vec<String>>,
}

#[napi]
pub fn chart_segments(input_json: String) -> NapiResult<String> {
    let request: SegmentsRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let book = load_book(request.loans)?;
    let sorted = derive_sorted_loans(book.loans());
    let total = compute_totals(&sorted).total;

    let segments = match request.palette {
        Some(palette) => compute_chart_segments_with_palette(&sorted, total, palette.as_slice())
            .map_err(to_napi_error)?,
        None => compute_chart_segments(&sorted, total),
    };
    to_json(&segments)
}

#[derive(Deserialize)]
struct PyramidRequest {
    loan: Loan,
    min_amount: Decimal,
    max_amount: Decimal,
    min_width: Decimal,
    max_width: Decimal,
}

#[napi]
pub fn pyramid_width(input_json: String) -> NapiResult<String> {
    let r: PyramidRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let width =
        compute_pyramid_width(&r.loan, r.min_amount, r.max_amount, r.min_width, r.max_width);
    to_json(&width)
}

#[derive(Deserialize)]
struct RingRequest {
    percent: Decimal,
    circumference: Decimal,
}

#[napi]
pub fn ring_offset(input_json: String) -> NapiResult<String> {
    let r: RingRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    to_json(&compute_ring_offset(r.percent, r.circumference))
}

// ---------------------------------------------------------------------------
// Labels and dashboard
// ---------------------------------------------------------------------------

#[napi]
pub fn categorize_loan(loan_json: String) -> NapiResult<String> {
    let loan: Loan = serde_json::from_str(&loan_json).map_err(to_napi_error)?;
    to_json(&CategoryLabel::for_loan(&loan))
}

#[napi]
pub fn display_loan_rows(loans_json: String) -> NapiResult<String> {
    let loans: Vec<Loan> = serde_json::from_str(&loans_json).map_err(to_napi_error)?;
    let book = load_book(loans)?;
    let sorted = derive_sorted_loans(book.loans());
    let total = compute_totals(&sorted).total;
    to_json(&display_loans(&sorted, total))
}

#[napi]
pub fn build_dashboard(input_json: String) -> NapiResult<String> {
    let input: DashboardInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        debt_snowball_core::dashboard::build_dashboard(&input).map_err(to_napi_error)?;
    to_json(&output)
}

// ---------------------------------------------------------------------------
// Loan book mutations
// ---------------------------------------------------------------------------

/// The loan touched by a mutation and the collection after it.
#[derive(Serialize)]
struct MutationResponse {
    loan: Loan,
    loans: Vec<Loan>,
}

#[derive(Deserialize)]
struct AddRequest {
    loans: Vec<Loan>,
    name: String,
    /// Raw form text; validated as a positive number
    amount: String,
}

#[derive(Deserialize)]
struct UpdateRequest {
    loans: Vec<Loan>,
    id: LoanId,
    name: String,
    amount: String,
}

#[derive(Deserialize)]
struct RemoveRequest {
    loans: Vec<Loan>,
    id: LoanId,
}

#[napi]
pub fn add_loan(input_json: String) -> NapiResult<String> {
    let r: AddRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let draft = LoanDraft::parse(&r.name, &r.amount).map_err(to_napi_error)?;
    let mut book = load_book(r.loans)?;
    let loan = book.add(draft).map_err(to_napi_error)?;
    to_json(&MutationResponse {
        loan,
        loans: book.into_loans(),
    })
}

#[napi]
pub fn update_loan(input_json: String) -> NapiResult<String> {
    let r: UpdateRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let draft = LoanDraft::parse(&r.name, &r.amount).map_err(to_napi_error)?;
    let mut book = load_book(r.loans)?;
    let loan = book.update(r.id, draft).map_err(to_napi_error)?.clone();
    to_json(&MutationResponse {
        loan,
        loans: book.into_loans(),
    })
}

#[napi]
pub fn remove_loan(input_json: String) -> NapiResult<String> {
    let r: RemoveRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let mut book = load_book(r.loans)?;
    let loan = book.remove(r.id).map_err(to_napi_error)?;
    to_json(&MutationResponse {
        loan,
        loans: book.into_loans(),
    })
}
