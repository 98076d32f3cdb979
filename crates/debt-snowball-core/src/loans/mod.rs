pub mod book;
pub mod draft;

pub use book::{validate_collection, LoanBook};
pub use draft::{parse_amount, validate_name, LoanDraft, MAX_AMOUNT, MAX_NAME_LEN};
