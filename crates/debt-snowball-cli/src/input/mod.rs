pub mod file;
pub mod loans;
pub mod stdin;
