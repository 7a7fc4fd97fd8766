//! Error types for Tally
//!
//! The analytics engine itself is total and never returns these; they cover
//! input validation and state edits around it.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Expense not found: {0}")]
    ExpenseNotFound(String),

    #[error("Extracted item not found: {0}")]
    ExtractedItemNotFound(String),

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Category is required")]
    MissingCategory,
}

pub type Result<T> = std::result::Result<T, Error>;
