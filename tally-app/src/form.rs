//! Manual expense entry: raw form fields and their validation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tally_core::{Error, Result};

/// Categories offered by the entry form
pub const FORM_CATEGORIES: [&str; 3] = ["Food", "Coffee", "Transport"];

/// Form fields exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub amount: String,
    pub category: String,
    pub description: String,
}

/// A draft that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidExpense {
    pub amount: Decimal,
    pub category: String,
    pub description: String,
}

impl ExpenseDraft {
    pub fn new(
        amount: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    /// Amount must be a non-negative decimal; category must be non-blank.
    pub fn validate(&self) -> Result<ValidExpense> {
        let amount = parse_amount(&self.amount)?;
        let category = self.category.trim();
        if category.is_empty() {
            return Err(Error::MissingCategory);
        }
        Ok(ValidExpense {
            amount,
            category: category.to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

/// Parse a typed amount, tolerating a leading `$`
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let cleaned = raw.trim().trim_start_matches('$').trim();
    let amount = Decimal::from_str(cleaned).map_err(|_| Error::InvalidAmount(raw.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(Error::InvalidAmount(raw.to_string()));
    }
    Ok(amount)
}
