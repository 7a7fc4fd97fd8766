//! Expense record types

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single recorded spending event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    /// Opaque unique identifier
    pub id: String,
    /// Amount in currency units (expected non-negative)
    pub amount: Decimal,
    /// Spending bucket, e.g. "Food", "Coffee", "Transport"
    pub category: String,
    /// Free text, may be empty
    #[serde(default)]
    pub description: String,
    /// When the expense happened
    pub date: ExpenseDate,
}

impl Expense {
    /// Create a new Expense
    pub fn new(
        id: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<ExpenseDate>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            category: category.into(),
            description: description.into(),
            date: date.into(),
        }
    }

    /// Description for display; blank descriptions read as "Expense"
    pub fn display_description(&self) -> &str {
        if self.description.trim().is_empty() {
            "Expense"
        } else {
            &self.description
        }
    }

    /// Resolve the date, substituting `now` when it cannot be parsed
    pub fn date_or(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.date.resolve(now)
    }

    /// Same as [`Expense::date_or`] against the wall clock
    pub fn date_or_now(&self) -> DateTime<Utc> {
        self.date.resolve(Utc::now())
    }
}

/// An expense date as it arrived: either a real timestamp or raw text.
///
/// Text that parses as RFC 3339 deserializes straight into `Timestamp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ExpenseDate {
    Timestamp(DateTime<Utc>),
    Text(String),
}

const TEXT_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

impl ExpenseDate {
    /// Best-effort conversion to a timestamp. Never fails: unparseable text
    /// resolves to `now`.
    pub fn resolve(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            ExpenseDate::Timestamp(ts) => *ts,
            ExpenseDate::Text(raw) => parse_text_date(raw).unwrap_or_else(|| {
                debug!(raw = %raw, "unparseable expense date, using now");
                now
            }),
        }
    }

    /// True when the value is a timestamp or text that parses as one
    pub fn is_valid(&self) -> bool {
        match self {
            ExpenseDate::Timestamp(_) => true,
            ExpenseDate::Text(raw) => parse_text_date(raw).is_some(),
        }
    }
}

fn parse_text_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in TEXT_DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(ndt.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

impl From<DateTime<Utc>> for ExpenseDate {
    fn from(ts: DateTime<Utc>) -> Self {
        ExpenseDate::Timestamp(ts)
    }
}

impl From<&str> for ExpenseDate {
    fn from(raw: &str) -> Self {
        ExpenseDate::Text(raw.to_string())
    }
}

impl From<String> for ExpenseDate {
    fn from(raw: String) -> Self {
        ExpenseDate::Text(raw)
    }
}
