//! Simulated receipt extraction.
//!
//! There is no OCR: a scan always yields the same two line items. The caller
//! decides how long "processing" takes and dispatches the reveal itself.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_core::{Error, Expense, Result};

/// A line item "read" from a receipt, editable before it is accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedItem {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub category: String,
}

impl ExtractedItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            category: category.into(),
        }
    }
}

/// A single-field correction to an extracted item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEdit {
    Name(String),
    Amount(Decimal),
    Category(String),
}

/// The hardcoded result every scan produces
pub fn mock_extracted_items() -> Vec<ExtractedItem> {
    vec![
        ExtractedItem::new("1", "Cappuccino", Decimal::new(500, 2), "Coffee"),
        ExtractedItem::new("2", "Croissant", Decimal::new(250, 2), "Food"),
    ]
}

/// An in-flight scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptScan {
    pub items: Vec<ExtractedItem>,
    /// False while the caller's processing delay is still running
    pub revealed: bool,
}

impl Default for ReceiptScan {
    fn default() -> Self {
        Self {
            items: mock_extracted_items(),
            revealed: false,
        }
    }
}

impl ReceiptScan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn apply_edit(&mut self, item_id: &str, edit: ItemEdit) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| Error::ExtractedItemNotFound(item_id.to_string()))?;

        match edit {
            ItemEdit::Name(name) => item.name = name,
            ItemEdit::Amount(amount) => item.amount = amount,
            ItemEdit::Category(category) => item.category = category,
        }
        Ok(())
    }

    pub fn total(&self) -> Decimal {
        tally_core::analytics::saturating_sum(self.items.iter().map(|i| i.amount))
    }

    /// Turn the items into expenses; `next_id` hands out fresh ids.
    pub fn into_expenses(
        self,
        at: DateTime<Utc>,
        mut next_id: impl FnMut() -> String,
    ) -> Vec<Expense> {
        self.items
            .into_iter()
            .map(|item| Expense::new(next_id(), item.amount, item.category, item.name, at))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_mock_scan() {
        let scan = ReceiptScan::new();
        assert!(!scan.revealed);
        assert_eq!(scan.items.len(), 2);
        assert_eq!(scan.total(), Decimal::new(750, 2));
    }

    #[test]
    fn test_edit_item() {
        let mut scan = ReceiptScan::new();
        scan.apply_edit("2", ItemEdit::Amount(Decimal::new(325, 2))).unwrap();
        scan.apply_edit("2", ItemEdit::Name("Pain au chocolat".into())).unwrap();
        assert_eq!(scan.items[1].amount, Decimal::new(325, 2));
        assert_eq!(scan.items[1].name, "Pain au chocolat");
        assert_eq!(scan.items[0].name, "Cappuccino");
    }

    #[test]
    fn test_edit_unknown_item() {
        let mut scan = ReceiptScan::new();
        let err = scan.apply_edit("9", ItemEdit::Category("Food".into())).unwrap_err();
        assert_eq!(err, Error::ExtractedItemNotFound("9".into()));
    }

    #[test]
    fn test_into_expenses() {
        let at = Utc.with_ymd_and_hms(2026, 2, 19, 8, 30, 0).unwrap();
        let mut n = 0;
        let expenses = ReceiptScan::new().into_expenses(at, || {
            n += 1;
            format!("exp-{n}")
        });
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].id, "exp-1");
        assert_eq!(expenses[0].description, "Cappuccino");
        assert_eq!(expenses[1].category, "Food");
        assert_eq!(expenses[1].date_or(Utc::now()), at);
    }
}
