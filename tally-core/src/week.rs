//! Read-only snapshots of earlier weeks

use crate::analytics;
use crate::expense::Expense;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A past week's spending as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekSnapshot {
    pub week_number: u32,
    pub week_label: String,
    pub total: Decimal,
    pub top_category: String,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl WeekSnapshot {
    pub fn new(
        week_number: u32,
        week_label: impl Into<String>,
        total: Decimal,
        top_category: impl Into<String>,
    ) -> Self {
        Self {
            week_number,
            week_label: week_label.into(),
            total,
            top_category: top_category.into(),
            expenses: Vec::new(),
        }
    }

    /// Build a snapshot whose total and top category come from its expenses
    pub fn from_expenses(
        week_number: u32,
        week_label: impl Into<String>,
        expenses: &[Expense],
    ) -> Self {
        Self {
            week_number,
            week_label: week_label.into(),
            total: analytics::total(expenses),
            top_category: analytics::top_category_label(expenses),
            expenses: expenses.to_vec(),
        }
    }
}

/// The three sample weeks the prototype ships with, most recent first
pub fn demo_history() -> Vec<WeekSnapshot> {
    vec![
        WeekSnapshot::new(1, "Week 1", Decimal::new(8750, 2), "Food"),
        WeekSnapshot::new(2, "Week 2", Decimal::new(9230, 2), "Coffee"),
        WeekSnapshot::new(3, "Week 3", Decimal::new(7680, 2), "Transport"),
    ]
}
