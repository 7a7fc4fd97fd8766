//! Weekly reflection: the end-of-week summary view model

use crate::analytics::{self, CategoryTotals};
use crate::coach::{self, CoachMessage};
use crate::expense::Expense;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReflection {
    pub total: Decimal,
    pub purchase_count: usize,
    pub average_per_purchase: Decimal,
    pub top_category: Option<(String, Decimal)>,
    pub categories_used: usize,
    pub category_totals: CategoryTotals,
    pub coach: CoachMessage,
}

impl WeeklyReflection {
    /// Top category name, "None" when the week is empty
    pub fn top_category_label(&self) -> &str {
        self.top_category
            .as_ref()
            .map(|(c, _)| c.as_str())
            .unwrap_or(analytics::NO_CATEGORY)
    }
}

pub fn weekly_reflection(expenses: &[Expense]) -> WeeklyReflection {
    let category_totals = analytics::category_totals(expenses);
    let total = analytics::total(expenses);
    WeeklyReflection {
        total,
        purchase_count: expenses.len(),
        average_per_purchase: analytics::average_per_purchase(expenses),
        top_category: category_totals.top().map(|(c, sum)| (c.to_string(), sum)),
        categories_used: category_totals.len(),
        category_totals,
        coach: coach::coach_message(expenses),
    }
}
