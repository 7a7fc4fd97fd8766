//! Aggregation over expense collections.
//!
//! Every function here is total: the empty slice yields zeros / `None`, and
//! sums are exact because amounts are `Decimal`. Sums that leave the
//! `Decimal` range clamp to `Decimal::MAX` / `Decimal::MIN`.

use crate::expense::Expense;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label used when there is no top category
pub const NO_CATEGORY: &str = "None";

/// `a + b`, clamped to the representable range instead of overflowing
pub fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(if b.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Sum of `amounts` using [`saturating_add`]
pub fn saturating_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, saturating_add)
}

/// Per-category sums, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    entries: Vec<(String, Decimal)>,
}

impl CategoryTotals {
    /// Accumulate totals from a slice of expenses
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut totals = Self::default();
        for e in expenses {
            totals.add(&e.category, e.amount);
        }
        totals
    }

    fn add(&mut self, category: &str, amount: Decimal) {
        match self.entries.iter_mut().find(|(c, _)| c == category) {
            Some((_, sum)) => *sum = saturating_add(*sum, amount),
            None => self.entries.push((category.to_string(), amount)),
        }
    }

    /// Sum for one category, `None` if it never appeared
    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, sum)| *sum)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(category, total)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(c, sum)| (c.as_str(), *sum))
    }

    /// Sum across all categories
    pub fn grand_total(&self) -> Decimal {
        saturating_sum(self.entries.iter().map(|(_, sum)| *sum))
    }

    /// Highest total; ties go to the category seen first
    pub fn top(&self) -> Option<(&str, Decimal)> {
        let mut best: Option<(&str, Decimal)> = None;
        for (c, sum) in self.iter() {
            if best.map(|(_, b)| sum > b).unwrap_or(true) {
                best = Some((c, sum));
            }
        }
        best
    }

    /// Fraction of the grand total spent in `category` (0 when nothing spent)
    pub fn share(&self, category: &str) -> Decimal {
        let total = self.grand_total();
        match self.get(category) {
            Some(sum) => sum.checked_div(total).unwrap_or(Decimal::ZERO),
            None => Decimal::ZERO,
        }
    }
}

/// Map category -> sum(amount)
pub fn category_totals(expenses: &[Expense]) -> CategoryTotals {
    CategoryTotals::from_expenses(expenses)
}

/// Sum of all amounts
pub fn total(expenses: &[Expense]) -> Decimal {
    saturating_sum(expenses.iter().map(|e| e.amount))
}

/// Sum of one category's amounts (0 if absent)
pub fn category_total(expenses: &[Expense], category: &str) -> Decimal {
    saturating_sum(
        expenses
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount),
    )
}

/// Category with the largest total, with that total
pub fn top_category(expenses: &[Expense]) -> Option<(String, Decimal)> {
    category_totals(expenses)
        .top()
        .map(|(c, sum)| (c.to_string(), sum))
}

/// Top category name, or "None" for an empty collection
pub fn top_category_label(expenses: &[Expense]) -> String {
    top_category(expenses)
        .map(|(c, _)| c)
        .unwrap_or_else(|| NO_CATEGORY.to_string())
}

/// `total / count`, defined as 0 when there are no expenses
pub fn average_per_purchase(expenses: &[Expense]) -> Decimal {
    if expenses.is_empty() {
        return Decimal::ZERO;
    }
    total(expenses) / Decimal::from(expenses.len())
}

/// Number of distinct categories
pub fn categories_used(expenses: &[Expense]) -> usize {
    category_totals(expenses).len()
}
