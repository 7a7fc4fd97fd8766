//! Category insight: a drill-down into one category (or everything).
//!
//! There is no real spending history yet, so the "usual" figure is a
//! placeholder at 80% of the current total. It is carried as
//! [`SyntheticBaseline`] with `synthetic: true` and must not be presented as
//! historical data.

use crate::analytics::{self, CategoryTotals};
use crate::expense::Expense;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub const ALL_EXPENSES_LABEL: &str = "All expenses";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticBaseline {
    pub amount: Decimal,
    pub synthetic: bool,
}

impl SyntheticBaseline {
    /// Placeholder baseline: 80% of `total`, or 0 for a non-positive total
    pub fn placeholder(total: Decimal) -> Self {
        let amount = if total > Decimal::ZERO {
            total.checked_mul(Decimal::new(8, 1)).unwrap_or(total)
        } else {
            Decimal::ZERO
        };
        Self {
            amount,
            synthetic: true,
        }
    }

    /// Whole percent `total` sits above the baseline; 0 without a baseline.
    /// Saturates at `Decimal::MAX` when the ratio does not fit.
    pub fn percent_above(&self, total: Decimal) -> Decimal {
        if self.amount > Decimal::ZERO {
            total
                .checked_sub(self.amount)
                .and_then(|d| d.checked_div(self.amount))
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::MAX)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        } else {
            Decimal::ZERO
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInsight {
    /// Selected category, or "All expenses"
    pub label: String,
    pub selected: Option<String>,
    pub expenses: Vec<Expense>,
    pub total: Decimal,
    pub baseline: SyntheticBaseline,
    pub percent_above_baseline: Decimal,
    /// Per-category totals, only when no category is selected
    pub breakdown: Option<CategoryTotals>,
}

impl CategoryInsight {
    pub fn has_data(&self) -> bool {
        self.total > Decimal::ZERO
    }
}

pub fn category_insight(expenses: &[Expense], category: Option<&str>) -> CategoryInsight {
    let selected: Vec<Expense> = match category {
        Some(c) => expenses.iter().filter(|e| e.category == c).cloned().collect(),
        None => expenses.to_vec(),
    };
    let total = analytics::total(&selected);
    let baseline = SyntheticBaseline::placeholder(total);

    CategoryInsight {
        label: category.unwrap_or(ALL_EXPENSES_LABEL).to_string(),
        selected: category.map(str::to_string),
        percent_above_baseline: baseline.percent_above(total),
        baseline,
        total,
        expenses: selected,
        breakdown: match category {
            Some(_) => None,
            None => Some(analytics::category_totals(expenses)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn items() -> Vec<Expense> {
        let date = Utc.with_ymd_and_hms(2026, 2, 18, 9, 0, 0).unwrap();
        vec![
            Expense::new("1", Decimal::new(780, 2), "Coffee", "", date),
            Expense::new("2", Decimal::new(250, 2), "Food", "Croissant", date),
            Expense::new("3", Decimal::new(500, 2), "Coffee", "Cappuccino", date),
        ]
    }

    #[test]
    fn test_single_category() {
        let insight = category_insight(&items(), Some("Coffee"));
        assert_eq!(insight.label, "Coffee");
        assert_eq!(insight.expenses.len(), 2);
        assert_eq!(insight.total, Decimal::new(1280, 2));
        assert!(insight.baseline.synthetic);
        assert_eq!(insight.baseline.amount, Decimal::new(1024, 2));
        assert_eq!(insight.percent_above_baseline, Decimal::from(25));
        assert!(insight.breakdown.is_none());
    }

    #[test]
    fn test_all_expenses_has_breakdown() {
        let insight = category_insight(&items(), None);
        assert_eq!(insight.label, "All expenses");
        assert_eq!(insight.expenses.len(), 3);
        let breakdown = insight.breakdown.unwrap();
        assert_eq!(breakdown.get("Food"), Some(Decimal::new(250, 2)));
    }

    #[test]
    fn test_extreme_amounts_do_not_panic() {
        let tiny = SyntheticBaseline {
            amount: Decimal::new(1, 28),
            synthetic: true,
        };
        assert_eq!(tiny.percent_above(Decimal::MAX), Decimal::MAX);

        let date = Utc.with_ymd_and_hms(2026, 2, 18, 9, 0, 0).unwrap();
        let items = vec![
            Expense::new("1", Decimal::MAX, "Food", "", date),
            Expense::new("2", Decimal::MAX, "Food", "", date),
        ];
        let insight = category_insight(&items, Some("Food"));
        assert_eq!(insight.total, Decimal::MAX);
        assert!(insight.has_data());
    }

    #[test]
    fn test_unknown_category_is_empty_not_an_error() {
        let insight = category_insight(&items(), Some("Transport"));
        assert!(!insight.has_data());
        assert_eq!(insight.baseline.amount, Decimal::ZERO);
        assert_eq!(insight.percent_above_baseline, Decimal::ZERO);
    }
}
