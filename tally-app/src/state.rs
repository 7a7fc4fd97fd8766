//! Application state and its reducer.
//!
//! `AppState` is a plain value. Every change goes through [`reduce`], which
//! takes the old state and an [`Action`] and returns a new state, so
//! navigation and edits can be tested without any rendering.
//!
//! Actions carry their own timestamps; the reducer never reads the clock.

use crate::form::ValidExpense;
use crate::privacy::{PrivacySettings, PrivacyToggle};
use crate::receipt::{ItemEdit, ReceiptScan};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_core::{
    CategoryInsight, Error, Expense, Result, SpendingOverview, WeekSnapshot, WeeklyReflection,
};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Home,
    Processing,
    Expenses,
    Insights,
    WeeklySummary,
    Privacy,
    Overview,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Start a (simulated) receipt scan
    ScanReceipt,
    /// The caller's processing delay elapsed
    RevealExtractedItems,
    EditExtractedItem { item_id: String, edit: ItemEdit },
    /// "Looks good": add the extracted items and show the list.
    /// Ignored until the scan has been revealed.
    AcceptExtractedItems { at: DateTime<Utc> },
    /// Leave processing without adding anything
    SkipToExpenses,
    /// Open insights for one category, or all expenses
    ViewInsights { category: Option<String> },
    BackFromInsights,
    BackToHome,
    ViewExpenses,
    ViewWeeklySummary,
    ViewPrivacy,
    ViewOverview,
    AddExpense { expense: ValidExpense, at: DateTime<Utc> },
    /// Replace an expense's values, keeping its id, date and position
    UpdateExpense { id: String, expense: ValidExpense },
    DeleteExpense { id: String },
    ClearAllExpenses,
    SetPrivacy { toggle: PrivacyToggle, enabled: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub screen: Screen,
    /// Where `BackFromInsights` returns to
    pub previous_screen: Screen,
    pub expenses: Vec<Expense>,
    pub selected_category: Option<String>,
    pub previous_weeks: Vec<WeekSnapshot>,
    pub receipt: Option<ReceiptScan>,
    pub privacy: PrivacySettings,
    next_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            previous_screen: Screen::Home,
            expenses: Vec::new(),
            selected_category: None,
            previous_weeks: Vec::new(),
            receipt: None,
            privacy: PrivacySettings::default(),
            next_id: 1,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing expense list and history
    pub fn with_data(expenses: Vec<Expense>, previous_weeks: Vec<WeekSnapshot>) -> Self {
        let next_id = expenses.len() as u64 + 1;
        Self {
            expenses,
            previous_weeks,
            next_id,
            ..Self::default()
        }
    }

    /// The prototype's opening state: one coffee and three sample weeks
    pub fn demo(now: DateTime<Utc>) -> Self {
        let coffee = Expense::new(
            "exp-1",
            Decimal::new(780, 2),
            "Coffee",
            "Cappuccino and Croissant",
            now,
        );
        Self::with_data(vec![coffee], tally_core::demo_history())
    }

    /// Apply an action, consuming the old state
    pub fn dispatch(self, action: Action) -> Result<Self> {
        reduce(&self, action)
    }

    pub fn expense(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn weekly_reflection(&self) -> WeeklyReflection {
        tally_core::weekly_reflection(&self.expenses)
    }

    pub fn spending_overview(&self) -> SpendingOverview {
        tally_core::spending_overview(&self.expenses, &self.previous_weeks)
    }

    pub fn category_insight(&self) -> CategoryInsight {
        tally_core::category_insight(&self.expenses, self.selected_category.as_deref())
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = format!("exp-{}", self.next_id);
            self.next_id += 1;
            if self.expense(&id).is_none() {
                return id;
            }
        }
    }

    fn navigate(&mut self, to: Screen) {
        debug!(from = ?self.screen, to = ?to, "navigate");
        self.screen = to;
    }
}

/// Old state + action -> new state
pub fn reduce(state: &AppState, action: Action) -> Result<AppState> {
    let mut next = state.clone();

    match action {
        Action::ScanReceipt => {
            next.previous_screen = Screen::Home;
            next.receipt = Some(ReceiptScan::new());
            next.navigate(Screen::Processing);
        }
        Action::RevealExtractedItems => {
            if let Some(scan) = next.receipt.as_mut() {
                scan.reveal();
            }
        }
        Action::EditExtractedItem { item_id, edit } => {
            let scan = next
                .receipt
                .as_mut()
                .ok_or_else(|| Error::ExtractedItemNotFound(item_id.clone()))?;
            scan.apply_edit(&item_id, edit)?;
        }
        Action::AcceptExtractedItems { at } => {
            if next.receipt.as_ref().is_some_and(|scan| !scan.revealed) {
                debug!("accept ignored, receipt not revealed yet");
                return Ok(next);
            }
            if let Some(scan) = next.receipt.take() {
                let mut ids = Vec::with_capacity(scan.items.len());
                for _ in &scan.items {
                    ids.push(next.fresh_id());
                }
                let mut ids = ids.into_iter();
                let added = scan.into_expenses(at, || ids.next().unwrap_or_default());
                info!(count = added.len(), "accepted extracted receipt items");
                next.expenses.extend(added);
            }
            next.navigate(Screen::Expenses);
        }
        Action::SkipToExpenses => {
            next.receipt = None;
            next.navigate(Screen::Expenses);
        }
        Action::ViewInsights { category } => {
            next.selected_category = category;
            next.previous_screen = state.screen;
            next.navigate(Screen::Insights);
        }
        Action::BackFromInsights => {
            next.selected_category = None;
            let back = next.previous_screen;
            next.navigate(back);
        }
        Action::BackToHome => next.navigate(Screen::Home),
        Action::ViewExpenses => next.navigate(Screen::Expenses),
        Action::ViewWeeklySummary => next.navigate(Screen::WeeklySummary),
        Action::ViewPrivacy => next.navigate(Screen::Privacy),
        Action::ViewOverview => next.navigate(Screen::Overview),
        Action::AddExpense { expense, at } => {
            let id = next.fresh_id();
            info!(id = %id, category = %expense.category, "expense added");
            next.expenses.push(Expense::new(
                id,
                expense.amount,
                expense.category,
                expense.description,
                at,
            ));
        }
        Action::UpdateExpense { id, expense } => {
            let slot = next
                .expenses
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| Error::ExpenseNotFound(id.clone()))?;
            slot.amount = expense.amount;
            slot.category = expense.category;
            slot.description = expense.description;
            info!(id = %id, "expense updated");
        }
        Action::DeleteExpense { id } => {
            let before = next.expenses.len();
            next.expenses.retain(|e| e.id != id);
            if next.expenses.len() != before {
                info!(id = %id, "expense deleted");
            }
        }
        Action::ClearAllExpenses => {
            info!(count = next.expenses.len(), "all expenses cleared");
            next.expenses.clear();
        }
        Action::SetPrivacy { toggle, enabled } => next.privacy.set(toggle, enabled),
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap()
    }

    fn valid(amount: i64, category: &str, description: &str) -> ValidExpense {
        ValidExpense {
            amount: Decimal::from(amount),
            category: category.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_accept_before_reveal_is_ignored() {
        let scanning = AppState::new().dispatch(Action::ScanReceipt).unwrap();
        let s = scanning
            .clone()
            .dispatch(Action::AcceptExtractedItems { at: now() })
            .unwrap();
        assert_eq!(s, scanning);
        assert_eq!(s.screen, Screen::Processing);
        assert!(s.expenses.is_empty());

        let s = s
            .dispatch(Action::RevealExtractedItems)
            .unwrap()
            .dispatch(Action::AcceptExtractedItems { at: now() })
            .unwrap();
        assert_eq!(s.screen, Screen::Expenses);
        assert_eq!(s.expenses.len(), 2);
        assert!(s.receipt.is_none());
    }

    #[test]
    fn test_demo_state() {
        let s = AppState::demo(now());
        assert_eq!(s.screen, Screen::Home);
        assert_eq!(s.expenses.len(), 1);
        assert_eq!(s.previous_weeks.len(), 3);
    }

    #[test]
    fn test_add_assigns_fresh_ids() {
        let s = AppState::demo(now())
            .dispatch(Action::AddExpense { expense: valid(3, "Transport", "Bus"), at: now() })
            .unwrap()
            .dispatch(Action::AddExpense { expense: valid(4, "Food", ""), at: now() })
            .unwrap();
        let ids: Vec<_> = s.expenses.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["exp-1", "exp-2", "exp-3"]);
    }

    #[test]
    fn test_update_in_place() {
        let s = AppState::new()
            .dispatch(Action::AddExpense { expense: valid(3, "Transport", "Bus"), at: now() })
            .unwrap()
            .dispatch(Action::AddExpense { expense: valid(4, "Food", "Bagel"), at: now() })
            .unwrap()
            .dispatch(Action::AddExpense { expense: valid(5, "Coffee", "Latte"), at: now() })
            .unwrap();

        let updated = s
            .clone()
            .dispatch(Action::UpdateExpense {
                id: "exp-2".into(),
                expense: valid(6, "Food", "Bagel + juice"),
            })
            .unwrap();

        assert_eq!(updated.expenses.len(), 3);
        assert_eq!(updated.expenses[1].id, "exp-2");
        assert_eq!(updated.expenses[1].amount, Decimal::from(6));
        assert_eq!(updated.expenses[1].description, "Bagel + juice");
        assert_eq!(updated.expenses[1].date, s.expenses[1].date);
        assert_eq!(updated.expenses[0], s.expenses[0]);
    }

    #[test]
    fn test_update_unknown_id() {
        let err = reduce(
            &AppState::new(),
            Action::UpdateExpense { id: "nope".into(), expense: valid(1, "Food", "") },
        )
        .unwrap_err();
        assert_eq!(err, Error::ExpenseNotFound("nope".into()));
    }

    #[test]
    fn test_reduce_does_not_touch_input() {
        let s = AppState::demo(now());
        let before = s.clone();
        let _ = reduce(&s, Action::ClearAllExpenses).unwrap();
        assert_eq!(s, before);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let s = AppState::demo(now());
        let after = reduce(&s, Action::DeleteExpense { id: "ghost".into() }).unwrap();
        assert_eq!(after.expenses, s.expenses);
    }

    #[test]
    fn test_insights_back_navigation() {
        let s = AppState::new()
            .dispatch(Action::ViewExpenses)
            .unwrap()
            .dispatch(Action::ViewInsights { category: Some("Coffee".into()) })
            .unwrap();
        assert_eq!(s.screen, Screen::Insights);
        assert_eq!(s.previous_screen, Screen::Expenses);
        assert_eq!(s.selected_category.as_deref(), Some("Coffee"));

        let s = s.dispatch(Action::BackFromInsights).unwrap();
        assert_eq!(s.screen, Screen::Expenses);
        assert_eq!(s.selected_category, None);
    }

    #[test]
    fn test_privacy_toggle() {
        let s = AppState::new()
            .dispatch(Action::SetPrivacy { toggle: PrivacyToggle::ShareWithFamily, enabled: true })
            .unwrap();
        assert!(s.privacy.share_with_family);
    }

    #[test]
    fn test_fresh_id_skips_taken_ids() {
        let taken = Expense::new("exp-2", Decimal::ONE, "Food", "", now());
        let s = AppState::with_data(vec![taken], Vec::new())
            .dispatch(Action::AddExpense { expense: valid(1, "Coffee", ""), at: now() })
            .unwrap();
        assert_eq!(s.expenses[1].id, "exp-3");
    }
}
