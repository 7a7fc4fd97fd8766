use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use tally_app::{Action, AppState, ExpenseDraft, ItemEdit, Screen};
use tally_core::Tone;

/// Scan -> reveal -> correct an item -> accept, then check the derived views.
#[test]
fn test_scan_and_accept_flow() {
    let opened = Utc.with_ymd_and_hms(2026, 2, 19, 8, 0, 0).unwrap();
    let state = AppState::demo(opened);
    assert_eq!(state.weekly_reflection().coach.tone, Tone::Encouraging);

    let state = state.dispatch(Action::ScanReceipt).unwrap();
    assert_eq!(state.screen, Screen::Processing);
    assert!(!state.receipt.as_ref().unwrap().revealed);

    let state = state
        .dispatch(Action::RevealExtractedItems)
        .unwrap()
        .dispatch(Action::EditExtractedItem {
            item_id: "2".into(),
            edit: ItemEdit::Amount(Decimal::new(300, 2)),
        })
        .unwrap();
    assert!(state.receipt.as_ref().unwrap().revealed);

    let accepted_at = opened + Duration::seconds(2);
    let state = state
        .dispatch(Action::AcceptExtractedItems { at: accepted_at })
        .unwrap();
    assert_eq!(state.screen, Screen::Expenses);
    assert!(state.receipt.is_none());
    assert_eq!(state.expenses.len(), 3);
    assert_eq!(state.expenses[2].amount, Decimal::new(300, 2));

    // 7.80 + 5.00 + 3.00; Coffee 12.80 is over half of 15.80
    let reflection = state.weekly_reflection();
    assert_eq!(reflection.total, Decimal::new(1580, 2));
    assert_eq!(reflection.coach.tone, Tone::Curious);
    assert_eq!(reflection.coach.category.as_deref(), Some("Coffee"));
}

#[test]
fn test_skip_adds_nothing() {
    let state = AppState::new()
        .dispatch(Action::ScanReceipt)
        .unwrap()
        .dispatch(Action::SkipToExpenses)
        .unwrap();
    assert_eq!(state.screen, Screen::Expenses);
    assert!(state.expenses.is_empty());
}

#[test]
fn test_manual_entry_then_clear() {
    let at = Utc.with_ymd_and_hms(2026, 2, 19, 18, 0, 0).unwrap();
    let draft = ExpenseDraft::new("64.20", "Food", "Groceries").validate().unwrap();

    let state = AppState::new()
        .dispatch(Action::AddExpense { expense: draft, at })
        .unwrap()
        .dispatch(Action::ViewPrivacy)
        .unwrap()
        .dispatch(Action::ClearAllExpenses)
        .unwrap();

    assert_eq!(state.screen, Screen::Privacy);
    assert!(state.expenses.is_empty());
    assert!(state.weekly_reflection().coach.text.starts_with("No expenses yet"));
}

#[test]
fn test_overview_from_state() {
    let state = AppState::demo(Utc.with_ymd_and_hms(2026, 2, 19, 8, 0, 0).unwrap())
        .dispatch(Action::ViewOverview)
        .unwrap();
    let overview = state.spending_overview();
    assert_eq!(overview.weeks_tracked, 4);
    assert_eq!(overview.chart.last().unwrap().week, "This Week");
}

#[test]
fn test_insight_follows_selected_category() {
    let state = AppState::demo(Utc.with_ymd_and_hms(2026, 2, 19, 8, 0, 0).unwrap())
        .dispatch(Action::ViewInsights { category: Some("Coffee".into()) })
        .unwrap();
    let insight = state.category_insight();
    assert_eq!(insight.label, "Coffee");
    assert_eq!(insight.total, Decimal::new(780, 2));
    assert!(insight.baseline.synthetic);
}
