//! Spending overview: this week against the tracked history.
//!
//! `previous_weeks` is ordered most recent first. The chart and the monthly
//! figure look at the latest three snapshots plus the current week.

use crate::analytics;
use crate::expense::Expense;
use crate::trend::{self, Trend};
use crate::week::WeekSnapshot;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshots shown alongside the current week
const HISTORY_WINDOW: usize = 3;

/// Weeks averaged over in the monthly view
const WEEKS_PER_MONTH: i64 = 4;

pub const CURRENT_WEEK_LABEL: &str = "This Week";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub week: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingOverview {
    pub current_total: Decimal,
    pub current_top_category: String,
    pub previous_total: Decimal,
    pub trend: Trend,
    pub trend_message: String,
    pub is_increase: bool,
    /// Oldest first, ending with the current week
    pub chart: Vec<ChartPoint>,
    pub weeks_tracked: u32,
    pub progress_message: String,
    pub monthly_total: Decimal,
    pub average_per_week: Decimal,
}

pub fn spending_overview(current: &[Expense], previous_weeks: &[WeekSnapshot]) -> SpendingOverview {
    let current_total = analytics::total(current);
    let previous_total = previous_weeks.first().map(|w| w.total).unwrap_or(Decimal::ZERO);
    let trend = Trend::between(current_total, previous_total);

    let recent = &previous_weeks[..previous_weeks.len().min(HISTORY_WINDOW)];

    let mut chart: Vec<ChartPoint> = recent
        .iter()
        .rev()
        .map(|w| ChartPoint {
            week: w.week_label.clone(),
            amount: w.total,
        })
        .collect();
    chart.push(ChartPoint {
        week: CURRENT_WEEK_LABEL.to_string(),
        amount: current_total,
    });

    let weeks_tracked = u32::try_from(previous_weeks.len())
        .unwrap_or(u32::MAX)
        .saturating_add(1);
    let monthly_total = analytics::saturating_add(
        current_total,
        analytics::saturating_sum(recent.iter().map(|w| w.total)),
    );

    SpendingOverview {
        current_total,
        current_top_category: analytics::top_category_label(current),
        previous_total,
        trend_message: trend.to_string(),
        is_increase: current_total > previous_total,
        trend,
        chart,
        weeks_tracked,
        progress_message: trend::progress_message(weeks_tracked),
        monthly_total,
        average_per_week: monthly_total / Decimal::from(WEEKS_PER_MONTH),
    }
}
