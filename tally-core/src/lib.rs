//! tally-core: expense analytics and the coaching-message engine
//!
//! Everything here is a pure function of its inputs: no I/O, no clocks
//! (except the explicit `*_or_now` helpers), no shared state.

pub mod analytics;
pub mod coach;
pub mod error;
pub mod expense;
pub mod insight;
pub mod overview;
pub mod summary;
pub mod trend;
pub mod week;

pub use analytics::{
    average_per_purchase, categories_used, category_total, category_totals, top_category,
    top_category_label, total, CategoryTotals, NO_CATEGORY,
};
pub use coach::{
    coach_message, coach_message_with_previous, CoachInput, CoachMessage, StyleHint, Tone,
};
pub use error::{Error, Result};
pub use expense::{Expense, ExpenseDate};
pub use insight::{category_insight, CategoryInsight, SyntheticBaseline};
pub use overview::{spending_overview, ChartPoint, SpendingOverview};
pub use summary::{weekly_reflection, WeeklyReflection};
pub use trend::{progress_message, trend_message, Trend, TrendDirection};
pub use week::{demo_history, WeekSnapshot};
