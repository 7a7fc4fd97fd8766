//! Week-over-week trend and tracking-progress text

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Steady,
}

/// Change between two period totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// Whole percent of the previous total; 0 when previous is 0
    pub percent: Decimal,
}

impl Trend {
    pub fn between(current: Decimal, previous: Decimal) -> Self {
        let direction = match current.cmp(&previous) {
            Ordering::Equal => TrendDirection::Steady,
            Ordering::Greater => TrendDirection::Up,
            Ordering::Less => TrendDirection::Down,
        };

        // A change too large to represent saturates at Decimal::MAX percent.
        let percent = if previous > Decimal::ZERO {
            current
                .checked_sub(previous)
                .and_then(|d| d.abs().checked_div(previous))
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::MAX)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        } else {
            Decimal::ZERO
        };

        Self { direction, percent }
    }

    pub fn is_increase(&self) -> bool {
        self.direction == TrendDirection::Up
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.direction {
            TrendDirection::Steady => {
                return write!(f, "Your spending remained consistent with last week.");
            }
            TrendDirection::Up => "↑",
            TrendDirection::Down => "↓",
        };
        write!(f, "{arrow} {}% from last week", self.percent.normalize())
    }
}

/// Trend text comparing this period's total to the previous one
pub fn trend_message(current: Decimal, previous: Decimal) -> String {
    Trend::between(current, previous).to_string()
}

/// Encouragement keyed on how many weeks have been tracked
pub fn progress_message(weeks_tracked: u32) -> String {
    match weeks_tracked {
        0 => "Start your first week of tracking to build awareness.".to_string(),
        1 => "You've started tracking! One week of awareness is powerful.".to_string(),
        2 => "Two weeks of tracking. Patterns are starting to emerge.".to_string(),
        3 => "Three weeks in! You're building real awareness.".to_string(),
        n => format!(
            "You've maintained consistent awareness over {n} weeks. That's real progress."
        ),
    }
}
