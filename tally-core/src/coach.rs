//! Rule-based coaching messages.
//!
//! Rules live in [`COACH_RULES`] and are evaluated top to bottom; the first
//! rule whose predicate holds produces the message. The category-spike rule
//! sits above the total-based thresholds, so a spike wins even when the total
//! also falls in the busy/exploring/balanced bands.
//!
//! Messages stay supportive: observations and questions, never judgement.

use crate::analytics::{self, CategoryTotals};
use crate::expense::Expense;
use crate::trend::Trend;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Supportive,
    Curious,
    Encouraging,
    Reflective,
}

/// Presentation hint, independent of any renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleHint {
    /// Onboarding look (teal/blue)
    Welcome,
    /// Reflection look (purple/pink)
    Reflect,
}

impl StyleHint {
    /// Style token understood by the presentation layer
    pub fn token(&self) -> &'static str {
        match self {
            StyleHint::Welcome => "from-teal-50 to-blue-50",
            StyleHint::Reflect => "from-purple-50 to-pink-50",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachMessage {
    pub text: String,
    pub tone: Tone,
    pub style: StyleHint,
    /// Category the message is about, when it names one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CoachMessage {
    fn new(text: impl Into<String>, tone: Tone, style: StyleHint) -> Self {
        Self {
            text: text.into(),
            tone,
            style,
            category: None,
        }
    }
}

/// Aggregates the rules look at
#[derive(Debug, Clone, PartialEq)]
pub struct CoachInput {
    pub count: usize,
    pub total: Decimal,
    /// Top category and its total
    pub top: Option<(String, Decimal)>,
    /// Previous period total, if the caller has one
    pub previous_total: Option<Decimal>,
}

impl CoachInput {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let totals = CategoryTotals::from_expenses(expenses);
        Self {
            count: expenses.len(),
            total: analytics::total(expenses),
            top: totals.top().map(|(c, sum)| (c.to_string(), sum)),
            previous_total: None,
        }
    }

    pub fn with_previous_total(mut self, previous_total: Decimal) -> Self {
        self.previous_total = Some(previous_total);
        self
    }

    /// Trend against the previous period, when one was given
    pub fn trend(&self) -> Option<Trend> {
        self.previous_total
            .map(|previous| Trend::between(self.total, previous))
    }
}

/// One entry of the ordered rule table
pub struct CoachRule {
    pub name: &'static str,
    pub matches: fn(&CoachInput) -> bool,
    pub produce: fn(&CoachInput) -> CoachMessage,
}

fn busy_threshold() -> Decimal {
    Decimal::from(100)
}

fn exploring_threshold() -> Decimal {
    Decimal::from(50)
}

fn spike_ratio() -> Decimal {
    Decimal::new(5, 1)
}

pub static COACH_RULES: [CoachRule; 7] = [
    CoachRule {
        name: "no-expenses",
        matches: |i| i.count == 0,
        produce: |_| {
            CoachMessage::new(
                "No expenses yet this week. Start tracking to build awareness!",
                Tone::Encouraging,
                StyleHint::Welcome,
            )
        },
    },
    CoachRule {
        name: "first-expense",
        matches: |i| i.count == 1,
        produce: |_| {
            CoachMessage::new(
                "Great start! Each receipt you track builds awareness.",
                Tone::Encouraging,
                StyleHint::Welcome,
            )
        },
    },
    CoachRule {
        name: "category-spike",
        matches: |i| match &i.top {
            Some((category, amount)) => {
                let half = i.total.checked_mul(spike_ratio()).unwrap_or(i.total);
                !category.is_empty() && *amount > half
            }
            None => false,
        },
        produce: |i| {
            let category = i.top.as_ref().map(|(c, _)| c.clone()).unwrap_or_default();
            let mut msg = CoachMessage::new(
                format!("I notice {category} was higher this week. What changed?"),
                Tone::Curious,
                StyleHint::Reflect,
            );
            msg.category = Some(category);
            msg
        },
    },
    CoachRule {
        name: "busy-week",
        matches: |i| i.total >= busy_threshold(),
        produce: |_| {
            CoachMessage::new(
                "You've had a busy week. What stands out to you about your spending?",
                Tone::Reflective,
                StyleHint::Reflect,
            )
        },
    },
    CoachRule {
        name: "exploring",
        matches: |i| i.total >= exploring_threshold() && i.total < busy_threshold(),
        produce: |_| {
            CoachMessage::new(
                "I notice you're exploring a bit this week. \
                 That's okay! Awareness is the first step.",
                Tone::Curious,
                StyleHint::Reflect,
            )
        },
    },
    CoachRule {
        name: "balanced",
        matches: |i| i.total < exploring_threshold(),
        produce: |_| {
            CoachMessage::new(
                "Your spending was balanced this week. That takes intentionality.",
                Tone::Supportive,
                StyleHint::Reflect,
            )
        },
    },
    CoachRule {
        name: "building-awareness",
        matches: |_| true,
        produce: |_| {
            CoachMessage::new(
                "You're building awareness this week. Keep tracking. Patterns will emerge.",
                Tone::Supportive,
                StyleHint::Reflect,
            )
        },
    },
];

/// First rule whose predicate holds for `input`
pub fn matching_rule(input: &CoachInput) -> &'static CoachRule {
    COACH_RULES
        .iter()
        .find(|r| (r.matches)(input))
        .unwrap_or(&COACH_RULES[COACH_RULES.len() - 1])
}

/// Evaluate the rule table against precomputed aggregates
pub fn select(input: &CoachInput) -> CoachMessage {
    let rule = matching_rule(input);
    debug!(
        rule = rule.name,
        count = input.count,
        total = %input.total,
        "coach rule matched"
    );
    (rule.produce)(input)
}

/// Coaching message for this period's expenses
pub fn coach_message(expenses: &[Expense]) -> CoachMessage {
    select(&CoachInput::from_expenses(expenses))
}

/// Coaching message with the previous period's total available to the rules
pub fn coach_message_with_previous(
    expenses: &[Expense],
    previous_total: Decimal,
) -> CoachMessage {
    select(&CoachInput::from_expenses(expenses).with_previous_total(previous_total))
}
