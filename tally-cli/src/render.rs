//! Plain-text rendering of the derived views

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write;
use tally_app::ExtractedItem;
use tally_core::{CategoryInsight, CoachMessage, Expense, SpendingOverview, WeeklyReflection};

pub struct Renderer {
    pub currency: String,
    pub tz: Tz,
    pub now: DateTime<Utc>,
}

impl Renderer {
    /// Amount to cents, half away from zero
    pub fn money(&self, amount: Decimal) -> String {
        let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{}{:.2}", self.currency, cents)
    }

    pub fn coach(&self, msg: &CoachMessage) -> String {
        format!("[{:?}] {}", msg.tone, msg.text)
    }

    pub fn reflection(&self, r: &WeeklyReflection) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# Weekly reflection\n");
        let _ = writeln!(out, "Total:                {}", self.money(r.total));
        let _ = writeln!(out, "Purchases:            {}", r.purchase_count);
        let _ = writeln!(out, "Average per purchase: {}", self.money(r.average_per_purchase));
        let _ = writeln!(out, "Top category:         {}", r.top_category_label());
        let _ = writeln!(out, "Categories used:      {}", r.categories_used);
        if !r.category_totals.is_empty() {
            let _ = writeln!(out, "\n## By category\n");
            for (category, sum) in r.category_totals.iter() {
                let _ = writeln!(out, "- {category}: {}", self.money(sum));
            }
        }
        let _ = writeln!(out, "\n{}", self.coach(&r.coach));
        out
    }

    pub fn overview(&self, o: &SpendingOverview) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# Spending overview\n");
        let _ = writeln!(
            out,
            "This week:    {} (top: {})",
            self.money(o.current_total),
            o.current_top_category
        );
        let _ = writeln!(out, "Trend:        {}", o.trend_message);
        let _ = writeln!(out, "\n## Last weeks\n");
        for point in &o.chart {
            let _ = writeln!(out, "- {}: {}", point.week, self.money(point.amount));
        }
        let _ = writeln!(out, "\nMonthly total:    {}", self.money(o.monthly_total));
        let _ = writeln!(out, "Average per week: {}", self.money(o.average_per_week));
        let _ = writeln!(out, "\n{}", o.progress_message);
        out
    }

    pub fn insight(&self, i: &CategoryInsight) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# Insights: {}\n", i.label);
        if !i.has_data() {
            let _ = writeln!(out, "No {} expenses yet.", i.label.to_lowercase());
            return out;
        }
        let _ = writeln!(
            out,
            "You spent {} on {} this week.",
            self.money(i.total),
            i.label.to_lowercase()
        );
        let _ = writeln!(
            out,
            "That is {}% above a placeholder baseline of {} (not real history).",
            i.percent_above_baseline,
            self.money(i.baseline.amount)
        );
        if let Some(breakdown) = &i.breakdown {
            let _ = writeln!(out, "\n## Breakdown\n");
            for (category, sum) in breakdown.iter() {
                let _ = writeln!(out, "- {category}: {}", self.money(sum));
            }
        }
        let _ = writeln!(out, "\n## Recent\n");
        out.push_str(&self.expenses(&i.expenses));
        out
    }

    pub fn expenses(&self, expenses: &[Expense]) -> String {
        let mut out = String::new();
        for e in expenses {
            let local = e.date_or(self.now).with_timezone(&self.tz);
            let _ = writeln!(
                out,
                "- {} | {} | {} | {}",
                local.format("%b %-d, %H:%M"),
                e.category,
                e.display_description(),
                self.money(e.amount)
            );
        }
        out
    }

    pub fn extracted(&self, items: &[ExtractedItem]) -> String {
        let mut out = String::new();
        for item in items {
            let amount = self.money(item.amount);
            let _ = writeln!(out, "- {} ({}) {amount}", item.name, item.category);
        }
        out
    }
}
