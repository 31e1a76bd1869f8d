//! Output formatting utilities

use crate::domain::{DayAggregate, SpendReport};

/// Format an amount with two decimals and an optional currency prefix
pub fn format_amount(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, amount)
}

/// Per-day totals sorted by date, followed by overall spend, budget and what is left
pub fn format_summary(report: &SpendReport, currency: &str) -> String {
    if report.is_empty() {
        return "No days found".to_string();
    }

    let mut output = String::new();
    for (date, total) in report.dates.iter().zip(&report.daily) {
        output.push_str(&format!(
            "{} {}\n",
            date.format("%Y-%m-%d"),
            format_amount(*total, currency)
        ));
    }
    output.push_str(&format!(
        "Total spend: {}\n",
        format_amount(report.total_spend(), currency)
    ));
    output.push_str(&format!(
        "Total budget: {}\n",
        format_amount(report.total_budget(), currency)
    ));
    output.push_str(&format!(
        "Remaining: {}\n",
        format_amount(report.remaining(), currency)
    ));
    output
}

/// Days in log order, optionally with their items
pub fn format_days(days: &[DayAggregate], show_items: bool, currency: &str) -> String {
    if days.is_empty() {
        return "No days found".to_string();
    }

    let mut output = String::new();
    for day in days {
        output.push_str(&format!(
            "{} {}  ({} items)\n",
            day.date().format("%Y-%m-%d %a"),
            format_amount(day.total(), currency),
            day.items().len()
        ));
        if show_items {
            for (name, amount) in day.sorted_items() {
                output.push_str(&format!(
                    "    {:<24} {}\n",
                    name,
                    format_amount(amount, currency)
                ));
            }
        }
    }
    output
}
