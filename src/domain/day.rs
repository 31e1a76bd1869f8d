//! Per-day spending aggregate

use chrono::NaiveDate;
use std::collections::HashMap;

/// Accumulated item totals for one day section of the log
#[derive(Debug, Clone, PartialEq)]
pub struct DayAggregate {
    date: NaiveDate,
    items: HashMap<String, f64>,
}

impl DayAggregate {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            items: HashMap::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn items(&self) -> &HashMap<String, f64> {
        &self.items
    }

    /// Accumulated amount for an item, if it was recorded this day
    pub fn amount(&self, name: &str) -> Option<f64> {
        self.items.get(name).copied()
    }

    /// Add an amount to an item, summing with anything already recorded
    pub fn add_item(&mut self, name: &str, amount: f64) {
        *self.items.entry(name.to_string()).or_insert(0.0) += amount;
    }

    /// Drop an item entirely, returning its accumulated amount
    pub fn remove_item(&mut self, name: &str) -> Option<f64> {
        self.items.remove(name)
    }

    /// Sum of all item amounts
    pub fn total(&self) -> f64 {
        self.items.values().sum()
    }

    /// Items sorted by name, for stable display
    pub fn sorted_items(&self) -> Vec<(&str, f64)> {
        let mut items: Vec<(&str, f64)> = self
            .items
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect();
        items.sort_by(|a, b| a.0.cmp(b.0));
        items
    }
}
