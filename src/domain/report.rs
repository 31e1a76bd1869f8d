//! Reduction of day aggregates into daily totals and budget series

use crate::domain::day::DayAggregate;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Default budget: 100 currency units per week
pub const DEFAULT_DAILY_BUDGET: f64 = 100.0 / 7.0;

/// Spend per calendar date, ordered by date.
///
/// A date recorded twice keeps the later total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyTotals {
    totals: BTreeMap<NaiveDate, f64>,
}

impl DailyTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a day's total, replacing any earlier total for the same date
    pub fn record(&mut self, day: &DayAggregate) {
        self.totals.insert(day.date(), day.total());
    }

    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.totals.get(&date).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.totals.iter().map(|(date, total)| (*date, *total))
    }
}

impl<'a> FromIterator<&'a DayAggregate> for DailyTotals {
    fn from_iter<T: IntoIterator<Item = &'a DayAggregate>>(iter: T) -> Self {
        let mut totals = DailyTotals::new();
        for day in iter {
            totals.record(day);
        }
        totals
    }
}

/// Series derived from daily totals, index-aligned with `dates`
#[derive(Debug, Clone, PartialEq)]
pub struct SpendReport {
    pub dates: Vec<NaiveDate>,
    pub daily: Vec<f64>,
    pub cumulative: Vec<f64>,
    pub running_average: Vec<f64>,
    pub cumulative_budget: Vec<f64>,
    pub daily_budget: f64,
}

impl SpendReport {
    pub fn build(totals: &DailyTotals, daily_budget: f64) -> Self {
        let (dates, daily): (Vec<NaiveDate>, Vec<f64>) = totals.iter().unzip();

        let cumulative: Vec<f64> = daily
            .iter()
            .scan(0.0, |sum, x| {
                *sum += x;
                Some(*sum)
            })
            .collect();

        let running_average = cumulative
            .iter()
            .enumerate()
            .map(|(i, sum)| sum / (i + 1) as f64)
            .collect();

        // Budget accrues for every calendar day since the first entry, logged or not
        let cumulative_budget = match dates.first() {
            Some(first) => dates
                .iter()
                .map(|date| daily_budget * ((*date - *first).num_days() + 1) as f64)
                .collect(),
            None => Vec::new(),
        };

        Self {
            dates,
            daily,
            cumulative,
            running_average,
            cumulative_budget,
            daily_budget,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn total_spend(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn total_budget(&self) -> f64 {
        self.cumulative_budget.last().copied().unwrap_or(0.0)
    }

    /// Budget left over; negative when overspent
    pub fn remaining(&self) -> f64 {
        self.total_budget() - self.total_spend()
    }
}
