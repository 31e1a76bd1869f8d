//! Summarize spending use case
//!
//! Streams the log day by day into daily totals, so only the day being read
//! is ever held in memory.

use crate::domain::{DailyTotals, ScanWarning, SpendReport};
use crate::error::Result;
use crate::infrastructure::{Config, LogSource};
use std::path::Path;

/// Outcome of scanning a log into a report
#[derive(Debug, Clone)]
pub struct Summary {
    pub report: SpendReport,
    pub warnings: Vec<ScanWarning>,
}

/// Service for reducing a log to daily totals and budget series
pub struct SummarizeService {
    config: Config,
}

impl SummarizeService {
    pub fn new(config: Config) -> Self {
        SummarizeService { config }
    }

    /// Scan the log at `path` and build its report
    pub fn execute(&self, path: &Path) -> Result<Summary> {
        let source = LogSource::open(path)?;
        let mut scanner = source.days(self.config.undated_heading);

        let mut totals = DailyTotals::new();
        for day in scanner.by_ref() {
            let day = day?;
            tracing::debug!(date = %day.date(), total = day.total(), "day closed");
            totals.record(&day);
        }

        let warnings = scanner.into_warnings();
        let report = SpendReport::build(&totals, self.config.daily_budget);
        tracing::info!(
            days = report.dates.len(),
            warnings = warnings.len(),
            "log summarized"
        );

        Ok(Summary { report, warnings })
    }
}
