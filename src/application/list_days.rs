//! List days use case

use crate::domain::{DayAggregate, ScanWarning, UndatedHeadingPolicy};
use crate::error::Result;
use crate::infrastructure::LogSource;
use std::path::Path;

/// Every day of the log in input order, with the anomalies met on the way
#[derive(Debug, Clone)]
pub struct DayListing {
    pub days: Vec<DayAggregate>,
    pub warnings: Vec<ScanWarning>,
}

/// Read all day aggregates from the log at `path`.
pub fn list_days(path: &Path, policy: UndatedHeadingPolicy) -> Result<DayListing> {
    let mut scanner = LogSource::open(path)?.days(policy);
    let days = scanner.by_ref().collect::<Result<Vec<_>>>()?;
    Ok(DayListing {
        days,
        warnings: scanner.into_warnings(),
    })
}
