//! Domain layer - Log grammar, scanning and spending aggregates

pub mod day;
pub mod line;
pub mod policy;
pub mod report;
pub mod scanner;

pub use day::DayAggregate;
pub use line::{classify, extract_date, heading_level, is_numeric_token, DateStamp, LineKind};
pub use policy::UndatedHeadingPolicy;
pub use report::{DailyTotals, SpendReport, DEFAULT_DAILY_BUDGET};
pub use scanner::{scan_text, DayScanner, LogLine, ScanWarning, WarningKind};
