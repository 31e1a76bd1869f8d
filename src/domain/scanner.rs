//! Day-by-day scanner over an expenditure log
//!
//! The scanner is a pull-based iterator: each call to `next` consumes exactly
//! the lines needed to close one day section and yields its aggregate. It
//! never looks at more than the current day, so arbitrarily long logs scan
//! in constant memory.

use crate::domain::day::DayAggregate;
use crate::domain::line::{classify, DateStamp, ItemFields, LineKind};
use crate::domain::policy::UndatedHeadingPolicy;
use crate::error::{Result, SpendlogError};
use std::fmt;
use std::io;

/// A line handed to the scanner
pub trait LogLine {
    fn text(&self) -> &str;

    /// True when undecodable bytes were replaced while reading the line
    fn is_lossy(&self) -> bool {
        false
    }
}

impl LogLine for &str {
    fn text(&self) -> &str {
        self
    }
}

impl LogLine for String {
    fn text(&self) -> &str {
        self
    }
}

/// Non-fatal anomaly found while scanning
#[derive(Debug, Clone, PartialEq)]
pub struct ScanWarning {
    /// 1-based line number in the input
    pub line_number: usize,
    pub kind: WarningKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WarningKind {
    /// Item row whose amount field is not a finite number; the row was skipped
    UnparsableAmount { item: String, amount: String },
    /// Day heading without a `[YYYY-MM-DD Day]` stamp
    UndatedHeading,
    /// Line held bytes that are not UTF-8; they were replaced before parsing
    InvalidEncoding,
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::UnparsableAmount { item, amount } => write!(
                f,
                "line {}: skipped '{}', amount '{}' is not a number",
                self.line_number, item, amount
            ),
            WarningKind::UndatedHeading => {
                write!(f, "line {}: day heading has no date", self.line_number)
            }
            WarningKind::InvalidEncoding => write!(
                f,
                "line {}: invalid UTF-8 replaced with U+FFFD",
                self.line_number
            ),
        }
    }
}

/// Scanner state between lines
#[derive(Debug)]
enum ScanState {
    NoDayOpen,
    DayOpen(DayAggregate),
}

/// Iterator of day aggregates over a sequence of log lines.
///
/// Yields `Err` for a calendar-invalid day stamp or a failing line source.
/// A calendar-invalid stamp leaves the scanner with no day open, so
/// iteration may continue past it; an I/O failure ends the sequence.
pub struct DayScanner<I> {
    lines: I,
    line_number: usize,
    state: ScanState,
    policy: UndatedHeadingPolicy,
    pending: Option<SpendlogError>,
    warnings: Vec<ScanWarning>,
    finished: bool,
}

impl<I, L> DayScanner<I>
where
    I: Iterator<Item = io::Result<L>>,
    L: LogLine,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            line_number: 0,
            state: ScanState::NoDayOpen,
            policy: UndatedHeadingPolicy::default(),
            pending: None,
            warnings: Vec::new(),
            finished: false,
        }
    }

    pub fn with_policy(mut self, policy: UndatedHeadingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Anomalies recorded so far
    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<ScanWarning> {
        self.warnings
    }

    fn close_day(&mut self) -> Option<DayAggregate> {
        match std::mem::replace(&mut self.state, ScanState::NoDayOpen) {
            ScanState::DayOpen(day) => Some(day),
            ScanState::NoDayOpen => None,
        }
    }

    fn warn(&mut self, kind: WarningKind) {
        let warning = ScanWarning {
            line_number: self.line_number,
            kind,
        };
        match warning.kind {
            WarningKind::UnparsableAmount { .. } | WarningKind::InvalidEncoding => {
                tracing::warn!("{}", warning)
            }
            WarningKind::UndatedHeading => tracing::debug!("{}", warning),
        }
        self.warnings.push(warning);
    }

    fn accumulate(&mut self, fields: ItemFields<'_>) {
        let ScanState::DayOpen(day) = &mut self.state else {
            return;
        };
        match fields.amount.parse::<f64>() {
            Ok(amount) if amount.is_finite() => day.add_item(fields.name, amount),
            _ => self.warn(WarningKind::UnparsableAmount {
                item: fields.name.to_string(),
                amount: fields.amount.to_string(),
            }),
        }
    }

    /// Feed one trimmed, non-empty line; returns whatever it closes
    fn step(&mut self, line: &str) -> Option<Result<DayAggregate>> {
        match classify(line) {
            LineKind::Week | LineKind::SubHeading(_) | LineKind::Text => None,
            LineKind::Item(fields) => {
                self.accumulate(fields);
                None
            }
            LineKind::Day(DateStamp::Valid(date)) => {
                let closed = self.close_day();
                tracing::trace!(line = self.line_number, %date, "day opened");
                self.state = ScanState::DayOpen(DayAggregate::new(date));
                closed.map(Ok)
            }
            LineKind::Day(DateStamp::Missing) => {
                self.warn(WarningKind::UndatedHeading);
                match self.policy {
                    UndatedHeadingPolicy::Discard => self.close_day().map(Ok),
                    UndatedHeadingPolicy::KeepPrevious => None,
                }
            }
            LineKind::Day(DateStamp::Invalid(text)) => {
                let err = SpendlogError::InvalidDate {
                    line: self.line_number,
                    text,
                };
                match self.close_day() {
                    Some(day) => {
                        self.pending = Some(err);
                        Some(Ok(day))
                    }
                    None => Some(Err(err)),
                }
            }
        }
    }
}

impl<I, L> Iterator for DayScanner<I>
where
    I: Iterator<Item = io::Result<L>>,
    L: LogLine,
{
    type Item = Result<DayAggregate>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.pending.take() {
            return Some(Err(err));
        }
        if self.finished {
            return None;
        }

        loop {
            let Some(next) = self.lines.next() else {
                self.finished = true;
                return self.close_day().map(Ok);
            };
            self.line_number += 1;

            let raw = match next {
                Ok(raw) => raw,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(SpendlogError::Io(e)));
                }
            };

            if raw.is_lossy() {
                self.warn(WarningKind::InvalidEncoding);
            }
            let mut line = raw.text();
            if self.line_number == 1 {
                line = line.strip_prefix('\u{FEFF}').unwrap_or(line);
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(emitted) = self.step(line) {
                return Some(emitted);
            }
        }
    }
}

/// Scanner over an in-memory log
pub fn scan_text(text: &str) -> DayScanner<impl Iterator<Item = io::Result<&str>> + '_> {
    DayScanner::new(text.lines().map(Ok::<&str, io::Error>))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn days(text: &str) -> Vec<DayAggregate> {
        scan_text(text).collect::<Result<Vec<_>>>().unwrap()
    }

    #[test]
    fn test_end_to_end_example() {
        let log = "\
* Week 1
** [2024-01-06 Sat]
| 12.50 | note | Groceries |
| 3.00 | note | Coffee |
** [2024-01-07 Sun]
| 20.00 | note | Groceries |
";
        let result = days(log);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].date(), date(2024, 1, 6));
        assert_eq!(result[0].amount("Groceries"), Some(12.5));
        assert_eq!(result[0].amount("Coffee"), Some(3.0));
        assert!((result[0].total() - 15.5).abs() < 1e-9);
        assert_eq!(result[1].date(), date(2024, 1, 7));
        assert_eq!(result[1].items().len(), 1);
        assert!((result[1].total() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_one_aggregate_per_day_in_order() {
        let log = "\
* Week 1
** [2024-03-01 Fri]
** [2024-03-02 Sat]
* Week 2
** [2024-03-04 Mon]
** [2024-02-28 Wed]
";
        let dates: Vec<NaiveDate> = days(log).iter().map(|d| d.date()).collect();
        assert_eq!(
            dates,
            vec![
                date(2024, 3, 1),
                date(2024, 3, 2),
                date(2024, 3, 4),
                date(2024, 2, 28)
            ]
        );
    }

    #[test]
    fn test_accumulation_within_day() {
        let log = "\
** [2024-01-06 Sat]
| 10 | x | coffee |
| 5 | x | coffee |
| 3 | x | tea |
";
        let result = days(log);
        assert_eq!(result[0].amount("coffee"), Some(15.0));
        assert_eq!(result[0].amount("tea"), Some(3.0));
    }

    #[test]
    fn test_undated_heading_drops_following_items() {
        let log = "\
** [2024-01-05 Fri]
| 1 | x | bread |
** Somewhere undated
| 99 | x | lost |
** [2024-01-06 Sat]
| 2 | x | milk |
";
        let mut scanner = scan_text(log);
        let result: Vec<DayAggregate> = scanner.by_ref().map(|d| d.unwrap()).collect();

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|d| d.amount("lost").is_none()));
        assert_eq!(result[0].amount("bread"), Some(1.0));
        assert_eq!(result[1].amount("milk"), Some(2.0));
        assert_eq!(
            scanner.warnings(),
            &[ScanWarning {
                line_number: 3,
                kind: WarningKind::UndatedHeading
            }]
        );
    }

    #[test]
    fn test_undated_heading_keep_previous() {
        let log = "\
** [2024-01-05 Fri]
| 1 | x | bread |
** Evening
| 4 | x | bread |
** [2024-01-06 Sat]
";
        let result: Vec<DayAggregate> = scan_text(log)
            .with_policy(UndatedHeadingPolicy::KeepPrevious)
            .map(|d| d.unwrap())
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].amount("bread"), Some(5.0));
        assert!(result[1].items().is_empty());
    }

    #[test]
    fn test_short_and_numeric_rows_ignored() {
        let log = "\
** [2024-01-06 Sat]
| 7 | coffee |
| 5 | x | 10 |
|---+---+---|
| 1 | x | tea |
";
        let result = days(log);
        assert_eq!(result[0].items().len(), 1);
        assert_eq!(result[0].amount("tea"), Some(1.0));
    }

    #[test]
    fn test_tail_day_emitted_without_trailing_heading() {
        let log = "** [2024-01-06 Sat]\n| 3 | x | tea |";
        let result = days(log);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].amount("tea"), Some(3.0));
    }

    #[test]
    fn test_items_before_any_day_ignored() {
        let log = "\
* Week 1
| 50 | x | orphan |
** [2024-01-06 Sat]
";
        let result = days(log);
        assert_eq!(result.len(), 1);
        assert!(result[0].items().is_empty());
    }

    #[test]
    fn test_week_and_deep_headings_do_not_close_day() {
        let log = "\
** [2024-01-06 Sat]
| 1 | x | tea |
*** Details
| 2 | x | tea |
* Week 2
| 3 | x | tea |
";
        let result = days(log);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].amount("tea"), Some(6.0));
    }

    #[test]
    fn test_blank_and_indented_lines() {
        let log = "\n   \n  ** [2024-01-06 Sat]  \n\n\t| 2.5 | x | Bus |\n";
        let result = days(log);
        assert_eq!(result[0].amount("Bus"), Some(2.5));
    }

    #[test]
    fn test_unparsable_amount_is_skipped_and_reported() {
        let log = "\
** [2024-01-06 Sat]
| twelve | x | Lunch |
| 4 | x | Lunch |
| nan | x | Dinner |
";
        let mut scanner = scan_text(log);
        let result: Vec<DayAggregate> = scanner.by_ref().map(|d| d.unwrap()).collect();

        assert_eq!(result[0].amount("Lunch"), Some(4.0));
        assert_eq!(result[0].amount("Dinner"), None);
        let warnings = scanner.into_warnings();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].line_number, 2);
        assert_eq!(
            warnings[0].kind,
            WarningKind::UnparsableAmount {
                item: "Lunch".to_string(),
                amount: "twelve".to_string()
            }
        );
        assert!(warnings[0].to_string().contains("line 2"));
    }

    #[test]
    fn test_invalid_date_surfaces_after_open_day() {
        let log = "\
** [2024-01-06 Sat]
| 1 | x | tea |
** [2024-13-01 Mon]
| 9 | x | lost |
** [2024-01-08 Mon]
| 2 | x | tea |
";
        let results: Vec<Result<DayAggregate>> = scan_text(log).collect();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().amount("tea"), Some(1.0));
        match &results[1] {
            Err(SpendlogError::InvalidDate { line, text }) => {
                assert_eq!(*line, 3);
                assert_eq!(text, "2024-13-01");
            }
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
        let last = results[2].as_ref().unwrap();
        assert_eq!(last.date(), date(2024, 1, 8));
        assert_eq!(last.amount("lost"), None);
    }

    #[test]
    fn test_io_error_ends_scan() {
        let lines: Vec<io::Result<String>> = vec![
            Ok("** [2024-01-06 Sat]".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8")),
            Ok("** [2024-01-07 Sun]".to_string()),
        ];
        let mut scanner = DayScanner::new(lines.into_iter());
        assert!(matches!(scanner.next(), Some(Err(SpendlogError::Io(_)))));
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_lazy_emission() {
        let log = "\
** [2024-01-06 Sat]
| 1 | x | tea |
** [2024-01-07 Sun]
| 2 | x | tea |
** [2024-01-08 Mon]
";
        let mut consumed = 0;
        let counted = log.lines().map(|l| {
            consumed += 1;
            Ok::<_, io::Error>(l)
        });
        let mut scanner = DayScanner::new(counted);
        let first = scanner.next().unwrap().unwrap();
        assert_eq!(first.date(), date(2024, 1, 6));
        drop(scanner);
        // Stopped at the heading that closed the first day
        assert_eq!(consumed, 3);
    }

    #[test]
    fn test_leading_byte_order_mark_is_ignored() {
        let result = days("\u{FEFF}** [2024-01-06 Sat]\n| 5 | x | Tea |\n");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].amount("Tea"), Some(5.0));
    }

    #[test]
    fn test_lossy_line_is_reported_and_scan_continues() {
        struct Decoded(&'static str, bool);
        impl LogLine for Decoded {
            fn text(&self) -> &str {
                self.0
            }
            fn is_lossy(&self) -> bool {
                self.1
            }
        }

        let lines: Vec<io::Result<Decoded>> = vec![
            Ok(Decoded("** [2024-01-06 Sat]", false)),
            Ok(Decoded("note caf\u{FFFD} latte", true)),
            Ok(Decoded("| 5 | x | Tea |", false)),
        ];
        let mut scanner = DayScanner::new(lines.into_iter());
        let result: Vec<DayAggregate> = scanner.by_ref().map(|d| d.unwrap()).collect();

        assert_eq!(result[0].amount("Tea"), Some(5.0));
        assert_eq!(
            scanner.warnings(),
            &[ScanWarning {
                line_number: 2,
                kind: WarningKind::InvalidEncoding
            }]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(days("").is_empty());
        assert!(days("* Week 1\nsome prose\n").is_empty());
    }
}
