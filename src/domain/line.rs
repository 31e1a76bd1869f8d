//! Line classification for outline expenditure logs
//!
//! A log is an org-style outline: `*` starts a week, `**` starts a day and
//! carries its date as `[YYYY-MM-DD Day]`, and spending is recorded in
//! pipe-delimited table rows `| amount | ... | item | ...`.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Character repeated to form an outline heading marker
pub const HEADING_MARKER: char = '*';

/// Regex for the bracketed day stamp: [2024-01-06 Sat]
fn date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[([0-9]{4}-[0-9]{2}-[0-9]{2}) \w+\]").unwrap())
}

/// Heading depth of a line: 1 for `* Week`, 2 for `** [date]`, 0 for anything else
pub fn heading_level(line: &str) -> usize {
    let token = line.split_whitespace().next().unwrap_or("");
    if !token.is_empty() && token.chars().all(|c| c == HEADING_MARKER) {
        token.chars().count()
    } else {
        0
    }
}

/// Result of looking for a day stamp on a heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateStamp {
    /// No `[YYYY-MM-DD Day]` token on the line
    Missing,
    /// Token found and the date exists in the calendar
    Valid(NaiveDate),
    /// Token found but the digits do not form a calendar date (e.g. month 13)
    Invalid(String),
}

/// Find the first `[YYYY-MM-DD Day]` token and parse its date part
pub fn extract_date(line: &str) -> DateStamp {
    let Some(captures) = date_regex().captures(line) else {
        return DateStamp::Missing;
    };
    let text = &captures[1];
    match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        Ok(date) => DateStamp::Valid(date),
        Err(_) => DateStamp::Invalid(text.to_string()),
    }
}

/// True if the text parses as a floating-point number
pub fn is_numeric_token(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok()
}

/// Raw fields of a pipe-delimited item row, before the amount is parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields<'a> {
    pub amount: &'a str,
    pub name: &'a str,
}

/// Split a table row into its amount and item name fields.
///
/// Returns None for rows with fewer than three interior fields and for rows
/// whose name field is itself numeric (separator or totals rows).
pub fn item_fields(line: &str) -> Option<ItemFields<'_>> {
    let fragments: Vec<&str> = line.split('|').collect();
    if fragments.len() < 5 {
        return None;
    }
    let interior = &fragments[1..fragments.len() - 1];

    let name = interior[2].trim();
    if is_numeric_token(name) {
        return None;
    }

    Some(ItemFields {
        amount: interior[0].trim(),
        name,
    })
}

/// Classification of a single non-empty line
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    /// `* ...` week marker
    Week,
    /// `** ...` day marker with whatever date stamp it carries
    Day(DateStamp),
    /// Heading deeper than a day; carries no data
    SubHeading(usize),
    /// A row that looks like an item
    Item(ItemFields<'a>),
    /// Anything else
    Text,
}

/// Classify a trimmed, non-empty line
pub fn classify(line: &str) -> LineKind<'_> {
    match heading_level(line) {
        0 => item_fields(line).map_or(LineKind::Text, LineKind::Item),
        1 => LineKind::Week,
        2 => LineKind::Day(extract_date(line)),
        level => LineKind::SubHeading(level),
    }
}
