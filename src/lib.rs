//! spendlog - Daily spending from a plain-text outline log
//!
//! Reads an org-style expenditure log where each `**` heading is a day and
//! each pipe-delimited row an item, totals spending per day, and reports or
//! charts it against a linear budget.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SpendlogError;
