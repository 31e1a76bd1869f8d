//! Policy for day headings that carry no date

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What the scanner does with a level-2 heading that has no `[YYYY-MM-DD Day]` token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UndatedHeadingPolicy {
    /// Close the open day and attribute following items to nothing
    #[default]
    Discard,
    /// Leave the open day untouched; following items keep accumulating into it
    KeepPrevious,
}

impl UndatedHeadingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UndatedHeadingPolicy::Discard => "discard",
            UndatedHeadingPolicy::KeepPrevious => "keep-previous",
        }
    }
}

impl FromStr for UndatedHeadingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "discard" => Ok(UndatedHeadingPolicy::Discard),
            "keep-previous" => Ok(UndatedHeadingPolicy::KeepPrevious),
            _ => Err(format!(
                "Invalid undated_heading policy: '{}'. Valid policies are: discard, keep-previous",
                s
            )),
        }
    }
}
