use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which entries of the same employee the overlap guard compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapScope {
    #[default]
    SameDay,
    /// Compares clock times only, regardless of the calendar date.
    AnyDay,
}

impl FromStr for OverlapScope {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "same_day" => Ok(Self::SameDay),
            "any_day" => Ok(Self::AnyDay),
            other => Err(format!("unknown overlap scope: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeEntryPolicy {
    pub overlap_scope: OverlapScope,
    /// When set, a submitted entry without an end time is never reported as running.
    pub running_requires_unsubmitted: bool,
}

impl Default for TimeEntryPolicy {
    fn default() -> Self {
        Self {
            overlap_scope: OverlapScope::SameDay,
            running_requires_unsubmitted: true,
        }
    }
}
