use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::time_entries::core::duration::compute_duration_hours;
use crate::modules::time_entries::core::submission::DateRange;

pub const DEFAULT_SOURCE_SYSTEM: &str = "api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: i64,
    pub employee_id: i64,
    pub customer_id: Option<i64>,
    pub project_id: Option<i64>,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub break_minutes: u32,
    pub duration_hours: Option<f64>,
    pub activity: Option<String>,
    pub details: Option<String>,
    pub amount: Option<f64>,
    pub source_file: Option<String>,
    pub external_id: Option<String>,
    pub source_system: String,
    pub submitted: bool,
    pub submitted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Where an entry sits in its lifecycle: Open -> Timed -> Submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeEntryStatus {
    Open,
    Timed,
    Submitted,
}

impl TimeEntry {
    pub fn status(&self) -> TimeEntryStatus {
        if self.submitted {
            TimeEntryStatus::Submitted
        } else if self.end_time.is_some() {
            TimeEntryStatus::Timed
        } else {
            TimeEntryStatus::Open
        }
    }

    /// Both clock times, when the entry has been fully timed.
    pub fn interval(&self) -> Option<(NaiveTime, NaiveTime)> {
        self.start_time.zip(self.end_time)
    }

    pub fn is_running(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_none()
    }

    /// Leaves `duration_hours` untouched unless both times are known.
    pub fn recompute_duration(&mut self) {
        if let Some(hours) =
            compute_duration_hours(self.start_time, self.end_time, self.break_minutes)
        {
            self.duration_hours = Some(hours);
        }
    }

    pub fn mark_submitted(&mut self, at: DateTime<Utc>) {
        self.submitted = true;
        self.submitted_at = Some(at);
    }

    pub fn reopen(&mut self) {
        self.submitted = false;
        self.submitted_at = None;
    }
}

/// An entry that has not been persisted yet and therefore has no id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTimeEntry {
    pub employee_id: i64,
    pub customer_id: Option<i64>,
    pub project_id: Option<i64>,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub break_minutes: u32,
    pub duration_hours: Option<f64>,
    pub activity: Option<String>,
    pub details: Option<String>,
    pub amount: Option<f64>,
    pub source_file: Option<String>,
    pub external_id: Option<String>,
    pub source_system: String,
    pub created_at: DateTime<Utc>,
}

impl NewTimeEntry {
    pub fn into_time_entry(self, id: i64) -> TimeEntry {
        TimeEntry {
            id,
            employee_id: self.employee_id,
            customer_id: self.customer_id,
            project_id: self.project_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            break_minutes: self.break_minutes,
            duration_hours: self.duration_hours,
            activity: self.activity,
            details: self.details,
            amount: self.amount,
            source_file: self.source_file,
            external_id: self.external_id,
            source_system: self.source_system,
            submitted: false,
            submitted_at: None,
            created_at: self.created_at,
        }
    }
}

/// Exact-match filters plus an inclusive date range; `None` matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeEntryFilter {
    pub employee_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub project_id: Option<i64>,
    pub range: DateRange,
}

impl TimeEntryFilter {
    pub fn for_employee(employee_id: i64) -> Self {
        Self {
            employee_id: Some(employee_id),
            ..Self::default()
        }
    }

    pub fn matches(&self, entry: &TimeEntry) -> bool {
        self.employee_id.is_none_or(|id| entry.employee_id == id)
            && self.customer_id.is_none_or(|id| entry.customer_id == Some(id))
            && self.project_id.is_none_or(|id| entry.project_id == Some(id))
            && self.range.contains(entry.date)
    }
}

/// Orders by date, then start time; entries without a start come last within a day.
pub fn sort_chronologically(entries: &mut [TimeEntry]) {
    entries.sort_by_key(|entry| (entry.date, entry.start_time.is_none(), entry.start_time));
}
