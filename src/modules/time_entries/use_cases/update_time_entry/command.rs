use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::nullable::deserialize_nullable;

/// The fields a client may change on a time entry. Absent fields stay as they
/// are; for nullable fields an explicit `null` clears the value. The derived
/// fields (`duration_hours` once timed, `submitted`, `submitted_at`) are not
/// part of the patch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TimeEntryPatch {
    pub employee_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub customer_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub project_id: Option<Option<i64>>,
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub start_time: Option<Option<NaiveTime>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub end_time: Option<Option<NaiveTime>>,
    pub break_minutes: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub duration_hours: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub activity: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub details: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub amount: Option<Option<f64>>,
}

impl TimeEntryPatch {
    pub fn apply_to(self, entry: &mut TimeEntry) {
        if let Some(employee_id) = self.employee_id {
            entry.employee_id = employee_id;
        }
        if let Some(customer_id) = self.customer_id {
            entry.customer_id = customer_id;
        }
        if let Some(project_id) = self.project_id {
            entry.project_id = project_id;
        }
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(start_time) = self.start_time {
            entry.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            entry.end_time = end_time;
        }
        if let Some(break_minutes) = self.break_minutes {
            entry.break_minutes = break_minutes;
        }
        if let Some(duration_hours) = self.duration_hours {
            entry.duration_hours = duration_hours;
        }
        if let Some(activity) = self.activity {
            entry.activity = activity;
        }
        if let Some(details) = self.details {
            entry.details = details;
        }
        if let Some(amount) = self.amount {
            entry.amount = amount;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTimeEntry {
    pub time_entry_id: i64,
    pub patch: TimeEntryPatch,
    /// Allows editing an entry that has already been submitted.
    pub override_lock: bool,
}
