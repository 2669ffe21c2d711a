// Shared time entry fixtures. Every entry lives on `day()` unless a test moves it.

use chrono::{NaiveDate, NaiveTime, Utc};

use crate::modules::time_entries::core::duration::compute_duration_hours;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::submission::{DateRange, submit_entries};
use crate::modules::time_entries::core::time_entry::{
    DEFAULT_SOURCE_SYSTEM, NewTimeEntry, TimeEntry, TimeEntryFilter,
};
use crate::modules::time_entries::use_cases::create_time_entry::command::CreateTimeEntry;
use crate::shared::infrastructure::unit_of_work::in_memory::InMemoryStore;
use crate::shared::infrastructure::unit_of_work::{Store, UnitOfWork};

pub fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

pub fn make_new_time_entry(
    employee_id: i64,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
) -> NewTimeEntry {
    NewTimeEntry {
        employee_id,
        customer_id: None,
        project_id: None,
        date: day(),
        start_time,
        end_time,
        break_minutes: 0,
        duration_hours: compute_duration_hours(start_time, end_time, 0),
        activity: None,
        details: None,
        amount: None,
        source_file: None,
        external_id: None,
        source_system: DEFAULT_SOURCE_SYSTEM.to_string(),
        created_at: Utc::now(),
    }
}

pub fn make_time_entry(
    id: i64,
    employee_id: i64,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
) -> TimeEntry {
    make_new_time_entry(employee_id, start_time, end_time).into_time_entry(id)
}

/// Inserts an entry directly, bypassing every use case rule.
pub async fn seed_time_entry(
    store: &InMemoryStore,
    employee_id: i64,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
) -> TimeEntry {
    let mut uow = store.begin().await.unwrap();
    let entry = uow
        .insert_time_entry(make_new_time_entry(employee_id, start_time, end_time))
        .await
        .unwrap();
    uow.commit().await.unwrap();
    entry
}

pub async fn submit_all(store: &InMemoryStore, employee_id: i64) {
    let mut uow = store.begin().await.unwrap();
    let entries = uow
        .list_time_entries(&TimeEntryFilter::for_employee(employee_id))
        .await
        .unwrap();
    for entry in submit_entries(entries, employee_id, &DateRange::default(), Utc::now()) {
        uow.update_time_entry(entry).await.unwrap();
    }
    uow.commit().await.unwrap();
}

pub struct CreateTimeEntryBuilder {
    inner: CreateTimeEntry,
}

impl Default for CreateTimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateTimeEntryBuilder {
    pub fn new() -> Self {
        let inner = serde_json::from_str(include_str!("json/create_time_entry.json")).unwrap();
        Self { inner }
    }

    pub fn employee_id(mut self, v: i64) -> Self {
        self.inner.employee_id = v;
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn start_time(mut self, v: NaiveTime) -> Self {
        self.inner.start_time = Some(v);
        self
    }

    pub fn end_time(mut self, v: NaiveTime) -> Self {
        self.inner.end_time = Some(v);
        self
    }

    pub fn times(self, start: NaiveTime, end: NaiveTime) -> Self {
        self.start_time(start).end_time(end)
    }

    pub fn break_minutes(mut self, v: u32) -> Self {
        self.inner.break_minutes = Some(v);
        self
    }

    pub fn duration_hours(mut self, v: f64) -> Self {
        self.inner.duration_hours = Some(v);
        self
    }

    pub fn source_file(mut self, v: impl Into<String>) -> Self {
        self.inner.source_file = Some(v.into());
        self
    }

    pub fn build(self) -> CreateTimeEntry {
        self.inner
    }
}

#[cfg(test)]
mod create_time_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreateTimeEntryBuilder::default().build();
        assert_eq!(built.employee_id, 1);
        assert_eq!(built.date, day());
        assert_eq!(built.start_time, None);
        assert_eq!(built.end_time, None);
        assert_eq!(built.activity.as_deref(), Some("Inbetriebnahme"));
    }

    #[rstest]
    fn setters_override_fields() {
        let built = CreateTimeEntryBuilder::new()
            .employee_id(2)
            .times(at(8, 0), at(9, 0))
            .break_minutes(15)
            .source_file("export.xlsx")
            .build();
        assert_eq!(built.employee_id, 2);
        assert_eq!(built.start_time, Some(at(8, 0)));
        assert_eq!(built.end_time, Some(at(9, 0)));
        assert_eq!(built.break_minutes, Some(15));
        assert_eq!(built.source_file.as_deref(), Some("export.xlsx"));
    }
}
