use async_graphql::{Context, InputObject, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::modules::time_entries::core::submission::DateRange;
use crate::modules::time_entries::core::time_entry::{TimeEntry, TimeEntryFilter};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTimeEntry {
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

impl From<TimeEntry> for GqlTimeEntry {
    fn from(v: TimeEntry) -> Self {
        Self {
            id: v.id,
            employee_id: v.employee_id,
            customer_id: v.customer_id,
            project_id: v.project_id,
            date: v.date,
            start_time: v.start_time,
            end_time: v.end_time,
            break_minutes: v.break_minutes,
            duration_hours: v.duration_hours,
            activity: v.activity,
            details: v.details,
            amount: v.amount,
            source_file: v.source_file,
            external_id: v.external_id,
            source_system: v.source_system,
            submitted: v.submitted,
            submitted_at: v.submitted_at,
            created_at: v.created_at,
        }
    }
}

#[derive(InputObject, Default)]
pub struct TimeEntryFilterInput {
    pub employee_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub project_id: Option<i64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl From<TimeEntryFilterInput> for TimeEntryFilter {
    fn from(v: TimeEntryFilterInput) -> Self {
        Self {
            employee_id: v.employee_id,
            customer_id: v.customer_id,
            project_id: v.project_id,
            range: DateRange {
                from: v.from,
                to: v.to,
            },
        }
    }
}

#[derive(Default)]
pub struct TimeEntryQuery;

#[Object]
impl TimeEntryQuery {
    async fn time_entries(
        &self,
        context: &Context<'_>,
        filter: Option<TimeEntryFilterInput>,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let filter: TimeEntryFilter = filter.unwrap_or_default().into();
        let list = state
            .time_entry_queries
            .list(&filter)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn running_time_entry(
        &self,
        context: &Context<'_>,
        employee_id: i64,
    ) -> GqlResult<Option<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let entry = state
            .time_entry_queries
            .running(employee_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(entry.map(Into::into))
    }
}
