use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use chrono::{NaiveDate, NaiveTime};

use crate::modules::time_entries::use_cases::create_time_entry::command::CreateTimeEntry;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::graphql::GqlTimeEntry;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct CreateTimeEntryInput {
    pub employee_id: i64,
    pub customer_id: Option<i64>,
    pub project_id: Option<i64>,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub break_minutes: Option<u32>,
    pub duration_hours: Option<f64>,
    pub activity: Option<String>,
    pub details: Option<String>,
    pub amount: Option<f64>,
    pub source_file: Option<String>,
    pub external_id: Option<String>,
    pub source_system: Option<String>,
}

impl From<CreateTimeEntryInput> for CreateTimeEntry {
    fn from(v: CreateTimeEntryInput) -> Self {
        Self {
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
        }
    }
}

#[derive(Default)]
pub struct CreateTimeEntryMutation;

#[Object]
impl CreateTimeEntryMutation {
    async fn create_time_entry(
        &self,
        context: &Context<'_>,
        input: CreateTimeEntryInput,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let entry = state
            .create_time_entry_handler
            .handle(input.into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(entry.into())
    }
}
