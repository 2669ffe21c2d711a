use async_graphql::{Context, InputObject, MaybeUndefined, Object, Result as GqlResult};
use chrono::{NaiveDate, NaiveTime};

use crate::modules::time_entries::use_cases::list_time_entries::inbound::graphql::GqlTimeEntry;
use crate::modules::time_entries::use_cases::update_time_entry::command::{
    TimeEntryPatch, UpdateTimeEntry,
};
use crate::shell::state::AppState;

/// Omitted fields stay untouched; `null` clears a nullable field.
#[derive(InputObject, Default)]
pub struct UpdateTimeEntryInput {
    pub employee_id: Option<i64>,
    pub customer_id: MaybeUndefined<i64>,
    pub project_id: MaybeUndefined<i64>,
    pub date: Option<NaiveDate>,
    pub start_time: MaybeUndefined<NaiveTime>,
    pub end_time: MaybeUndefined<NaiveTime>,
    pub break_minutes: Option<u32>,
    pub duration_hours: MaybeUndefined<f64>,
    pub activity: MaybeUndefined<String>,
    pub details: MaybeUndefined<String>,
    pub amount: MaybeUndefined<f64>,
}

fn patch_value<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}

impl From<UpdateTimeEntryInput> for TimeEntryPatch {
    fn from(v: UpdateTimeEntryInput) -> Self {
        Self {
            employee_id: v.employee_id,
            customer_id: patch_value(v.customer_id),
            project_id: patch_value(v.project_id),
            date: v.date,
            start_time: patch_value(v.start_time),
            end_time: patch_value(v.end_time),
            break_minutes: v.break_minutes,
            duration_hours: patch_value(v.duration_hours),
            activity: patch_value(v.activity),
            details: patch_value(v.details),
            amount: patch_value(v.amount),
        }
    }
}

#[derive(Default)]
pub struct UpdateTimeEntryMutation;

#[Object]
impl UpdateTimeEntryMutation {
    async fn update_time_entry(
        &self,
        context: &Context<'_>,
        id: i64,
        input: UpdateTimeEntryInput,
        override_lock: Option<bool>,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let command = UpdateTimeEntry {
            time_entry_id: id,
            patch: input.into(),
            override_lock: override_lock.unwrap_or(false),
        };
        let entry = state
            .update_time_entry_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(entry.into())
    }
}
