use async_graphql::{Context, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::time_entries::core::submission::DateRange;
use crate::modules::time_entries::use_cases::submit_time_entries::command::SubmitTimeEntries;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SubmitTimeEntriesMutation;

#[Object]
impl SubmitTimeEntriesMutation {
    /// Returns how many entries were newly submitted.
    async fn submit_time_entries(
        &self,
        context: &Context<'_>,
        employee_id: i64,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> GqlResult<i64> {
        let state = context.data_unchecked::<AppState>();
        let command = SubmitTimeEntries {
            employee_id,
            range: DateRange { from, to },
        };
        let count = state
            .submit_time_entries_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(count as i64)
    }
}
