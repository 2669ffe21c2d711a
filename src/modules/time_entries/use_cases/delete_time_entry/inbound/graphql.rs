use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteTimeEntryMutation;

#[Object]
impl DeleteTimeEntryMutation {
    async fn delete_time_entry(
        &self,
        context: &Context<'_>,
        id: i64,
        override_lock: Option<bool>,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = DeleteTimeEntry {
            time_entry_id: id,
            override_lock: override_lock.unwrap_or(false),
        };
        state
            .delete_time_entry_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
