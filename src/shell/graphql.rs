use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::time_entries::use_cases::create_time_entry::inbound::graphql::CreateTimeEntryMutation;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::graphql::DeleteTimeEntryMutation;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::graphql::TimeEntryQuery;
use crate::modules::time_entries::use_cases::submit_time_entries::inbound::graphql::SubmitTimeEntriesMutation;
use crate::modules::time_entries::use_cases::update_time_entry::inbound::graphql::UpdateTimeEntryMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TimeEntryQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CreateTimeEntryMutation,
    UpdateTimeEntryMutation,
    DeleteTimeEntryMutation,
    SubmitTimeEntriesMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
