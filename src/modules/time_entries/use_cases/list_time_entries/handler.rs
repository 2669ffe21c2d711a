use std::sync::Arc;

use crate::modules::time_entries::core::policy::TimeEntryPolicy;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::{
    TimeEntry, TimeEntryFilter, sort_chronologically,
};
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::unit_of_work::Store;

pub struct TimeEntryQueriesHandler<TStore>
where
    TStore: Store,
{
    store: Arc<TStore>,
    policy: TimeEntryPolicy,
}

impl<TStore> TimeEntryQueriesHandler<TStore>
where
    TStore: Store,
{
    pub fn new(store: Arc<TStore>, policy: TimeEntryPolicy) -> Self {
        Self { store, policy }
    }

    pub async fn list(&self, filter: &TimeEntryFilter) -> Result<Vec<TimeEntry>, ApplicationError> {
        let uow = self.store.begin().await?;
        let mut entries = uow.list_time_entries(filter).await?;
        sort_chronologically(&mut entries);
        Ok(entries)
    }

    /// The employee's most recent entry with a start but no end time, if any.
    pub async fn running(&self, employee_id: i64) -> Result<Option<TimeEntry>, ApplicationError> {
        let uow = self.store.begin().await?;
        let entries = uow
            .list_time_entries(&TimeEntryFilter::for_employee(employee_id))
            .await?;
        Ok(entries
            .into_iter()
            .filter(TimeEntry::is_running)
            .filter(|entry| !(self.policy.running_requires_unsubmitted && entry.submitted))
            .max_by_key(|entry| (entry.date, entry.start_time)))
    }
}
