use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::submission::submit_entries;
use crate::modules::time_entries::core::time_entry::TimeEntryFilter;
use crate::modules::time_entries::use_cases::submit_time_entries::command::SubmitTimeEntries;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::unit_of_work::{Store, UnitOfWork};

pub struct SubmitTimeEntriesHandler<TStore>
where
    TStore: Store,
{
    store: Arc<TStore>,
}

impl<TStore> SubmitTimeEntriesHandler<TStore>
where
    TStore: Store,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Returns how many entries were newly submitted.
    pub async fn handle(&self, command: SubmitTimeEntries) -> Result<usize, ApplicationError> {
        let mut uow = self.store.begin().await?;

        let entries = uow
            .list_time_entries(&TimeEntryFilter::for_employee(command.employee_id))
            .await?;
        let submitted = submit_entries(entries, command.employee_id, &command.range, Utc::now());
        let count = submitted.len();
        for entry in submitted {
            uow.update_time_entry(entry).await?;
        }
        uow.commit().await?;

        info!(employee_id = command.employee_id, count, "time entries submitted");
        Ok(count)
    }
}
