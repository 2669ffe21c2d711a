use std::sync::Arc;

use tracing::{info, warn};

use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::submission::ensure_mutable;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::filesystem::ProjectFiles;
use crate::shared::infrastructure::unit_of_work::{Store, UnitOfWork};

pub struct DeleteTimeEntryHandler<TStore>
where
    TStore: Store,
{
    store: Arc<TStore>,
    files: Arc<ProjectFiles>,
}

impl<TStore> DeleteTimeEntryHandler<TStore>
where
    TStore: Store,
{
    pub fn new(store: Arc<TStore>, files: Arc<ProjectFiles>) -> Self {
        Self { store, files }
    }

    pub async fn handle(&self, command: DeleteTimeEntry) -> Result<TimeEntry, ApplicationError> {
        let mut uow = self.store.begin().await?;

        let entry = uow
            .find_time_entry(command.time_entry_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("time entry", command.time_entry_id))?;
        ensure_mutable(&entry, command.override_lock)?;

        uow.delete_time_entry(entry.id).await?;
        uow.commit().await?;
        info!(time_entry_id = entry.id, employee_id = entry.employee_id, "time entry deleted");

        if let Some(source_file) = entry.source_file.as_deref() {
            self.remove_source_file(entry.id, source_file).await;
        }
        Ok(entry)
    }

    async fn remove_source_file(&self, time_entry_id: i64, source_file: &str) {
        match self.files.remove_source_file(source_file).await {
            Ok(true) => info!(time_entry_id, source_file, "source file removed"),
            Ok(false) => {}
            Err(err) => warn!(
                time_entry_id,
                source_file,
                error = %err,
                "could not remove source file of deleted time entry"
            ),
        }
    }
}
