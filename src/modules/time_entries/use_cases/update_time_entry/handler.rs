use std::sync::Arc;

use tracing::{info, warn};

use crate::modules::employees::core::ports::EmployeeRepository;
use crate::modules::time_entries::core::overlap::Candidate;
use crate::modules::time_entries::core::policy::TimeEntryPolicy;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::submission::ensure_mutable;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::overlap_guard::ensure_no_overlap;
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::unit_of_work::{Store, UnitOfWork};

pub struct UpdateTimeEntryHandler<TStore>
where
    TStore: Store,
{
    store: Arc<TStore>,
    policy: TimeEntryPolicy,
}

impl<TStore> UpdateTimeEntryHandler<TStore>
where
    TStore: Store,
{
    pub fn new(store: Arc<TStore>, policy: TimeEntryPolicy) -> Self {
        Self { store, policy }
    }

    pub async fn handle(&self, command: UpdateTimeEntry) -> Result<TimeEntry, ApplicationError> {
        let mut uow = self.store.begin().await?;

        let mut entry = uow
            .find_time_entry(command.time_entry_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("time entry", command.time_entry_id))?;
        ensure_mutable(&entry, command.override_lock)?;

        if let Some(employee_id) = command.patch.employee_id
            && employee_id != entry.employee_id
            && uow.find_employee(employee_id).await?.is_none()
        {
            return Err(ApplicationError::not_found("employee", employee_id));
        }

        let was_submitted = entry.submitted;
        command.patch.apply_to(&mut entry);
        ensure_no_overlap(&uow, &Candidate::of(&entry), self.policy.overlap_scope).await?;
        entry.recompute_duration();
        if was_submitted {
            entry.reopen();
            warn!(
                time_entry_id = entry.id,
                employee_id = entry.employee_id,
                "submitted time entry edited with override, entry reopened"
            );
        }

        uow.update_time_entry(entry.clone()).await?;
        uow.commit().await?;

        info!(time_entry_id = entry.id, employee_id = entry.employee_id, "time entry updated");
        Ok(entry)
    }
}
