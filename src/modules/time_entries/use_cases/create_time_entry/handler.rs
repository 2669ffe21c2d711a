use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::modules::employees::core::ports::EmployeeRepository;
use crate::modules::time_entries::core::duration::compute_duration_hours;
use crate::modules::time_entries::core::overlap::Candidate;
use crate::modules::time_entries::core::policy::TimeEntryPolicy;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::{
    DEFAULT_SOURCE_SYSTEM, NewTimeEntry, TimeEntry,
};
use crate::modules::time_entries::use_cases::create_time_entry::command::CreateTimeEntry;
use crate::modules::time_entries::use_cases::overlap_guard::ensure_no_overlap;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::unit_of_work::{Store, UnitOfWork};

pub struct CreateTimeEntryHandler<TStore>
where
    TStore: Store,
{
    store: Arc<TStore>,
    policy: TimeEntryPolicy,
}

impl<TStore> CreateTimeEntryHandler<TStore>
where
    TStore: Store,
{
    pub fn new(store: Arc<TStore>, policy: TimeEntryPolicy) -> Self {
        Self { store, policy }
    }

    pub async fn handle(&self, command: CreateTimeEntry) -> Result<TimeEntry, ApplicationError> {
        let mut uow = self.store.begin().await?;

        if uow.find_employee(command.employee_id).await?.is_none() {
            return Err(ApplicationError::not_found("employee", command.employee_id));
        }

        let candidate = Candidate {
            employee_id: command.employee_id,
            date: command.date,
            start_time: command.start_time,
            end_time: command.end_time,
            exclude_time_entry_id: None,
        };
        ensure_no_overlap(&uow, &candidate, self.policy.overlap_scope).await?;

        let break_minutes = command.break_minutes.unwrap_or(0);
        let duration_hours =
            compute_duration_hours(command.start_time, command.end_time, break_minutes)
                .or(command.duration_hours);

        let entry = uow
            .insert_time_entry(NewTimeEntry {
                employee_id: command.employee_id,
                customer_id: command.customer_id,
                project_id: command.project_id,
                date: command.date,
                start_time: command.start_time,
                end_time: command.end_time,
                break_minutes,
                duration_hours,
                activity: command.activity,
                details: command.details,
                amount: command.amount,
                source_file: command.source_file,
                external_id: command.external_id,
                source_system: command
                    .source_system
                    .unwrap_or_else(|| DEFAULT_SOURCE_SYSTEM.to_string()),
                created_at: Utc::now(),
            })
            .await?;
        uow.commit().await?;

        info!(
            time_entry_id = entry.id,
            employee_id = entry.employee_id,
            running = entry.is_running(),
            "time entry created"
        );
        Ok(entry)
    }
}
