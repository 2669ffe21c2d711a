use crate::modules::time_entries::core::overlap::{Candidate, check_no_overlap};
use crate::modules::time_entries::core::policy::OverlapScope;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::TimeEntryFilter;
use crate::shared::application::errors::ApplicationError;

/// Loads the employee's entries inside the caller's unit of work and runs the
/// overlap check. Nothing is loaded while the candidate is still running.
pub async fn ensure_no_overlap<TRepository>(
    repository: &TRepository,
    candidate: &Candidate,
    scope: OverlapScope,
) -> Result<(), ApplicationError>
where
    TRepository: TimeEntryRepository + ?Sized,
{
    if candidate.start_time.is_none() || candidate.end_time.is_none() {
        return Ok(());
    }
    let existing = repository
        .list_time_entries(&TimeEntryFilter::for_employee(candidate.employee_id))
        .await?;
    check_no_overlap(&existing, candidate, scope)?;
    Ok(())
}
