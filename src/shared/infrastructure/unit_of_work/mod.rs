// Transaction boundary for one request.
//
// Every create, update or delete runs inside a single unit of work: the use case
// begins it, reads and stages changes through the repository traits, then
// commits. Dropping a unit of work without committing discards what was staged.
// Implementations must isolate units of work from each other so that a
// scan-then-write (the overlap guard) cannot interleave with a concurrent writer.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::customers::core::ports::CustomerRepository;
use crate::modules::employees::core::ports::EmployeeRepository;
use crate::modules::projects::core::ports::ProjectRepository;
use crate::modules::time_entries::core::ports::TimeEntryRepository;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait UnitOfWork:
    TimeEntryRepository + EmployeeRepository + CustomerRepository + ProjectRepository + Send + Sync
{
    async fn commit(self) -> Result<(), StoreError>;
}

#[async_trait]
pub trait Store: Send + Sync + 'static {
    type UnitOfWork: UnitOfWork + 'static;

    async fn begin(&self) -> Result<Self::UnitOfWork, StoreError>;
}

pub mod in_memory;
