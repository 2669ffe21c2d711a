// In memory implementation of the Store port.
//
// Purpose
// - Run the service and its tests without a database.
//
// Responsibilities
// - Keep every table in one map per entity, with a sequence per table.
// - Serialise units of work: a unit of work owns the store lock from begin to
//   commit or drop. Reads go straight to the locked tables; the first write
//   stages a copy, which commit publishes.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::modules::customers::core::customer::{Customer, NewCustomer};
use crate::modules::customers::core::ports::CustomerRepository;
use crate::modules::employees::core::employee::{Employee, NewEmployee};
use crate::modules::employees::core::ports::EmployeeRepository;
use crate::modules::projects::core::ports::ProjectRepository;
use crate::modules::projects::core::project::{NewProject, Project};
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::{NewTimeEntry, TimeEntry, TimeEntryFilter};
use crate::shared::infrastructure::unit_of_work::{Store, StoreError, UnitOfWork};

#[derive(Debug, Clone, Default)]
struct Sequences {
    time_entry: i64,
    employee: i64,
    customer: i64,
    project: i64,
}

fn next_id(sequence: &mut i64) -> i64 {
    *sequence += 1;
    *sequence
}

#[derive(Debug, Clone, Default)]
struct Tables {
    time_entries: BTreeMap<i64, TimeEntry>,
    employees: BTreeMap<i64, Employee>,
    customers: BTreeMap<i64, Customer>,
    projects: BTreeMap<i64, Project>,
    sequences: Sequences,
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
    delay_commit_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Holds every commit back, to widen the window between check and write.
    pub fn set_delay_commit_ms(&self, ms: u64) {
        self.delay_commit_ms.store(ms, Ordering::SeqCst);
    }
}

#[async_trait]
impl Store for InMemoryStore {
    type UnitOfWork = InMemoryUnitOfWork;

    async fn begin(&self) -> Result<InMemoryUnitOfWork, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Store offline".into()));
        }
        let guard = Arc::clone(&self.tables).lock_owned().await;
        Ok(InMemoryUnitOfWork {
            guard,
            staged: None,
            delay_commit_ms: self.delay_commit_ms.load(Ordering::SeqCst),
        })
    }
}

pub struct InMemoryUnitOfWork {
    guard: OwnedMutexGuard<Tables>,
    staged: Option<Tables>,
    delay_commit_ms: u64,
}

impl InMemoryUnitOfWork {
    fn tables(&self) -> &Tables {
        self.staged.as_ref().unwrap_or(&*self.guard)
    }

    fn tables_mut(&mut self) -> &mut Tables {
        let committed: &Tables = &self.guard;
        self.staged.get_or_insert_with(|| committed.clone())
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn commit(self) -> Result<(), StoreError> {
        let Self {
            mut guard,
            staged,
            delay_commit_ms,
        } = self;
        if delay_commit_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_commit_ms)).await;
        }
        if let Some(staged) = staged {
            *guard = staged;
        }
        Ok(())
    }
}

#[async_trait]
impl TimeEntryRepository for InMemoryUnitOfWork {
    async fn find_time_entry(&self, id: i64) -> Result<Option<TimeEntry>, StoreError> {
        Ok(self.tables().time_entries.get(&id).cloned())
    }

    async fn list_time_entries(
        &self,
        filter: &TimeEntryFilter,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        Ok(self
            .tables()
            .time_entries
            .values()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect())
    }

    async fn insert_time_entry(&mut self, entry: NewTimeEntry) -> Result<TimeEntry, StoreError> {
        let id = next_id(&mut self.tables_mut().sequences.time_entry);
        let entry = entry.into_time_entry(id);
        self.tables_mut().time_entries.insert(id, entry.clone());
        Ok(entry)
    }

    async fn update_time_entry(&mut self, entry: TimeEntry) -> Result<(), StoreError> {
        match self.tables_mut().time_entries.get_mut(&entry.id) {
            Some(row) => {
                *row = entry;
                Ok(())
            }
            None => Err(StoreError::Backend(format!(
                "time entry {} does not exist",
                entry.id
            ))),
        }
    }

    async fn delete_time_entry(&mut self, id: i64) -> Result<(), StoreError> {
        self.tables_mut().time_entries.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryUnitOfWork {
    async fn find_employee(&self, id: i64) -> Result<Option<Employee>, StoreError> {
        Ok(self.tables().employees.get(&id).cloned())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.tables().employees.values().cloned().collect())
    }

    async fn insert_employee(&mut self, employee: NewEmployee) -> Result<Employee, StoreError> {
        let id = next_id(&mut self.tables_mut().sequences.employee);
        let employee = employee.into_employee(id);
        self.tables_mut().employees.insert(id, employee.clone());
        Ok(employee)
    }

    async fn update_employee(&mut self, employee: Employee) -> Result<(), StoreError> {
        match self.tables_mut().employees.get_mut(&employee.id) {
            Some(row) => {
                *row = employee;
                Ok(())
            }
            None => Err(StoreError::Backend(format!(
                "employee {} does not exist",
                employee.id
            ))),
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryUnitOfWork {
    async fn find_customer(&self, id: i64) -> Result<Option<Customer>, StoreError> {
        Ok(self.tables().customers.get(&id).cloned())
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(self.tables().customers.values().cloned().collect())
    }

    async fn insert_customer(&mut self, customer: NewCustomer) -> Result<Customer, StoreError> {
        let id = next_id(&mut self.tables_mut().sequences.customer);
        let customer = customer.into_customer(id);
        self.tables_mut().customers.insert(id, customer.clone());
        Ok(customer)
    }

    async fn delete_customer(&mut self, id: i64) -> Result<(), StoreError> {
        self.tables_mut().customers.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for InMemoryUnitOfWork {
    async fn find_project(&self, id: i64) -> Result<Option<Project>, StoreError> {
        Ok(self.tables().projects.get(&id).cloned())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.tables().projects.values().cloned().collect())
    }

    async fn insert_project(&mut self, project: NewProject) -> Result<Project, StoreError> {
        let id = next_id(&mut self.tables_mut().sequences.project);
        let project = project.into_project(id);
        self.tables_mut().projects.insert(id, project.clone());
        Ok(project)
    }

    async fn update_project(&mut self, project: Project) -> Result<(), StoreError> {
        match self.tables_mut().projects.get_mut(&project.id) {
            Some(row) => {
                *row = project;
                Ok(())
            }
            None => Err(StoreError::Backend(format!(
                "project {} does not exist",
                project.id
            ))),
        }
    }

    async fn delete_project(&mut self, id: i64) -> Result<(), StoreError> {
        self.tables_mut().projects.remove(&id);
        Ok(())
    }
}
