use async_trait::async_trait;

use crate::modules::employees::core::employee::{Employee, NewEmployee};
use crate::shared::infrastructure::unit_of_work::StoreError;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_employee(&self, id: i64) -> Result<Option<Employee>, StoreError>;
    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError>;
    async fn insert_employee(&mut self, employee: NewEmployee) -> Result<Employee, StoreError>;
    async fn update_employee(&mut self, employee: Employee) -> Result<(), StoreError>;
}
