use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::modules::employees::core::employee::{
    DEFAULT_WEEKLY_HOURS, DEFAULT_WORKLOAD_PERCENT, Employee, NewEmployee,
};
use crate::modules::employees::core::ports::EmployeeRepository;
use crate::modules::employees::use_cases::manage_employees::command::{
    CreateEmployee, UpdateEmployee,
};
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::unit_of_work::{Store, UnitOfWork};

pub struct ManageEmployeesHandler<TStore>
where
    TStore: Store,
{
    store: Arc<TStore>,
}

impl<TStore> ManageEmployeesHandler<TStore>
where
    TStore: Store,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, command: CreateEmployee) -> Result<Employee, ApplicationError> {
        let mut uow = self.store.begin().await?;
        let employee = uow
            .insert_employee(NewEmployee {
                name: command.name,
                short_code: command.short_code,
                email: command.email,
                phone: command.phone,
                weekly_hours: command.weekly_hours.unwrap_or(DEFAULT_WEEKLY_HOURS),
                workload_percent: command.workload_percent.unwrap_or(DEFAULT_WORKLOAD_PERCENT),
                active: command.active.unwrap_or(true),
                is_admin: command.is_admin,
                can_manage_projects: command.can_manage_projects,
                can_see_customers_projects: command.can_see_customers_projects,
                created_at: Utc::now(),
            })
            .await?;
        uow.commit().await?;

        info!(employee_id = employee.id, "employee created");
        Ok(employee)
    }

    pub async fn list(&self) -> Result<Vec<Employee>, ApplicationError> {
        let uow = self.store.begin().await?;
        let mut employees = uow.list_employees().await?;
        employees.sort_by_key(|employee| employee.id);
        Ok(employees)
    }

    pub async fn update(&self, command: UpdateEmployee) -> Result<Employee, ApplicationError> {
        let mut uow = self.store.begin().await?;
        let mut employee = uow
            .find_employee(command.employee_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("employee", command.employee_id))?;

        command.patch.apply_to(&mut employee, Utc::now());
        uow.update_employee(employee.clone()).await?;
        uow.commit().await?;

        info!(employee_id = employee.id, "employee updated");
        Ok(employee)
    }
}
