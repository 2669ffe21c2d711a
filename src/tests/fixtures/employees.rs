use chrono::Utc;

use crate::modules::employees::core::employee::{
    DEFAULT_WEEKLY_HOURS, DEFAULT_WORKLOAD_PERCENT, Employee, NewEmployee,
};
use crate::modules::employees::core::ports::EmployeeRepository;
use crate::shared::infrastructure::unit_of_work::in_memory::InMemoryStore;
use crate::shared::infrastructure::unit_of_work::{Store, UnitOfWork};

pub fn make_new_employee(name: &str) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        short_code: None,
        email: None,
        phone: None,
        weekly_hours: DEFAULT_WEEKLY_HOURS,
        workload_percent: DEFAULT_WORKLOAD_PERCENT,
        active: true,
        is_admin: false,
        can_manage_projects: false,
        can_see_customers_projects: false,
        created_at: Utc::now(),
    }
}

pub fn make_employee(id: i64, name: &str) -> Employee {
    make_new_employee(name).into_employee(id)
}

pub async fn seed_employee(store: &InMemoryStore, name: &str) -> Employee {
    let mut uow = store.begin().await.unwrap();
    let employee = uow.insert_employee(make_new_employee(name)).await.unwrap();
    uow.commit().await.unwrap();
    employee
}
