use serde::Deserialize;

use crate::modules::employees::core::employee::EmployeePatch;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateEmployee {
    pub name: String,
    pub short_code: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub weekly_hours: Option<f64>,
    pub workload_percent: Option<f64>,
    pub active: Option<bool>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub can_manage_projects: bool,
    #[serde(default)]
    pub can_see_customers_projects: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEmployee {
    pub employee_id: i64,
    pub patch: EmployeePatch,
}
