use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::core::nullable::deserialize_nullable;

pub const DEFAULT_WEEKLY_HOURS: f64 = 42.0;
pub const DEFAULT_WORKLOAD_PERCENT: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub short_code: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub weekly_hours: f64,
    pub workload_percent: f64,
    pub active: bool,
    pub is_admin: bool,
    pub can_manage_projects: bool,
    pub can_see_customers_projects: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub short_code: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub weekly_hours: f64,
    pub workload_percent: f64,
    pub active: bool,
    pub is_admin: bool,
    pub can_manage_projects: bool,
    pub can_see_customers_projects: bool,
    pub created_at: DateTime<Utc>,
}

impl NewEmployee {
    pub fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            name: self.name,
            short_code: self.short_code,
            email: self.email,
            phone: self.phone,
            weekly_hours: self.weekly_hours,
            workload_percent: self.workload_percent,
            active: self.active,
            is_admin: self.is_admin,
            can_manage_projects: self.can_manage_projects,
            can_see_customers_projects: self.can_see_customers_projects,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Fields an employee update may touch. Absent fields stay as they are.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EmployeePatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub short_code: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub phone: Option<Option<String>>,
    pub weekly_hours: Option<f64>,
    pub workload_percent: Option<f64>,
    pub active: Option<bool>,
    pub is_admin: Option<bool>,
    pub can_manage_projects: Option<bool>,
    pub can_see_customers_projects: Option<bool>,
}

impl EmployeePatch {
    pub fn apply_to(self, employee: &mut Employee, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(short_code) = self.short_code {
            employee.short_code = short_code;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(phone) = self.phone {
            employee.phone = phone;
        }
        if let Some(weekly_hours) = self.weekly_hours {
            employee.weekly_hours = weekly_hours;
        }
        if let Some(workload_percent) = self.workload_percent {
            employee.workload_percent = workload_percent;
        }
        if let Some(active) = self.active {
            employee.active = active;
        }
        if let Some(is_admin) = self.is_admin {
            employee.is_admin = is_admin;
        }
        if let Some(can_manage_projects) = self.can_manage_projects {
            employee.can_manage_projects = can_manage_projects;
        }
        if let Some(can_see_customers_projects) = self.can_see_customers_projects {
            employee.can_see_customers_projects = can_see_customers_projects;
        }
        employee.updated_at = now;
    }
}
