use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub firm: String,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub default_hourly_rate: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub firm: String,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub default_hourly_rate: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl NewCustomer {
    pub fn into_customer(self, id: i64) -> Customer {
        Customer {
            id,
            firm: self.firm,
            contact_person: self.contact_person,
            address: self.address,
            postal_code: self.postal_code,
            city: self.city,
            email: self.email,
            phone: self.phone,
            default_hourly_rate: self.default_hourly_rate,
            created_at: self.created_at,
        }
    }
}
