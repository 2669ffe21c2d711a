use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateCustomer {
    pub firm: String,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub default_hourly_rate: Option<f64>,
}
