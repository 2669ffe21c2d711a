use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateProject {
    pub customer_id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_quote: bool,
    pub hourly_rate: Option<f64>,
}
