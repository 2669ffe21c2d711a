use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateTimeEntry {
    pub employee_id: i64,
    pub customer_id: Option<i64>,
    pub project_id: Option<i64>,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub break_minutes: Option<u32>,
    /// Only kept while one of the clock times is missing.
    pub duration_hours: Option<f64>,
    pub activity: Option<String>,
    pub details: Option<String>,
    pub amount: Option<f64>,
    pub source_file: Option<String>,
    pub external_id: Option<String>,
    pub source_system: Option<String>,
}
