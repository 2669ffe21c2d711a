use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::time_entries::core::submission::DateRange;
use crate::modules::time_entries::core::time_entry::TimeEntryFilter;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListTimeEntriesParams {
    pub employee_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub project_id: Option<i64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl From<ListTimeEntriesParams> for TimeEntryFilter {
    fn from(params: ListTimeEntriesParams) -> Self {
        Self {
            employee_id: params.employee_id,
            customer_id: params.customer_id,
            project_id: params.project_id,
            range: DateRange {
                from: params.from,
                to: params.to,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RunningParams {
    pub employee_id: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListTimeEntriesParams>,
) -> Response {
    match state.time_entry_queries.list(&params.into()).await {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Responds with `null` when the employee has no running entry.
pub async fn running(
    State(state): State<AppState>,
    Query(params): Query<RunningParams>,
) -> Response {
    match state.time_entry_queries.running(params.employee_id).await {
        Ok(entry) => Json(entry).into_response(),
        Err(err) => err.into_response(),
    }
}
