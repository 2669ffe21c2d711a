use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::time_entries::core::submission::DateRange;
use crate::modules::time_entries::use_cases::submit_time_entries::command::SubmitTimeEntries;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitParams {
    pub employee_id: i64,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub ok: bool,
    pub count: usize,
}

pub async fn handle(State(state): State<AppState>, Query(params): Query<SubmitParams>) -> Response {
    let command = SubmitTimeEntries {
        employee_id: params.employee_id,
        range: DateRange {
            from: params.from,
            to: params.to,
        },
    };
    match state.submit_time_entries_handler.handle(command).await {
        Ok(count) => Json(SubmitResponse { ok: true, count }).into_response(),
        Err(err) => err.into_response(),
    }
}
