use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

use crate::modules::time_entries::use_cases::update_time_entry::command::{
    TimeEntryPatch, UpdateTimeEntry,
};
use crate::shared::infrastructure::http::{LockOverrideParams, unprocessable};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(time_entry_id): Path<i64>,
    Query(params): Query<LockOverrideParams>,
    body: Result<Json<TimeEntryPatch>, JsonRejection>,
) -> Response {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection),
    };

    let command = UpdateTimeEntry {
        time_entry_id,
        patch,
        override_lock: params.override_lock,
    };
    match state.update_time_entry_handler.handle(command).await {
        Ok(entry) => Json(entry).into_response(),
        Err(err) => err.into_response(),
    }
}
