use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};

use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::shared::infrastructure::http::{Ack, LockOverrideParams};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(time_entry_id): Path<i64>,
    Query(params): Query<LockOverrideParams>,
) -> Response {
    let command = DeleteTimeEntry {
        time_entry_id,
        override_lock: params.override_lock,
    };
    match state.delete_time_entry_handler.handle(command).await {
        Ok(_) => Ack::ok().into_response(),
        Err(err) => err.into_response(),
    }
}
