use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::projects::use_cases::manage_projects::command::CreateProject;
use crate::shared::infrastructure::http::{Ack, unprocessable};
use crate::shell::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateProject>, JsonRejection>,
) -> Response {
    let Json(command) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection),
    };
    match state.projects.create(command).await {
        Ok(project) => (StatusCode::CREATED, Json(project)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list(State(state): State<AppState>) -> Response {
    match state.projects.list_open().await {
        Ok(projects) => Json(projects).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete(State(state): State<AppState>, Path(project_id): Path<i64>) -> Response {
    match state.projects.delete(project_id).await {
        Ok(()) => Ack::ok().into_response(),
        Err(err) => err.into_response(),
    }
}
