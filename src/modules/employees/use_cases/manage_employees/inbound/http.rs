use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::employees::core::employee::EmployeePatch;
use crate::modules::employees::use_cases::manage_employees::command::{
    CreateEmployee, UpdateEmployee,
};
use crate::shared::infrastructure::http::unprocessable;
use crate::shell::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateEmployee>, JsonRejection>,
) -> Response {
    let Json(command) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection),
    };
    match state.employees.create(command).await {
        Ok(employee) => (StatusCode::CREATED, Json(employee)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list(State(state): State<AppState>) -> Response {
    match state.employees.list().await {
        Ok(employees) => Json(employees).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
    body: Result<Json<EmployeePatch>, JsonRejection>,
) -> Response {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection),
    };
    match state
        .employees
        .update(UpdateEmployee { employee_id, patch })
        .await
    {
        Ok(employee) => Json(employee).into_response(),
        Err(err) => err.into_response(),
    }
}
