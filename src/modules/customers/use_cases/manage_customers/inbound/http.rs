use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::customers::use_cases::manage_customers::command::CreateCustomer;
use crate::shared::infrastructure::http::{Ack, unprocessable};
use crate::shell::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateCustomer>, JsonRejection>,
) -> Response {
    let Json(command) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection),
    };
    match state.customers.create(command).await {
        Ok(customer) => (StatusCode::CREATED, Json(customer)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list(State(state): State<AppState>) -> Response {
    match state.customers.list().await {
        Ok(customers) => Json(customers).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete(State(state): State<AppState>, Path(customer_id): Path<i64>) -> Response {
    match state.customers.delete(customer_id).await {
        Ok(()) => Ack::ok().into_response(),
        Err(err) => err.into_response(),
    }
}
