use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::time_entries::core::decision::DecideError;
use crate::shared::application::errors::ApplicationError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// `{"ok": true}`, the acknowledgement for deletes.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub fn ok() -> Json<Self> {
        Json(Self { ok: true })
    }
}

/// `?override=true` lets an edit or delete through the submission lock.
#[derive(Debug, Default, Deserialize)]
pub struct LockOverrideParams {
    #[serde(default, rename = "override")]
    pub override_lock: bool,
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApplicationError::Domain(DecideError::Overlap { .. }) => StatusCode::BAD_REQUEST,
            ApplicationError::Domain(DecideError::LockedEntry { .. }) => StatusCode::FORBIDDEN,
            ApplicationError::InUse(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn unprocessable(rejection: JsonRejection) -> Response {
    let body = ErrorBody {
        detail: rejection.body_text(),
    };
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}

#[cfg(test)]
mod http_error_mapping_tests {
    use super::*;
    use crate::shared::infrastructure::unit_of_work::StoreError;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    #[case(ApplicationError::not_found("employee", 7), StatusCode::NOT_FOUND)]
    #[case(
        ApplicationError::Domain(DecideError::Overlap { conflicting_time_entry_id: 1 }),
        StatusCode::BAD_REQUEST
    )]
    #[case(
        ApplicationError::Domain(DecideError::LockedEntry { time_entry_id: 1 }),
        StatusCode::FORBIDDEN
    )]
    #[case(ApplicationError::InUse("customer 1 still has projects".into()), StatusCode::BAD_REQUEST)]
    #[case(
        ApplicationError::Store(StoreError::Backend("Store offline".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn it_should_map_errors_to_status_codes(
        #[case] error: ApplicationError,
        #[case] expected: StatusCode,
    ) {
        assert_eq!(error.status_code(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_carry_the_message_as_detail() {
        let response = ApplicationError::not_found("employee", 7).into_response();

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "detail": "employee 7 not found" }));
    }
}
