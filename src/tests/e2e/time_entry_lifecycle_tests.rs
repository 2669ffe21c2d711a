use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or_default())
}

#[tokio::test]
async fn clocks_in_clocks_out_submits_and_locks() {
    let (state, _store, _root) = make_test_state();
    let app = router(state);

    let (status, employee) = call(&app, "POST", "/employees", Some(json!({ "name": "Anna Muster" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let employee_id = employee["id"].as_i64().unwrap();

    let (status, clock_in) = call(
        &app,
        "POST",
        "/timeentries",
        Some(json!({ "employee_id": employee_id, "date": "2025-03-10", "start_time": "07:30" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = clock_in["id"].as_i64().unwrap();

    let (_, running) = call(&app, "GET", &format!("/timeentries/running?employee_id={employee_id}"), None).await;
    assert_eq!(running["id"], id);

    let (status, clock_out) = call(
        &app,
        "PUT",
        &format!("/timeentries/{id}"),
        Some(json!({ "end_time": "12:00", "break_minutes": 30 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(clock_out["duration_hours"], 4.0);

    let (_, running) = call(&app, "GET", &format!("/timeentries/running?employee_id={employee_id}"), None).await;
    assert_eq!(running, Value::Null);

    let (_, first) = call(&app, "POST", &format!("/timeentries/submit?employee_id={employee_id}"), None).await;
    let (_, second) = call(&app, "POST", &format!("/timeentries/submit_open?employee_id={employee_id}"), None).await;
    assert_eq!(first, json!({ "ok": true, "count": 1 }));
    assert_eq!(second, json!({ "ok": true, "count": 0 }));

    let (status, locked) = call(&app, "PUT", &format!("/timeentries/{id}"), Some(json!({ "end_time": "12:30" }))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(locked["detail"], format!("time entry {id} is submitted and locked"));

    let (status, _) = call(&app, "DELETE", &format!("/timeentries/{id}"), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, reopened) = call(
        &app,
        "PUT",
        &format!("/timeentries/{id}?override=true"),
        Some(json!({ "end_time": "12:30" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reopened["submitted"], false);
    assert_eq!(reopened["duration_hours"], 4.5);

    let (status, deleted) = call(&app, "DELETE", &format!("/timeentries/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "ok": true }));

    let (_, listed) = call(&app, "GET", "/timeentries", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn keeps_timed_entries_of_an_employee_disjoint() {
    let (state, _store, _root) = make_test_state();
    let app = router(state);
    call(&app, "POST", "/employees", Some(json!({ "name": "Anna Muster" }))).await;

    let windows = [("08:00", "12:00"), ("11:59", "13:00"), ("12:00", "13:00"), ("07:00", "08:30")];
    let mut statuses = Vec::new();
    for (start, end) in windows {
        let (status, _) = call(
            &app,
            "POST",
            "/timeentries",
            Some(json!({ "employee_id": 1, "date": "2025-03-10", "start_time": start, "end_time": end })),
        )
        .await;
        statuses.push(status);
    }

    assert_eq!(
        statuses,
        vec![
            StatusCode::CREATED,
            StatusCode::BAD_REQUEST,
            StatusCode::CREATED,
            StatusCode::BAD_REQUEST,
        ]
    );

    let (_, running) = call(&app, "POST", "/timeentries", Some(json!({ "employee_id": 1, "date": "2025-03-10", "start_time": "12:30" }))).await;
    let (status, _) = call(
        &app,
        "PUT",
        &format!("/timeentries/{}", running["id"]),
        Some(json!({ "end_time": "13:30" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn answers_the_health_check() {
    let (state, _store, _root) = make_test_state();

    let (status, body) = call(&router(state), "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["msg"].is_string());
}
