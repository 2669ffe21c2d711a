use async_graphql::Request;
use serde_json::json;

use crate::shell::graphql::build_schema;
use crate::tests::fixtures::employees::seed_employee;
use crate::tests::fixtures::state::make_test_state;

#[tokio::test]
async fn creates_queries_and_submits_through_graphql() {
    let (state, store, _root) = make_test_state();
    seed_employee(&store, "Anna Muster").await;
    let schema = build_schema(state);

    let created = schema
        .execute(
            r#"mutation {
                createTimeEntry(input: { employeeId: 1, date: "2025-03-10", startTime: "08:00:00", endTime: "12:00:00", breakMinutes: 30 }) {
                    id
                    durationHours
                }
            }"#,
        )
        .await;
    assert!(created.errors.is_empty(), "{:?}", created.errors);
    assert_eq!(
        created.data.into_json().unwrap(),
        json!({ "createTimeEntry": { "id": 1, "durationHours": 3.5 } })
    );

    let overlapping = schema
        .execute(
            r#"mutation {
                createTimeEntry(input: { employeeId: 1, date: "2025-03-10", startTime: "11:00:00", endTime: "13:00:00" }) { id }
            }"#,
        )
        .await;
    assert_eq!(overlapping.errors[0].message, "time entries must not overlap");

    let submitted = schema
        .execute(Request::new(
            r#"mutation { submitTimeEntries(employeeId: 1) }"#,
        ))
        .await;
    assert_eq!(
        submitted.data.into_json().unwrap(),
        json!({ "submitTimeEntries": 1 })
    );

    let listed = schema
        .execute(r#"{ timeEntries(filter: { employeeId: 1 }) { id submitted } runningTimeEntry(employeeId: 1) { id } }"#)
        .await;
    assert_eq!(
        listed.data.into_json().unwrap(),
        json!({ "timeEntries": [{ "id": 1, "submitted": true }], "runningTimeEntry": null })
    );
}

#[tokio::test]
async fn clears_a_field_with_null_and_deletes_with_override() {
    let (state, store, _root) = make_test_state();
    seed_employee(&store, "Anna Muster").await;
    let schema = build_schema(state);
    schema
        .execute(
            r#"mutation {
                createTimeEntry(input: { employeeId: 1, date: "2025-03-10", startTime: "08:00:00", endTime: "09:00:00" }) { id }
            }"#,
        )
        .await;

    let reopened = schema
        .execute(r#"mutation { updateTimeEntry(id: 1, input: { endTime: null }) { endTime durationHours } }"#)
        .await;
    assert_eq!(
        reopened.data.into_json().unwrap(),
        json!({ "updateTimeEntry": { "endTime": null, "durationHours": 1.0 } })
    );

    schema
        .execute(r#"mutation { updateTimeEntry(id: 1, input: { endTime: "10:00:00" }) { id } }"#)
        .await;
    schema.execute(r#"mutation { submitTimeEntries(employeeId: 1) }"#).await;

    let locked = schema
        .execute(r#"mutation { deleteTimeEntry(id: 1) }"#)
        .await;
    let overridden = schema
        .execute(r#"mutation { deleteTimeEntry(id: 1, overrideLock: true) }"#)
        .await;

    assert_eq!(locked.errors[0].message, "time entry 1 is submitted and locked");
    assert_eq!(
        overridden.data.into_json().unwrap(),
        json!({ "deleteTimeEntry": true })
    );
}
