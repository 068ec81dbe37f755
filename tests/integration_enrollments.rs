mod common;

use axum::http::StatusCode;
use common::{authed_request, body_json, create_student_with_id, setup_test_app, student_payload};
use serde_json::json;
use sqlx::SqlitePool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_add_subjects_reports_count(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let id = create_student_with_id(
        &app,
        student_payload("Ann", "Lee", "9123456780", "ann@example.com"),
    )
    .await;

    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            &format!("/api/students/{id}/subjects"),
            Some(json!({"subject_ids": [1]})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["added"], 1);

    let response = app
        .clone()
        .oneshot(authed_request("GET", &format!("/api/students/{id}/subjects"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let subjects = body_json(response).await;
    assert_eq!(subjects, json!([{"id": 1, "name": "Mathematics"}]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_subjects_skips_existing_pairs(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let id = create_student_with_id(
        &app,
        student_payload("Ann", "Lee", "9123456780", "ann@example.com"),
    )
    .await;

    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            &format!("/api/students/{id}/subjects"),
            Some(json!({"subject_ids": [1, 2]})),
        ))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["added"], 2);

    // Only subject 3 is new this time.
    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            &format!("/api/students/{id}/subjects"),
            Some(json!({"subject_ids": [1, 2, 3]})),
        ))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["added"], 1);

    let response = app
        .clone()
        .oneshot(authed_request("GET", &format!("/api/students/{id}/subjects"), None))
        .await
        .unwrap();
    let subjects = body_json(response).await;
    let names: Vec<&str> = subjects
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    // Mathematics (1), Physics (2), Chemistry (3), alphabetical by name.
    assert_eq!(names, vec!["Chemistry", "Mathematics", "Physics"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_subjects_empty_list(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let id = create_student_with_id(
        &app,
        student_payload("Ann", "Lee", "9123456780", "ann@example.com"),
    )
    .await;

    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            &format!("/api/students/{id}/subjects"),
            Some(json!({"subject_ids": []})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "No subject ids provided");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_subjects_invalid_ids_named_sorted(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let id = create_student_with_id(
        &app,
        student_payload("Ann", "Lee", "9123456780", "ann@example.com"),
    )
    .await;

    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            &format!("/api/students/{id}/subjects"),
            Some(json!({"subject_ids": [99, 1, 42]})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid subject ids: [42, 99]");

    // Nothing was inserted for the valid id either.
    let response = app
        .clone()
        .oneshot(authed_request("GET", &format!("/api/students/{id}/subjects"), None))
        .await
        .unwrap();
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_subjects_student_not_found(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            "/api/students/999/subjects",
            Some(json!({"subject_ids": [1]})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_remove_subjects_ignores_never_enrolled(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let id = create_student_with_id(
        &app,
        student_payload("Ann", "Lee", "9123456780", "ann@example.com"),
    )
    .await;

    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            &format!("/api/students/{id}/subjects"),
            Some(json!({"subject_ids": [1, 2, 3]})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // 99 was never enrolled and is not even a catalogue id.
    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            &format!("/api/students/{id}/subjects/remove"),
            Some(json!({"subject_ids": [2, 99]})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["removed"], 1);

    let response = app
        .clone()
        .oneshot(authed_request("GET", &format!("/api/students/{id}/subjects"), None))
        .await
        .unwrap();
    let subjects = body_json(response).await;
    let ids: Vec<i64> = subjects
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&1));
    assert!(ids.contains(&3));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_remove_subjects_empty_list(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let id = create_student_with_id(
        &app,
        student_payload("Ann", "Lee", "9123456780", "ann@example.com"),
    )
    .await;

    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            &format!("/api/students/{id}/subjects/remove"),
            Some(json!({"subject_ids": []})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_remove_subjects_student_not_found(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            "/api/students/999/subjects/remove",
            Some(json!({"subject_ids": [1]})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_subjects_alphabetical(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let id = create_student_with_id(
        &app,
        student_payload("Ann", "Lee", "9123456780", "ann@example.com"),
    )
    .await;

    // Physics (2), History (5), Biology (4) — listed as Biology, History, Physics.
    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            &format!("/api/students/{id}/subjects"),
            Some(json!({"subject_ids": [2, 5, 4]})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(authed_request("GET", &format!("/api/students/{id}/subjects"), None))
        .await
        .unwrap();
    let subjects = body_json(response).await;
    let names: Vec<&str> = subjects
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Biology", "History", "Physics"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_subjects_student_not_found(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let response = app
        .clone()
        .oneshot(authed_request("GET", "/api/students/999/subjects", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
