use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use rollcall::config::app::AppConfig;
use rollcall::config::auth::AuthConfig;
use rollcall::modules::subjects::service::SubjectService;
use rollcall::router::init_router;
use rollcall::state::AppState;
use serde_json::json;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_TOKEN: &str = "test-security-token";
#[allow(dead_code)]
pub const TEST_ADMIN_USERNAME: &str = "admin";
#[allow(dead_code)]
pub const TEST_ADMIN_PASSWORD: &str = "admin123";

/// Build the full application router over a migrated test pool, with the
/// subject catalogue seeded and a fixed auth configuration.
pub async fn setup_test_app(pool: SqlitePool) -> axum::Router {
    SubjectService::seed_defaults(&pool).await.unwrap();

    let state = AppState {
        db: pool,
        auth_config: AuthConfig {
            admin_username: TEST_ADMIN_USERNAME.to_string(),
            admin_password: TEST_ADMIN_PASSWORD.to_string(),
            security_token: TEST_TOKEN.to_string(),
        },
        app_config: AppConfig {
            heading: "Student Registration System".to_string(),
            logging_enabled: false,
            log_file: "student_actions.log".to_string(),
        },
    };

    init_router(state)
}

pub fn student_payload(first: &str, last: &str, phone: &str, email: &str) -> serde_json::Value {
    json!({
        "first_name": first,
        "last_name": last,
        "phone": phone,
        "birthdate": "2000-01-01",
        "email": email,
    })
}

/// Request carrying the test bearer token.
pub fn authed_request(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", TEST_TOKEN));

    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Register a student and return the id the store assigned to it.
///
/// The create endpoint deliberately returns no id, so it is recovered
/// from the list endpoint by email.
#[allow(dead_code)]
pub async fn create_student_with_id(app: &axum::Router, payload: serde_json::Value) -> i64 {
    let email = payload["email"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(authed_request("POST", "/api/students", Some(payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let response = app
        .clone()
        .oneshot(authed_request("GET", "/api/students", None))
        .await
        .unwrap();
    let students = body_json(response).await;

    students
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["email"] == email.as_str())
        .expect("created student missing from list")["id"]
        .as_i64()
        .unwrap()
}
