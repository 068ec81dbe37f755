use crate::modules::enrollments::controller::{
    add_subjects, get_student_subjects, remove_subjects,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Nested under `/api/students/{id}/subjects`.
pub fn init_enrollments_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_student_subjects).post(add_subjects))
        .route("/remove", post(remove_subjects))
}
