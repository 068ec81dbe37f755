use crate::modules::auth::controller::ErrorResponse;
use crate::modules::students::model::{AckResponse, Student, StudentDetailResponse, StudentDto};
use crate::modules::students::service::StudentService;
use crate::modules::subjects::service::SubjectService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = StudentDto,
    responses(
        (status = 200, description = "Student registered successfully", body = AckResponse),
        (status = 400, description = "Duplicate phone or email", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<StudentDto>,
) -> Result<Json<AckResponse>, AppError> {
    StudentService::create_student(&state.db, dto).await?;
    Ok(Json(AckResponse::new("Student registered successfully!")))
}

#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "List of students", body = [Student]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::get_students(&state.db).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student with enrolled and available subjects", body = StudentDetailResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StudentDetailResponse>, AppError> {
    let student = StudentService::get_student_by_id(&state.db, id).await?;
    let enrolled = SubjectService::enrolled_for_student(&state.db, id).await?;
    let available = SubjectService::available_for_student(&state.db, id).await?;

    Ok(Json(StudentDetailResponse::new(student, enrolled, available)))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    request_body = StudentDto,
    responses(
        (status = 200, description = "Student updated successfully", body = AckResponse),
        (status = 400, description = "Duplicate phone or email", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<StudentDto>,
) -> Result<Json<AckResponse>, AppError> {
    StudentService::update_student(&state.db, id, dto).await?;
    Ok(Json(AckResponse::new("Student updated successfully!")))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted", body = AckResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AckResponse>, AppError> {
    StudentService::delete_student(&state.db, id).await?;
    Ok(Json(AckResponse::new("Student deleted")))
}
