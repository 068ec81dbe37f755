use crate::modules::auth::controller::ErrorResponse;
use crate::modules::enrollments::model::{AddedResponse, RemovedResponse, SubjectIdsDto};
use crate::modules::enrollments::service::EnrollmentService;
use crate::modules::subjects::model::Subject;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/api/students/{id}/subjects",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Enrolled subjects, alphabetical by name", body = [Subject]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn get_student_subjects(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects = EnrollmentService::list_subjects(&state.db, id).await?;
    Ok(Json(subjects))
}

#[utoipa::path(
    post,
    path = "/api/students/{id}/subjects",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    request_body = SubjectIdsDto,
    responses(
        (status = 200, description = "Count of enrollments created", body = AddedResponse),
        (status = 400, description = "Empty or invalid subject ids", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn add_subjects(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<SubjectIdsDto>,
) -> Result<Json<AddedResponse>, AppError> {
    let added = EnrollmentService::add_subjects(&state.db, id, &dto.subject_ids).await?;
    Ok(Json(AddedResponse { added }))
}

#[utoipa::path(
    post,
    path = "/api/students/{id}/subjects/remove",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    request_body = SubjectIdsDto,
    responses(
        (status = 200, description = "Count of enrollments deleted", body = RemovedResponse),
        (status = 400, description = "Empty subject ids", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn remove_subjects(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<SubjectIdsDto>,
) -> Result<Json<RemovedResponse>, AppError> {
    let removed = EnrollmentService::remove_subjects(&state.db, id, &dto.subject_ids).await?;
    Ok(Json(RemovedResponse { removed }))
}
