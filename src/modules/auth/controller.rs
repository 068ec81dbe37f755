use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;
use axum::Json;
use axum::extract::State;
use tracing::instrument;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Exchange the admin credentials for the shared API token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing username or password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(&state.auth_config, dto)?;
    tracing::info!(username = %response.username, "Admin logged in");
    Ok(Json(response))
}
