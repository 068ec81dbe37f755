use anyhow::anyhow;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Shared-secret bearer gate for the protected API routes.
///
/// Rejects the request before it reaches any handler unless the
/// `Authorization: Bearer <token>` header exactly matches the configured
/// security token.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::middleware::auth::require_token;
///
/// let protected_routes = Router::new()
///     .route("/students", get(list_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_token));
/// ```
pub async fn require_token(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::unauthorized(anyhow!("Missing or invalid Authorization header")))?;

    if token != state.auth_config.security_token {
        return Err(AppError::unauthorized(anyhow!("Invalid or expired token")));
    }

    Ok(next.run(req).await)
}
