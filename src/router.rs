use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::require_token;
use crate::modules::auth::router::init_auth_router;
use crate::modules::enrollments::router::init_enrollments_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;
use axum::extract::State;
use axum::http::header;
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

/// Unauthenticated landing route; stands in for the HTML index page.
async fn index(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "heading": state.app_config.heading,
        "status": "ok",
    }))
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/", get(index))
        .nest(
            "/api",
            Router::new().nest("/auth", init_auth_router()).nest(
                "/students",
                init_students_router()
                    .nest("/{id}/subjects", init_enrollments_router())
                    .route_layer(middleware::from_fn_with_state(state.clone(), require_token)),
            ),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers([
                    header::AUTHORIZATION,
                    header::CONTENT_TYPE,
                    header::ACCEPT,
                ]),
        )
        .layer(middleware::from_fn(logging_middleware))
}
