use crate::state::AppState;
use axum::{Router, routing::post};

use super::controller::login;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}
