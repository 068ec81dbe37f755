use tracing::instrument;

use crate::config::auth::AuthConfig;
use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::utils::errors::AppError;

pub struct AuthService;

impl AuthService {
    /// Compare the submitted credentials against the configured admin
    /// pair and hand out the shared token on a match.
    #[instrument(skip_all)]
    pub fn login(auth_config: &AuthConfig, dto: LoginRequest) -> Result<LoginResponse, AppError> {
        if dto.username != auth_config.admin_username
            || dto.password != auth_config.admin_password
        {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid credentials"
            )));
        }

        Ok(LoginResponse {
            token: auth_config.security_token.clone(),
            username: dto.username,
        })
    }
}
