use std::env;

/// Credentials for the admin login endpoint and the shared API token.
///
/// The token is a single static secret all authorized clients present as a
/// bearer token. It is not per-user and does not expire.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub admin_username: String,
    pub admin_password: String,
    pub security_token: String,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
            security_token: env::var("SECURITY_TOKEN").unwrap_or_else(|_| "mytoken".to_string()),
        }
    }
}
