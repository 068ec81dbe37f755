use std::env;

/// Presentation and logging settings.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Heading shown on the landing route.
    pub heading: String,
    /// Enables the action log file layer.
    pub logging_enabled: bool,
    /// Path of the action log file.
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            heading: env::var("APP_HEADING")
                .unwrap_or_else(|_| "Student Registration System".to_string()),
            logging_enabled: env::var("LOGGING")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "student_actions.log".to_string()),
        }
    }
}
