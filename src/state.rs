use sqlx::SqlitePool;

use crate::config::app::AppConfig;
use crate::config::auth::AuthConfig;
use crate::config::database::init_db_pool;
use crate::modules::subjects::service::SubjectService;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: SqlitePool,
    pub auth_config: AuthConfig,
    pub app_config: AppConfig,
}

pub async fn init_app_state() -> AppState {
    let db = init_db_pool().await;

    SubjectService::seed_defaults(&db)
        .await
        .expect("Failed to seed subject catalogue");

    AppState {
        db,
        auth_config: AuthConfig::from_env(),
        app_config: AppConfig::from_env(),
    }
}
