use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A subject students can enroll in.
///
/// The catalogue is fixed: it is seeded at database initialization and no
/// create/delete API is exposed for subjects.
#[derive(Serialize, FromRow, Debug, ToSchema)]
pub struct Subject {
    pub id: i64,
    pub name: String,
}
