use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for bulk enrollment changes.
#[derive(Deserialize, Debug, ToSchema)]
pub struct SubjectIdsDto {
    pub subject_ids: Vec<i64>,
}

/// Count of associations actually created by a bulk add. Pairs that
/// already existed are skipped and not counted.
#[derive(Serialize, Debug, ToSchema)]
pub struct AddedResponse {
    pub added: u64,
}

/// Count of associations actually deleted by a bulk remove. Ids that were
/// never enrolled are skipped and not counted.
#[derive(Serialize, Debug, ToSchema)]
pub struct RemovedResponse {
    pub removed: u64,
}
