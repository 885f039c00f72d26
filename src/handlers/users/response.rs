//! Current-user response DTOs

use serde::Serialize;

/// Problem counts for one user
#[derive(Debug, Serialize)]
pub struct UserStatsResponse {
    pub total: i64,
    pub solved: i64,
    pub remaining: i64,
}
