use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const CONFIRM_PARAM: &str = "confirm";
pub const START_DATE_PARAM: &str = "startDate";
pub const END_DATE_PARAM: &str = "endDate";

/// Confirmation value of relation-scoped and date-range deletions.
pub const SCOPED_CONFIRMATION: &str = "true";

/// Row set targeted by a bulk deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkScope {
    Relation { segment: String, id: i32 },
    DateRange {
        start: Option<String>,
        end: Option<String>,
    },
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFailure {
    pub id: i32,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteOutcome {
    pub deleted_count: u64,
    /// Rows kept because a dependent cleanup step failed for them.
    pub failures: Vec<DeleteFailure>,
    /// Set when an optional dependent table is absent in this deployment.
    pub dependent_cleanup_skipped: bool,
}

impl BulkDeleteOutcome {
    pub fn deleted(deleted_count: u64) -> Self {
        Self {
            deleted_count,
            ..Default::default()
        }
    }
}
