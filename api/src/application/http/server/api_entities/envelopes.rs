//! Success bodies shared by every resource. Each carries `success: true`.

use fieldforce_core::domain::{
    bulk::value_objects::{BulkDeleteOutcome, DeleteFailure},
    resource::value_objects::ListPage,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub page: u64,
    pub limit: u64,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> From<ListPage<T>> for ListResponse<T> {
    fn from(page: ListPage<T>) -> Self {
        Self {
            success: true,
            page: page.pagination.page,
            limit: page.pagination.limit,
            count: page.count(),
            data: page.items,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> MessageResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub success: bool,
    pub message: String,
    pub deleted_id: i32,
}

impl DeletedResponse {
    pub fn new(message: impl Into<String>, deleted_id: i32) -> Self {
        Self {
            success: true,
            message: message.into(),
            deleted_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteResponse {
    pub success: bool,
    pub message: String,
    pub deleted_count: u64,
    /// Only reported by deletions with per-row external cleanup.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub failures: Vec<DeleteFailure>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dependent_cleanup_skipped: Option<bool>,
}

impl BulkDeleteResponse {
    pub fn new(message: impl Into<String>, deleted_count: u64) -> Self {
        Self {
            success: true,
            message: message.into(),
            deleted_count,
            failures: Vec::new(),
            dependent_cleanup_skipped: None,
        }
    }

    pub fn from_outcome(message: impl Into<String>, outcome: BulkDeleteOutcome) -> Self {
        Self {
            success: true,
            message: message.into(),
            deleted_count: outcome.deleted_count,
            failures: outcome.failures,
            dependent_cleanup_skipped: Some(outcome.dependent_cleanup_skipped),
        }
    }
}
