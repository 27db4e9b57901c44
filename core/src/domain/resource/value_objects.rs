use serde::Serialize;

use crate::domain::query::pagination::Pagination;

/// Relation scope of a `/{resource}/{relation}/{id}` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationFilter {
    pub segment: String,
    pub id: i32,
}

impl RelationFilter {
    pub fn new(segment: impl Into<String>, id: i32) -> Self {
        Self {
            segment: segment.into(),
            id,
        }
    }
}

/// One page of a list query.
#[derive(Debug, Clone, Serialize)]
pub struct ListPage<T> {
    pub pagination: Pagination,
    pub items: Vec<T>,
}

impl<T> ListPage<T> {
    pub fn count(&self) -> usize {
        self.items.len()
    }
}
