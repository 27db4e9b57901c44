use axum::extract::State;
use fieldforce_core::domain::{
    bulk::value_objects::BulkScope,
    resource::ports::{Resource, ResourceService},
};

use crate::application::http::{
    query_extractor::RawQueryExtractor,
    server::{
        api_entities::{
            api_error::{ApiError, JsonPath},
            envelopes::BulkDeleteResponse,
            response::Response,
        },
        app_state::AppState,
    },
};

async fn run<R: Resource>(
    state: &AppState,
    scope: BulkScope,
    confirm: Option<String>,
) -> Result<Response<BulkDeleteResponse>, ApiError> {
    let deleted = state
        .service
        .bulk_delete::<R>(scope, confirm)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(BulkDeleteResponse::new(
        format!("{deleted} {} records deleted", R::descriptor().name),
        deleted,
    )))
}

/// `DELETE /{resource}/{relation}/{relationId}?confirm=true`
pub async fn delete_related<R: Resource>(
    JsonPath((segment, id)): JsonPath<(String, i32)>,
    State(state): State<AppState>,
    query: RawQueryExtractor,
) -> Result<Response<BulkDeleteResponse>, ApiError> {
    run::<R>(&state, BulkScope::Relation { segment, id }, query.confirm()).await
}

/// `DELETE /{resource}/bulk/date-range?startDate&endDate&confirm=true`
pub async fn delete_by_date_range<R: Resource>(
    State(state): State<AppState>,
    query: RawQueryExtractor,
) -> Result<Response<BulkDeleteResponse>, ApiError> {
    let (start, end) = query.date_range();
    run::<R>(&state, BulkScope::DateRange { start, end }, query.confirm()).await
}

/// `DELETE /{resource}/bulk/all?confirm=DELETE_ALL_<RESOURCE>`
pub async fn delete_all<R: Resource>(
    State(state): State<AppState>,
    query: RawQueryExtractor,
) -> Result<Response<BulkDeleteResponse>, ApiError> {
    run::<R>(&state, BulkScope::All, query.confirm()).await
}
