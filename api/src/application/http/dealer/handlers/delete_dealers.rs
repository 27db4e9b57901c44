use axum::extract::State;
use fieldforce_core::domain::{
    bulk::value_objects::{BulkDeleteOutcome, BulkScope},
    dealer::ports::DealerService,
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

async fn run(
    state: &AppState,
    scope: BulkScope,
    confirm: Option<String>,
) -> Result<Response<BulkDeleteResponse>, ApiError> {
    let outcome = state
        .service
        .delete_dealers(scope, confirm)
        .await
        .map_err(ApiError::from)?;

    respond(outcome)
}

/// Partial success is still a success; only a run where every dealer was
/// kept is reported as a provider failure.
fn respond(outcome: BulkDeleteOutcome) -> Result<Response<BulkDeleteResponse>, ApiError> {
    if outcome.deleted_count == 0 && !outcome.failures.is_empty() {
        return Err(ApiError::BadGateway {
            message: "No dealers could be deleted".to_string(),
            details: serde_json::to_value(&outcome.failures).ok(),
        });
    }

    let message = format!("{} dealers deleted", outcome.deleted_count);
    Ok(Response::OK(BulkDeleteResponse::from_outcome(
        message, outcome,
    )))
}

#[utoipa::path(
    delete,
    path = "/{relation}/{relation_id}",
    tag = "dealers",
    summary = "Delete dealers of one related row",
    params(
        ("relation" = String, Path, description = "`user` or `parent`"),
        ("relation_id" = i32, Path, description = "Id of the related row"),
        ("confirm" = String, Query, description = "Must be `true`"),
    ),
    responses(
        (status = 200, body = BulkDeleteResponse),
        (status = 400, description = "Unknown relation or confirmation missing"),
        (status = 404, description = "No dealers found to delete"),
        (status = 502, description = "No dealer could be deleted"),
    ),
)]
pub async fn delete_related_dealers(
    JsonPath((segment, id)): JsonPath<(String, i32)>,
    State(state): State<AppState>,
    query: RawQueryExtractor,
) -> Result<Response<BulkDeleteResponse>, ApiError> {
    run(&state, BulkScope::Relation { segment, id }, query.confirm()).await
}

#[utoipa::path(
    delete,
    path = "/bulk/date-range",
    tag = "dealers",
    summary = "Delete dealers created in a date range",
    params(
        ("startDate" = String, Query, description = "Inclusive, YYYY-MM-DD"),
        ("endDate" = String, Query, description = "Inclusive, YYYY-MM-DD"),
        ("confirm" = String, Query, description = "Must be `true`"),
    ),
    responses(
        (status = 200, body = BulkDeleteResponse),
        (status = 400, description = "Invalid range or confirmation missing"),
        (status = 404, description = "No dealers found to delete"),
        (status = 502, description = "No dealer could be deleted"),
    ),
)]
pub async fn delete_dealers_by_date_range(
    State(state): State<AppState>,
    query: RawQueryExtractor,
) -> Result<Response<BulkDeleteResponse>, ApiError> {
    let (start, end) = query.date_range();
    run(&state, BulkScope::DateRange { start, end }, query.confirm()).await
}

#[utoipa::path(
    delete,
    path = "/bulk/all",
    tag = "dealers",
    summary = "Delete every dealer",
    params(
        ("confirm" = String, Query, description = "Must be `DELETE_ALL_DEALERS`"),
    ),
    responses(
        (status = 200, body = BulkDeleteResponse),
        (status = 400, description = "Confirmation missing"),
        (status = 404, description = "No dealers found to delete"),
        (status = 502, description = "No dealer could be deleted"),
    ),
)]
pub async fn delete_all_dealers(
    State(state): State<AppState>,
    query: RawQueryExtractor,
) -> Result<Response<BulkDeleteResponse>, ApiError> {
    run(&state, BulkScope::All, query.confirm()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldforce_core::domain::bulk::value_objects::DeleteFailure;
    use serde_json::Value;

    fn failure(id: i32) -> DeleteFailure {
        DeleteFailure {
            id,
            error: "provider unavailable".into(),
        }
    }

    #[test]
    fn test_every_dealer_kept_is_bad_gateway() {
        let outcome = BulkDeleteOutcome {
            deleted_count: 0,
            failures: vec![failure(1), failure(2)],
            dependent_cleanup_skipped: false,
        };

        match respond(outcome) {
            Err(ApiError::BadGateway { details, .. }) => {
                assert_eq!(details.as_ref().and_then(Value::as_array).map(Vec::len), Some(2));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_partial_failure_is_ok() {
        let outcome = BulkDeleteOutcome {
            deleted_count: 3,
            failures: vec![failure(2)],
            dependent_cleanup_skipped: true,
        };

        assert!(respond(outcome).is_ok());
    }
}
