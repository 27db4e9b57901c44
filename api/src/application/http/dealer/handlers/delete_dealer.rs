use axum::extract::State;
use fieldforce_core::domain::dealer::ports::DealerService;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, JsonPath},
        envelopes::DeletedResponse,
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "dealers",
    summary = "Delete dealer",
    description = "Deletes the dealer's remote geofence, then the dealer with its brand mappings and, when present, its master connected rows. The row is kept when the provider call fails.",
    params(
        ("id" = i32, Path, description = "Dealer id"),
    ),
    responses(
        (status = 200, body = DeletedResponse),
        (status = 404, description = "Dealer not found"),
        (status = 502, description = "Geofence provider request failed"),
    ),
)]
pub async fn delete_dealer(
    JsonPath(id): JsonPath<i32>,
    State(state): State<AppState>,
) -> Result<Response<DeletedResponse>, ApiError> {
    let deleted_id = state
        .service
        .delete_dealer(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeletedResponse::new(
        "Dealer deleted successfully",
        deleted_id,
    )))
}
