use axum::extract::State;
use fieldforce_core::{
    domain::{dealer::ports::DealerService, resource::ports::Resource},
    entity::dealers,
    resources::dealers::{Dealers, NewDealer},
};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        envelopes::MessageResponse,
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "",
    tag = "dealers",
    summary = "Create dealer",
    description = "Stores a dealer and, when it has coordinates and the geofence provider is configured, registers a circular geofence keyed by the dealer id. A provider failure removes the row again.",
    request_body = NewDealer,
    responses(
        (status = 201, description = "Dealer created"),
        (status = 400, description = "Validation failed"),
        (status = 502, description = "Geofence provider request failed"),
    ),
)]
pub async fn create_dealer(
    State(state): State<AppState>,
    payload: Result<ValidateJson<NewDealer>, ApiError>,
) -> Result<Response<MessageResponse<dealers::Model>>, ApiError> {
    let ValidateJson(payload) = payload.map_err(|e| e.renamed(Dealers::RENAMED_FIELDS))?;
    let dealer = state
        .service
        .create_dealer(payload)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(MessageResponse::new(
        "Dealer created successfully",
        dealer,
    )))
}
