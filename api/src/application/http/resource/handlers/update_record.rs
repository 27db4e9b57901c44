use axum::extract::State;
use fieldforce_core::domain::resource::ports::{ModelOf, Resource, ResourceService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, JsonPath, ValidateJson},
        envelopes::MessageResponse,
        response::Response,
    },
    app_state::AppState,
};

/// Partial update: only the supplied fields change.
pub async fn update_record<R: Resource>(
    JsonPath(id): JsonPath<i32>,
    State(state): State<AppState>,
    payload: Result<ValidateJson<R::Update>, ApiError>,
) -> Result<Response<MessageResponse<ModelOf<R>>>, ApiError> {
    let ValidateJson(payload) = payload.map_err(|e| e.renamed(R::RENAMED_FIELDS))?;
    let record = state
        .service
        .update::<R>(id, payload)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageResponse::new(
        format!("{} updated successfully", R::descriptor().label),
        record,
    )))
}
