use axum::extract::State;
use fieldforce_core::domain::resource::ports::{ModelOf, Resource, ResourceService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        envelopes::MessageResponse,
        response::Response,
    },
    app_state::AppState,
};

pub async fn create_record<R: Resource>(
    State(state): State<AppState>,
    payload: Result<ValidateJson<R::Create>, ApiError>,
) -> Result<Response<MessageResponse<ModelOf<R>>>, ApiError> {
    let ValidateJson(payload) = payload.map_err(|e| e.renamed(R::RENAMED_FIELDS))?;
    let record = state
        .service
        .create::<R>(payload)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(MessageResponse::new(
        format!("{} created successfully", R::descriptor().label),
        record,
    )))
}
