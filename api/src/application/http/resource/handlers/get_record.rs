use axum::extract::State;
use fieldforce_core::domain::resource::ports::{ModelOf, Resource, ResourceService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, JsonPath},
        envelopes::DataResponse,
        response::Response,
    },
    app_state::AppState,
};

pub async fn get_record<R: Resource>(
    JsonPath(id): JsonPath<i32>,
    State(state): State<AppState>,
) -> Result<Response<DataResponse<ModelOf<R>>>, ApiError> {
    let record = state.service.get::<R>(id).await.map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(record)))
}
