use axum::extract::State;
use fieldforce_core::domain::resource::ports::{Resource, ResourceService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, JsonPath},
        envelopes::DeletedResponse,
        response::Response,
    },
    app_state::AppState,
};

pub async fn delete_record<R: Resource>(
    JsonPath(id): JsonPath<i32>,
    State(state): State<AppState>,
) -> Result<Response<DeletedResponse>, ApiError> {
    let deleted_id = state.service.delete::<R>(id).await.map_err(ApiError::from)?;

    Ok(Response::OK(DeletedResponse::new(
        format!("{} deleted successfully", R::descriptor().label),
        deleted_id,
    )))
}
