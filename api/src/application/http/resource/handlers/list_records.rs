use axum::extract::State;
use fieldforce_core::domain::resource::{
    ports::{ModelOf, Resource, ResourceService},
    value_objects::RelationFilter,
};

use crate::application::http::{
    query_extractor::RawQueryExtractor,
    server::{
        api_entities::{
            api_error::{ApiError, JsonPath},
            envelopes::ListResponse,
            response::Response,
        },
        app_state::AppState,
    },
};

/// `GET /{resource}` with filters, sort and pagination from the query string.
pub async fn list_records<R: Resource>(
    State(state): State<AppState>,
    RawQueryExtractor(raw): RawQueryExtractor,
) -> Result<Response<ListResponse<ModelOf<R>>>, ApiError> {
    let page = state
        .service
        .list::<R>(None, raw)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListResponse::from(page)))
}

/// `GET /{resource}/{relation}/{relationId}`: the list scoped to one parent row.
pub async fn list_related<R: Resource>(
    JsonPath((relation, relation_id)): JsonPath<(String, i32)>,
    State(state): State<AppState>,
    RawQueryExtractor(raw): RawQueryExtractor,
) -> Result<Response<ListResponse<ModelOf<R>>>, ApiError> {
    let page = state
        .service
        .list::<R>(Some(RelationFilter::new(relation, relation_id)), raw)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListResponse::from(page)))
}
