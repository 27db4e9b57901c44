use std::{any::Any, sync::Arc};

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{
        HeaderValue, Method, StatusCode,
        header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE},
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use fieldforce_core::{application::create_service, domain::common::FieldForceConfig};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, error, info_span, warn};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::{
    api_entities::api_error::{
        ApiError, ApiErrorResponse, INTERNAL_ERROR_MESSAGE, NOT_FOUND_MESSAGE,
    },
    app_state::AppState,
    openapi::ApiDoc,
};
use crate::{
    application::http::{
        attendance::router::{attendance_doc, attendance_routes},
        dealer::router::{dealer_read_doc, dealer_routes},
        health::health_routes,
        resource::router::{generic_resource_doc, generic_resource_routes},
    },
    args::Args,
};

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = FieldForceConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

/// Strips `details` from 500 responses unless the deployment opted in.
async fn redact_error_details(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if state.args.server.expose_error_details
        || response.status() != StatusCode::INTERNAL_SERVER_ERROR
    {
        return response;
    }

    internal_error_response()
}

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiErrorResponse {
            success: false,
            error: INTERNAL_ERROR_MESSAGE.to_string(),
            details: None,
        }),
    )
        .into_response()
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("handler panicked: {}", message);

    internal_error_response()
}

async fn not_found() -> ApiError {
    ApiError::NotFound(NOT_FOUND_MESSAGE.to_string())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn openapi(root_path: &str) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(generic_resource_doc().build());
    openapi.merge(dealer_read_doc().build());
    openapi.merge(attendance_doc().build());

    openapi.paths.paths = std::mem::take(&mut openapi.paths.paths)
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        });

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("ignoring allowed origin {:?}: {}", origin, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
        .allow_credentials(true);

    let root_path = state.args.server.root_path.clone();

    let router = Router::new()
        .merge(Scalar::with_url(
            format!("{root_path}/scalar"),
            openapi(&root_path),
        ))
        .merge(generic_resource_routes(&state))
        .merge(dealer_routes(&state))
        .merge(attendance_routes(&state))
        .merge(health_routes(&root_path))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            redact_error_details,
        ))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_paths_carry_root_path() {
        let doc = openapi("/api");
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().all(|path| path.starts_with("/api/")));
        for expected in [
            "/api/ratings",
            "/api/ratings/{id}",
            "/api/ratings/bulk/date-range",
            "/api/ratings/bulk/all",
            "/api/dealers",
            "/api/dealers/{id}",
            "/api/dealers/bulk/all",
            "/api/attendance/check-in",
            "/api/attendance/check-out",
            "/api/health/ready",
        ] {
            assert!(
                doc.paths.paths.contains_key(expected),
                "missing {expected}"
            );
        }
    }

    #[test]
    fn test_dealer_writes_keep_their_handler_docs() {
        let doc = openapi("/api");
        let dealers = &doc.paths.paths["/api/dealers"];
        assert!(dealers.get.is_some());
        assert!(dealers.post.is_some());
    }
}
