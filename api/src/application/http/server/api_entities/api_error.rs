use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use fieldforce_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

pub const NOT_FOUND_MESSAGE: &str = "Resource not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Body of every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// One rejected field of a request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
    pub code: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    BadRequest {
        message: String,
        details: Option<Value>,
    },

    #[error("Validation failed")]
    Validation(Vec<FieldIssue>),

    #[error("{0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{message}")]
    BadGateway {
        message: String,
        details: Option<Value>,
    },

    #[error("Internal server error")]
    InternalServerError(Option<String>),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            details: None,
        }
    }

    /// Rewrites validation paths for fields serde exposes under another key.
    pub fn renamed(self, fields: &[(&str, &str)]) -> Self {
        match self {
            ApiError::Validation(mut issues) => {
                for issue in issues.iter_mut() {
                    if let Some((_, wire)) = fields
                        .iter()
                        .find(|(field, _)| camel_case(field) == issue.path)
                    {
                        issue.path = wire.to_string();
                    }
                }
                issues.sort_by(|a, b| a.path.cmp(&b.path));
                ApiError::Validation(issues)
            }
            other => other,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(self) -> ApiErrorResponse {
        let error = self.to_string();
        let details = match self {
            ApiError::BadRequest { details, .. } | ApiError::BadGateway { details, .. } => details,
            ApiError::Validation(issues) => serde_json::to_value(issues).ok(),
            ApiError::InternalServerError(details) => details.map(Value::String),
            ApiError::NotFound(_) | ApiError::MethodNotAllowed => None,
        };

        ApiErrorResponse {
            success: false,
            error,
            details,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound(message) => ApiError::NotFound(message),
            CoreError::Invalid(message) | CoreError::ConfirmationRequired(message) => {
                ApiError::bad_request(message)
            }
            CoreError::AlreadyCheckedIn | CoreError::AlreadyCheckedOut => {
                ApiError::bad_request(error.to_string())
            }
            CoreError::ExternalServiceError(message) => ApiError::BadGateway {
                message: "Geofence provider request failed".to_string(),
                details: Some(Value::String(message)),
            },
            CoreError::Database(message) => ApiError::InternalServerError(Some(message)),
            CoreError::InternalServerError => ApiError::InternalServerError(None),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), "request failed: {:?}", self);
        }

        (status, Json(self.body())).into_response()
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

pub fn field_issues(errors: &ValidationErrors) -> Vec<FieldIssue> {
    let mut issues: Vec<FieldIssue> = errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| {
            let path = camel_case(field);
            match kind {
                ValidationErrorsKind::Field(errors) => errors
                    .iter()
                    .map(|error| FieldIssue {
                        path: path.clone(),
                        message: error
                            .message
                            .as_ref()
                            .map(|message| message.to_string())
                            .unwrap_or_else(|| format!("{path} is invalid")),
                        code: error.code.to_string(),
                    })
                    .collect::<Vec<_>>(),
                ValidationErrorsKind::Struct(_) | ValidationErrorsKind::List(_) => {
                    vec![FieldIssue {
                        path: path.clone(),
                        message: format!("{path} is invalid"),
                        code: "invalid".to_string(),
                    }]
                }
            }
        })
        .collect();

    issues.sort_by(|a, b| a.path.cmp(&b.path));
    issues
}

/// JSON body extractor that also runs the payload's `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: "Invalid request body".to_string(),
                details: Some(Value::String(rejection.body_text())),
            })?;

        value
            .validate()
            .map_err(|errors| ApiError::Validation(field_issues(&errors)))?;

        Ok(ValidateJson(value))
    }
}

/// `Path` extractor answering malformed segments with the error envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPath<T>(pub T);

impl<T, S> FromRequestParts<S> for JsonPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: "Invalid path parameter".to_string(),
                details: Some(Value::String(rejection.body_text())),
            })?;

        Ok(JsonPath(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
        rating: i32,
        #[validate(length(min = 1))]
        location_name: String,
    }

    #[test]
    fn test_core_errors_map_to_status_codes() {
        let cases = [
            (CoreError::NotFound("Rating not found".into()), StatusCode::NOT_FOUND),
            (CoreError::Invalid("bad".into()), StatusCode::BAD_REQUEST),
            (
                CoreError::ConfirmationRequired("confirm".into()),
                StatusCode::BAD_REQUEST,
            ),
            (CoreError::AlreadyCheckedIn, StatusCode::BAD_REQUEST),
            (CoreError::AlreadyCheckedOut, StatusCode::BAD_REQUEST),
            (
                CoreError::ExternalServiceError("timeout".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::Database("connection reset".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CoreError::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (core, status) in cases {
            assert_eq!(ApiError::from(core.clone()).status(), status, "{core:?}");
        }
    }

    #[test]
    fn test_database_error_text_goes_to_details() {
        let body = ApiError::from(CoreError::Database("connection reset".into())).body();
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "success": false,
                "error": "Internal server error",
                "details": "connection reset"
            })
        );
    }

    #[test]
    fn test_not_found_has_no_details() {
        let body = ApiError::NotFound(NOT_FOUND_MESSAGE.into()).body();
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "success": false, "error": "Resource not found" })
        );
    }

    #[test]
    fn test_validation_issues_use_camel_case_paths() {
        let errors = Payload {
            rating: 9,
            location_name: String::new(),
        }
        .validate()
        .unwrap_err();

        let issues = field_issues(&errors);

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].path, "locationName");
        assert_eq!(issues[0].code, "length");
        assert_eq!(issues[1].path, "rating");
        assert_eq!(issues[1].message, "rating must be between 1 and 5");
        assert_eq!(issues[1].code, "range");
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Renamed {
        #[serde(rename = "type")]
        #[validate(length(min = 1, message = "type is required"))]
        dealer_type: String,
    }

    #[test]
    fn test_renamed_fields_report_their_wire_key() {
        let errors = Renamed {
            dealer_type: String::new(),
        }
        .validate()
        .unwrap_err();

        let ApiError::Validation(issues) =
            ApiError::Validation(field_issues(&errors)).renamed(&[("dealer_type", "type")])
        else {
            panic!("expected validation error");
        };

        assert_eq!(issues[0].path, "type");
        assert_eq!(issues[0].message, "type is required");
    }

    #[test]
    fn test_renaming_leaves_other_errors_alone() {
        let error =
            ApiError::bad_request("Invalid request body").renamed(&[("dealer_type", "type")]);
        assert_eq!(error.to_string(), "Invalid request body");
    }
}
