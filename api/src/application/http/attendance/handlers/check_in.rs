use axum::extract::State;
use fieldforce_core::{
    domain::attendance::{ports::AttendanceService, value_objects::CheckInInput},
    entity::salesman_attendance,
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
    path = "/check-in",
    tag = "attendance",
    summary = "Check in",
    description = "Opens the attendance record of a user for one day. A second check-in for the same user and date is rejected.",
    request_body = CheckInInput,
    responses(
        (status = 201, description = "Check-in recorded"),
        (status = 400, description = "Validation failed or user has already checked in today"),
    ),
)]
pub async fn check_in(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CheckInInput>,
) -> Result<Response<MessageResponse<salesman_attendance::Model>>, ApiError> {
    let record = state
        .service
        .check_in(payload)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(MessageResponse::new(
        "Check-in recorded successfully",
        record,
    )))
}
