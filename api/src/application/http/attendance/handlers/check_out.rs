use axum::extract::State;
use fieldforce_core::{
    domain::attendance::{ports::AttendanceService, value_objects::CheckOutInput},
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
    path = "/check-out",
    tag = "attendance",
    summary = "Check out",
    description = "Closes the open attendance record of a user for one day.",
    request_body = CheckOutInput,
    responses(
        (status = 200, description = "Check-out recorded"),
        (status = 400, description = "Validation failed or user has already checked out today"),
        (status = 404, description = "No check-in record found for today"),
    ),
)]
pub async fn check_out(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CheckOutInput>,
) -> Result<Response<MessageResponse<salesman_attendance::Model>>, ApiError> {
    let record = state
        .service
        .check_out(payload)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageResponse::new(
        "Check-out recorded successfully",
        record,
    )))
}
