use axum::{Router, routing::post};
use fieldforce_core::resources::attendance::Attendance;
use utoipa::OpenApi;

use super::handlers::{
    check_in::{__path_check_in, check_in},
    check_out::{__path_check_out, check_out},
};
use crate::application::http::{
    resource::{
        openapi::ResourceDoc,
        router::{ResourceRoutes, base_path},
    },
    server::app_state::AppState,
};

pub const ATTENDANCE_SEGMENT: &str = "attendance";

#[derive(OpenApi)]
#[openapi(paths(check_in, check_out))]
pub struct AttendanceApiDoc;

/// Generic endpoints of attendance records, merged with [`AttendanceApiDoc`].
/// `POST /attendance` takes the check-in payload.
pub fn attendance_doc() -> ResourceDoc {
    ResourceDoc::new().resource::<Attendance>(ATTENDANCE_SEGMENT)
}

/// Creating a record goes through check-in, so a user never gets two
/// records for one day through this API.
pub fn attendance_routes(state: &AppState) -> Router<AppState> {
    let base = base_path(state, ATTENDANCE_SEGMENT);

    ResourceRoutes::<Attendance>::generic()
        .create(check_in)
        .into_router(state, ATTENDANCE_SEGMENT)
        .route(&format!("{base}/check-in"), post(check_in))
        .route(&format!("{base}/check-out"), post(check_out))
}
