use crate::application::http::{
    attendance::router::AttendanceApiDoc, dealer::router::DealerApiDoc, health::HealthApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Field-force operations API"
    ),
    nest(
        (path = "/dealers", api = DealerApiDoc),
        (path = "/attendance", api = AttendanceApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
