use axum::Router;
use fieldforce_core::resources::dealers::Dealers;
use utoipa::OpenApi;

use super::handlers::{
    create_dealer::{__path_create_dealer, create_dealer},
    delete_dealer::{__path_delete_dealer, delete_dealer},
    delete_dealers::{
        __path_delete_all_dealers, __path_delete_dealers_by_date_range,
        __path_delete_related_dealers, delete_all_dealers, delete_dealers_by_date_range,
        delete_related_dealers,
    },
};
use crate::application::http::{
    resource::{openapi::ResourceDoc, router::ResourceRoutes},
    server::app_state::AppState,
};

pub const DEALERS_SEGMENT: &str = "dealers";

#[derive(OpenApi)]
#[openapi(paths(
    create_dealer,
    delete_dealer,
    delete_related_dealers,
    delete_dealers_by_date_range,
    delete_all_dealers
))]
pub struct DealerApiDoc;

/// Generic read endpoints of dealers, merged with [`DealerApiDoc`].
pub fn dealer_read_doc() -> ResourceDoc {
    ResourceDoc::new().reads::<Dealers>(DEALERS_SEGMENT)
}

pub fn dealer_routes(state: &AppState) -> Router<AppState> {
    ResourceRoutes::<Dealers>::generic()
        .create(create_dealer)
        .delete(delete_dealer)
        .delete_by_date_range(delete_dealers_by_date_range)
        .delete_all(delete_all_dealers)
        .delete_related(delete_related_dealers)
        .into_router(state, DEALERS_SEGMENT)
}
