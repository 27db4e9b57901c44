use std::marker::PhantomData;

use axum::{
    Router,
    handler::Handler,
    routing::{MethodRouter, delete, get, post},
};
use fieldforce_core::{
    domain::resource::ports::Resource,
    resources::{
        brands::Brands, companies::Companies, daily_tasks::DailyTasks,
        daily_visit_reports::DailyVisitReports, dealer_brand_mapping::DealerBrandMappings,
        leave_applications::LeaveApplications, permanent_journey_plans::PermanentJourneyPlans,
        ratings::Ratings, sales_orders::SalesOrders,
        technical_visit_reports::TechnicalVisitReports, users::Users,
    },
};

use super::{
    handlers::{
        bulk_delete::{delete_all, delete_by_date_range, delete_related},
        create_record::create_record,
        delete_record::delete_record,
        get_record::get_record,
        list_records::{list_records, list_related},
        update_record::update_record,
    },
    openapi::ResourceDoc,
};
use crate::application::http::server::app_state::AppState;

/// Applies `$apply::<R>(segment)` for every resource served only by the
/// generic handlers.
macro_rules! generic_resources {
    ($apply:ident, $acc:expr) => {
        $acc.$apply::<Companies>("companies")
            .$apply::<Users>("users")
            .$apply::<Brands>("brands")
            .$apply::<DealerBrandMappings>("dealer-brand-mapping")
            .$apply::<DailyVisitReports>("daily-visit-reports")
            .$apply::<TechnicalVisitReports>("technical-visit-reports")
            .$apply::<PermanentJourneyPlans>("pjp")
            .$apply::<DailyTasks>("daily-tasks")
            .$apply::<LeaveApplications>("leave-applications")
            .$apply::<SalesOrders>("sales-orders")
            .$apply::<Ratings>("ratings")
    };
}

/// `{root}/{segment}`, the base path of a resource's endpoints.
pub fn base_path(state: &AppState, segment: &str) -> String {
    format!("{}/{}", state.args.server.root_path, segment)
}

/// Route table of one resource. Starts out with the generic handlers; a
/// resource with its own create or delete semantics swaps those in before
/// mounting.
pub struct ResourceRoutes<R> {
    create: MethodRouter<AppState>,
    delete: MethodRouter<AppState>,
    delete_by_date_range: MethodRouter<AppState>,
    delete_all: MethodRouter<AppState>,
    delete_related: MethodRouter<AppState>,
    resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceRoutes<R> {
    pub fn generic() -> Self {
        Self {
            create: post(create_record::<R>),
            delete: delete(delete_record::<R>),
            delete_by_date_range: delete(delete_by_date_range::<R>),
            delete_all: delete(delete_all::<R>),
            delete_related: delete(delete_related::<R>),
            resource: PhantomData,
        }
    }

    pub fn create<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.create = post(handler);
        self
    }

    pub fn delete<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.delete = delete(handler);
        self
    }

    pub fn delete_by_date_range<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.delete_by_date_range = delete(handler);
        self
    }

    pub fn delete_all<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.delete_all = delete(handler);
        self
    }

    pub fn delete_related<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.delete_related = delete(handler);
        self
    }

    /// Mounts every endpoint under `{root}/{segment}`.
    ///
    /// `bulk/...` paths are static and take precedence over the
    /// `{relation}/{relation_id}` pattern.
    pub fn into_router(self, state: &AppState, segment: &str) -> Router<AppState> {
        let base = base_path(state, segment);

        Router::new()
            .route(&base, get(list_records::<R>).merge(self.create))
            .route(
                &format!("{base}/{{id}}"),
                get(get_record::<R>)
                    .patch(update_record::<R>)
                    .merge(self.delete),
            )
            .route(&format!("{base}/bulk/date-range"), self.delete_by_date_range)
            .route(&format!("{base}/bulk/all"), self.delete_all)
            .route(
                &format!("{base}/{{relation}}/{{relation_id}}"),
                get(list_related::<R>).merge(self.delete_related),
            )
    }
}

struct Mounter<'a> {
    state: &'a AppState,
    router: Router<AppState>,
}

impl Mounter<'_> {
    fn mount<R: Resource>(mut self, segment: &str) -> Self {
        self.router = self
            .router
            .merge(ResourceRoutes::<R>::generic().into_router(self.state, segment));
        self
    }
}

pub fn generic_resource_routes(state: &AppState) -> Router<AppState> {
    let mounter = Mounter {
        state,
        router: Router::new(),
    };
    generic_resources!(mount, mounter).router
}

pub fn generic_resource_doc() -> ResourceDoc {
    generic_resources!(resource, ResourceDoc::new())
}
