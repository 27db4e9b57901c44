//! Tables exposed through the generic resource endpoints.
//!
//! Each module pairs a sea-orm entity with its filter, search and sort
//! whitelist and its create/update payloads.

pub mod attendance;
pub mod brands;
pub mod companies;
pub mod daily_tasks;
pub mod daily_visit_reports;
pub mod dealer_brand_mapping;
pub mod dealers;
pub mod leave_applications;
pub mod permanent_journey_plans;
pub mod ratings;
pub mod sales_orders;
pub mod technical_visit_reports;
pub mod users;
