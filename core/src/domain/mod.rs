pub mod attendance;
pub mod bulk;
pub mod common;
pub mod dealer;
pub mod geofence;
pub mod health;
pub mod query;
pub mod resource;
