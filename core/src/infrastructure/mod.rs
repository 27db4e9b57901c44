pub mod attendance;
pub mod db;
pub mod dealer;
pub mod geofence;
pub mod health;
pub mod query;
pub mod resource;
pub mod schema;
