pub mod attendance;
pub mod dealer;
pub mod health;
pub mod query_extractor;
pub mod resource;
pub mod server;
