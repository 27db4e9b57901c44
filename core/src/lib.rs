pub mod application;
pub mod domain;
pub mod entity;
pub mod infrastructure;
pub mod resources;
