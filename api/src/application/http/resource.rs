//! Endpoints shared by every resource, generic over [`Resource`].
//!
//! [`Resource`]: fieldforce_core::domain::resource::ports::Resource

pub mod handlers;
pub mod openapi;
pub mod router;
