pub mod api_error;
pub mod envelopes;
pub mod response;
