use crate::domain::{
    common::entities::app_errors::CoreError, health::entities::DatabaseHealthStatus,
};

pub trait HealthCheckService: Send + Sync {
    fn readiness(&self) -> impl Future<Output = Result<DatabaseHealthStatus, CoreError>> + Send;
}

pub trait HealthCheckRepository: Send + Sync {
    /// Round-trip time of a trivial query, in milliseconds.
    fn ping(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
