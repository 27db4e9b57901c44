use crate::domain::{
    common::entities::app_errors::CoreError, geofence::value_objects::CircularGeofence,
};

/// Third-party geofence provider.
pub trait GeofenceClient: Send + Sync {
    /// Whether remote calls are made at all; a disabled provider accepts every
    /// call as a no-op.
    fn is_enabled(&self) -> bool;

    fn upsert_geofence(
        &self,
        geofence: CircularGeofence,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Deleting a geofence the provider does not know succeeds.
    fn delete_geofence(
        &self,
        external_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
