use serde::Serialize;

/// Circular geofence around a dealer, addressed remotely by its external id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircularGeofence {
    pub external_id: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: u32,
}
