use crate::domain::common::SchemaCapabilities;

/// Entry point of every domain service.
///
/// Each service trait (`ResourceService`, `DealerService`, `AttendanceService`,
/// `HealthCheckService`) is implemented on this struct, so the HTTP layer holds
/// a single value and picks the operations it needs.
#[derive(Clone, Debug)]
pub struct Service<RR, DR, AR, HC, G> {
    pub resource_repository: RR,
    pub dealer_repository: DR,
    pub attendance_repository: AR,
    pub health_check_repository: HC,
    pub geofence_client: G,
    pub capabilities: SchemaCapabilities,
    pub geofence_radius_meters: u32,
}

impl<RR, DR, AR, HC, G> Service<RR, DR, AR, HC, G> {
    pub fn new(
        resource_repository: RR,
        dealer_repository: DR,
        attendance_repository: AR,
        health_check_repository: HC,
        geofence_client: G,
        capabilities: SchemaCapabilities,
        geofence_radius_meters: u32,
    ) -> Self {
        Self {
            resource_repository,
            dealer_repository,
            attendance_repository,
            health_check_repository,
            geofence_client,
            capabilities,
            geofence_radius_meters,
        }
    }
}
