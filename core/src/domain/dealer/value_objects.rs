/// What the cleanup flow needs to know about a dealer before deleting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerDeletionTarget {
    pub id: i32,
    /// External id of the dealer's remote geofence, if one was registered.
    pub geofence_external_id: Option<String>,
}
