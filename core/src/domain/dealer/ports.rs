use crate::{
    domain::{
        bulk::value_objects::{BulkDeleteOutcome, BulkScope},
        common::entities::app_errors::CoreError,
        dealer::value_objects::DealerDeletionTarget,
        query::value_objects::Predicate,
    },
    entity::dealers,
    resources::dealers::NewDealer,
};

pub trait DealerService: Send + Sync {
    /// Inserts the dealer and registers its geofence. A provider failure
    /// removes the inserted row again.
    fn create_dealer(
        &self,
        input: NewDealer,
    ) -> impl Future<Output = Result<dealers::Model, CoreError>> + Send;

    /// Deletes the remote geofence, then the dealer and its dependent rows.
    fn delete_dealer(&self, id: i32) -> impl Future<Output = Result<i32, CoreError>> + Send;

    fn delete_dealers(
        &self,
        scope: BulkScope,
        confirm: Option<String>,
    ) -> impl Future<Output = Result<BulkDeleteOutcome, CoreError>> + Send;
}

pub trait DealerRepository: Send + Sync {
    fn find_deletion_targets(
        &self,
        predicate: Option<Predicate<dealers::Column>>,
    ) -> impl Future<Output = Result<Vec<DealerDeletionTarget>, CoreError>> + Send;

    fn set_geofence_external_id(
        &self,
        id: i32,
        external_id: String,
    ) -> impl Future<Output = Result<dealers::Model, CoreError>> + Send;

    /// Deletes the dealer with its brand mappings, and with its master
    /// connected rows when `include_master_connected` is set, in one
    /// transaction. Returns the number of dealer rows deleted.
    fn delete_with_dependents(
        &self,
        id: i32,
        include_master_connected: bool,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
