use tracing::{error, info, warn};

use crate::{
    domain::{
        attendance::ports::AttendanceRepository,
        bulk::{
            policies::guard_bulk_delete,
            value_objects::{BulkDeleteOutcome, BulkScope, DeleteFailure},
        },
        common::{entities::app_errors::CoreError, services::Service},
        dealer::{
            ports::{DealerRepository, DealerService},
            value_objects::DealerDeletionTarget,
        },
        geofence::{ports::GeofenceClient, value_objects::CircularGeofence},
        health::ports::HealthCheckRepository,
        query::value_objects::{FilterValue, Predicate},
        resource::ports::{Resource, ResourceRepository},
    },
    entity::dealers,
    resources::dealers::{Dealers, NewDealer},
};

impl<RR, DR, AR, HC, G> Service<RR, DR, AR, HC, G>
where
    DR: DealerRepository,
    G: GeofenceClient,
{
    /// Remote geofence first, local rows only once the provider agreed.
    async fn remove_dealer(&self, target: &DealerDeletionTarget) -> Result<u64, CoreError> {
        if let Some(external_id) = target.geofence_external_id.clone()
            && self.geofence_client.is_enabled()
        {
            self.geofence_client.delete_geofence(external_id).await?;
        }

        self.dealer_repository
            .delete_with_dependents(target.id, self.capabilities.master_connected_table)
            .await
    }
}

impl<RR, DR, AR, HC, G> DealerService for Service<RR, DR, AR, HC, G>
where
    RR: ResourceRepository,
    DR: DealerRepository,
    AR: AttendanceRepository,
    HC: HealthCheckRepository,
    G: GeofenceClient,
{
    async fn create_dealer(&self, input: NewDealer) -> Result<dealers::Model, CoreError> {
        let dealer = self.resource_repository.insert::<Dealers>(input).await?;

        let (Some(latitude), Some(longitude)) = (dealer.latitude, dealer.longitude) else {
            info!(dealer_id = dealer.id, "dealer created without coordinates");
            return Ok(dealer);
        };
        if !self.geofence_client.is_enabled() {
            info!(dealer_id = dealer.id, "dealer created, geofence provider disabled");
            return Ok(dealer);
        }

        let external_id = dealer.id.to_string();
        let geofence = CircularGeofence {
            external_id: external_id.clone(),
            description: dealer.name.clone(),
            latitude,
            longitude,
            radius_meters: self.geofence_radius_meters,
        };

        if let Err(e) = self.geofence_client.upsert_geofence(geofence).await {
            warn!(dealer_id = dealer.id, "geofence registration failed, removing dealer: {}", e);
            if let Err(rollback) = self.resource_repository.delete_by_id::<Dealers>(dealer.id).await {
                error!(dealer_id = dealer.id, "failed to remove dealer after geofence failure: {}", rollback);
            }
            return Err(e);
        }

        let dealer = self
            .dealer_repository
            .set_geofence_external_id(dealer.id, external_id)
            .await?;
        info!(dealer_id = dealer.id, "dealer created with geofence");

        Ok(dealer)
    }

    async fn delete_dealer(&self, id: i32) -> Result<i32, CoreError> {
        let predicate = Predicate::Eq(dealers::Column::Id, FilterValue::Integer(i64::from(id)));
        let target = self
            .dealer_repository
            .find_deletion_targets(Some(predicate))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::not_found(Dealers::descriptor().label))?;

        let deleted = self.remove_dealer(&target).await?;
        if deleted == 0 {
            return Err(CoreError::not_found(Dealers::descriptor().label));
        }

        info!(dealer_id = id, "dealer deleted");
        Ok(id)
    }

    async fn delete_dealers(
        &self,
        scope: BulkScope,
        confirm: Option<String>,
    ) -> Result<BulkDeleteOutcome, CoreError> {
        let predicate = guard_bulk_delete(Dealers::descriptor(), &scope, confirm.as_deref())?;

        let targets = self.dealer_repository.find_deletion_targets(predicate).await?;
        if targets.is_empty() {
            return Err(CoreError::NotFound("No dealers found to delete".to_string()));
        }

        let mut outcome = BulkDeleteOutcome {
            dependent_cleanup_skipped: !self.capabilities.master_connected_table,
            ..Default::default()
        };

        for target in &targets {
            match self.remove_dealer(target).await {
                Ok(deleted) => outcome.deleted_count += deleted,
                Err(e) => {
                    warn!(dealer_id = target.id, "dealer kept, cleanup failed: {}", e);
                    outcome.failures.push(DeleteFailure {
                        id: target.id,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            deleted = outcome.deleted_count,
            failed = outcome.failures.len(),
            ?scope,
            "dealer bulk delete completed"
        );
        Ok(outcome)
    }
}
