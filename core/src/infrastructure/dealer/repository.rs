use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use tracing::{debug, error};

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        dealer::{ports::DealerRepository, value_objects::DealerDeletionTarget},
        query::value_objects::Predicate,
    },
    entity::{dealer_brand_mapping, dealers, master_connected_table},
    infrastructure::query::condition::to_condition,
};

#[derive(Debug, Clone)]
pub struct PostgresDealerRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresDealerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl DealerRepository for PostgresDealerRepository {
    async fn find_deletion_targets(
        &self,
        predicate: Option<Predicate<dealers::Column>>,
    ) -> Result<Vec<DealerDeletionTarget>, CoreError> {
        let mut query = dealers::Entity::find()
            .select_only()
            .column(dealers::Column::Id)
            .column(dealers::Column::GeofenceExternalId)
            .order_by_asc(dealers::Column::Id);
        if let Some(predicate) = &predicate {
            query = query.filter(to_condition(predicate));
        }

        let rows = query
            .into_tuple::<(i32, Option<String>)>()
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to read dealers to delete: {}", e);
                CoreError::from(e)
            })?;

        Ok(rows
            .into_iter()
            .map(|(id, geofence_external_id)| DealerDeletionTarget {
                id,
                geofence_external_id,
            })
            .collect())
    }

    async fn set_geofence_external_id(
        &self,
        id: i32,
        external_id: String,
    ) -> Result<dealers::Model, CoreError> {
        dealers::ActiveModel {
            id: Set(id),
            geofence_external_id: Set(Some(external_id)),
            updated_at: Set(generate_timestamp()),
            ..Default::default()
        }
        .update(self.db.as_ref())
        .await
        .map_err(|e| {
            error!(dealer_id = id, "Failed to store geofence id: {}", e);
            CoreError::from(e)
        })
    }

    async fn delete_with_dependents(
        &self,
        id: i32,
        include_master_connected: bool,
    ) -> Result<u64, CoreError> {
        let log_failure = |e: sea_orm::DbErr| {
            error!(dealer_id = id, "Failed to delete dealer: {}", e);
            CoreError::from(e)
        };

        let txn = self.db.begin().await.map_err(log_failure)?;

        let mappings = dealer_brand_mapping::Entity::delete_many()
            .filter(dealer_brand_mapping::Column::DealerId.eq(id))
            .exec(&txn)
            .await
            .map_err(log_failure)?;

        if include_master_connected {
            master_connected_table::Entity::delete_many()
                .filter(master_connected_table::Column::DealerId.eq(id))
                .exec(&txn)
                .await
                .map_err(log_failure)?;
        }

        let dealer = dealers::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(log_failure)?;

        txn.commit().await.map_err(log_failure)?;

        debug!(
            dealer_id = id,
            brand_mappings = mappings.rows_affected,
            include_master_connected,
            "dealer rows deleted"
        );
        Ok(dealer.rows_affected)
    }
}
