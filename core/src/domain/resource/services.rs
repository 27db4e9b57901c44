use tracing::info;

use crate::domain::{
    attendance::ports::AttendanceRepository,
    bulk::{policies::guard_bulk_delete, value_objects::BulkScope},
    common::{entities::app_errors::CoreError, services::Service},
    dealer::ports::DealerRepository,
    geofence::ports::GeofenceClient,
    health::ports::HealthCheckRepository,
    query::{ListQuery, value_objects::RawQuery},
    resource::{
        ports::{ModelOf, Resource, ResourceRepository, ResourceService},
        value_objects::{ListPage, RelationFilter},
    },
};

impl<RR, DR, AR, HC, G> ResourceService for Service<RR, DR, AR, HC, G>
where
    RR: ResourceRepository,
    DR: DealerRepository,
    AR: AttendanceRepository,
    HC: HealthCheckRepository,
    G: GeofenceClient,
{
    async fn list<R: Resource>(
        &self,
        relation: Option<RelationFilter>,
        raw: RawQuery,
    ) -> Result<ListPage<ModelOf<R>>, CoreError> {
        let descriptor = R::descriptor();

        let base = match relation {
            Some(relation) => Some(
                descriptor
                    .relation_predicate(&relation.segment, relation.id)
                    .ok_or_else(|| CoreError::not_found("Resource"))?,
            ),
            None => None,
        };

        let query = ListQuery::compose(descriptor, base, &raw);
        let pagination = query.pagination;
        let items = self.resource_repository.find_page::<R>(query).await?;

        Ok(ListPage { pagination, items })
    }

    async fn get<R: Resource>(&self, id: i32) -> Result<ModelOf<R>, CoreError> {
        self.resource_repository
            .find_by_id::<R>(id)
            .await?
            .ok_or_else(|| CoreError::not_found(R::descriptor().label))
    }

    async fn create<R: Resource>(&self, input: R::Create) -> Result<ModelOf<R>, CoreError> {
        let model = self.resource_repository.insert::<R>(input).await?;
        info!(resource = R::descriptor().name, "record created");
        Ok(model)
    }

    async fn update<R: Resource>(&self, id: i32, input: R::Update) -> Result<ModelOf<R>, CoreError> {
        let model = self
            .resource_repository
            .update::<R>(id, input)
            .await?
            .ok_or_else(|| CoreError::not_found(R::descriptor().label))?;
        info!(resource = R::descriptor().name, id, "record updated");
        Ok(model)
    }

    async fn delete<R: Resource>(&self, id: i32) -> Result<i32, CoreError> {
        let descriptor = R::descriptor();
        let deleted = self.resource_repository.delete_by_id::<R>(id).await?;
        if deleted == 0 {
            return Err(CoreError::not_found(descriptor.label));
        }

        info!(resource = descriptor.name, id, "record deleted");
        Ok(id)
    }

    async fn bulk_delete<R: Resource>(
        &self,
        scope: BulkScope,
        confirm: Option<String>,
    ) -> Result<u64, CoreError> {
        let descriptor = R::descriptor();
        let predicate = guard_bulk_delete(descriptor, &scope, confirm.as_deref())?;

        let deleted = self
            .resource_repository
            .delete_matching::<R>(predicate)
            .await?;
        if deleted == 0 {
            return Err(CoreError::NotFound(format!(
                "No {} records found to delete",
                descriptor.name
            )));
        }

        info!(resource = descriptor.name, deleted, ?scope, "bulk delete completed");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, sync::Arc};

    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, Value};

    use super::*;
    use crate::{
        application::{FieldForceService, build_service, test_config, transaction_log},
        domain::common::{SchemaCapabilities, generate_timestamp},
        entity::ratings,
        resources::ratings::{NewRating, RatingChanges, Ratings},
    };

    fn service(db: Arc<DatabaseConnection>) -> FieldForceService {
        build_service(db, SchemaCapabilities::default(), &test_config())
    }

    fn rating(id: i32, value: i32) -> ratings::Model {
        let now = generate_timestamp();
        ratings::Model {
            id,
            user_id: 3,
            area: "Guwahati".into(),
            region: "Kamrup".into(),
            rating: value,
            created_at: now,
            updated_at: now,
        }
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_list_reports_resolved_page() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![rating(1, 4), rating(2, 5)]])
                .into_connection(),
        );

        let raw = RawQuery::new().with("page", "2").with("limit", "2");
        let page = service(db).list::<Ratings>(None, raw).await.unwrap();

        assert_eq!(page.count(), 2);
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.limit, 2);
    }

    #[tokio::test]
    async fn test_list_unknown_relation_is_not_found_without_query() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let result = service(db.clone())
            .list::<Ratings>(Some(RelationFilter::new("dealer", 1)), RawQuery::new())
            .await;

        assert_eq!(
            result.map(|page| page.count()),
            Err(CoreError::NotFound("Resource not found".into()))
        );
        assert!(transaction_log(&db).is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_uses_resource_label() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<ratings::Model>::new()])
                .into_connection(),
        );

        let result = service(db).get::<Ratings>(42).await;

        assert_eq!(result, Err(CoreError::NotFound("Rating not found".into())));
    }

    #[tokio::test]
    async fn test_create_then_partial_update() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![rating(5, 4)]])
                .append_query_results([vec![rating(5, 4)]])
                .append_query_results([vec![rating(5, 2)]])
                .into_connection(),
        );
        let service = service(db);

        let created = service
            .create::<Ratings>(NewRating {
                user_id: 3,
                area: "Guwahati".into(),
                region: "Kamrup".into(),
                rating: 4,
            })
            .await
            .unwrap();
        assert_eq!(created.id, 5);

        let updated = service
            .update::<Ratings>(
                5,
                RatingChanges {
                    rating: Some(2),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.rating, 2);
        assert_eq!(updated.area, "Guwahati");
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([exec(0)])
                .into_connection(),
        );

        let result = service(db).delete::<Ratings>(9).await;

        assert_eq!(result, Err(CoreError::NotFound("Rating not found".into())));
    }

    #[tokio::test]
    async fn test_bulk_delete_without_confirm_runs_no_query() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let result = service(db.clone())
            .bulk_delete::<Ratings>(
                BulkScope::Relation {
                    segment: "user".into(),
                    id: 3,
                },
                None,
            )
            .await;

        assert!(matches!(result, Err(CoreError::ConfirmationRequired(_))));
        assert!(transaction_log(&db).is_empty());
    }

    #[tokio::test]
    async fn test_bulk_delete_by_date_range() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![count_row(2)]])
                .append_exec_results([exec(2)])
                .into_connection(),
        );

        let deleted = service(db)
            .bulk_delete::<Ratings>(
                BulkScope::DateRange {
                    start: Some("2024-01-01".into()),
                    end: Some("2024-01-31".into()),
                },
                Some("true".into()),
            )
            .await;

        assert_eq!(deleted, Ok(2));
    }

    #[tokio::test]
    async fn test_bulk_delete_all_with_nothing_to_delete() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![count_row(0)]])
                .into_connection(),
        );

        let result = service(db.clone())
            .bulk_delete::<Ratings>(BulkScope::All, Some("DELETE_ALL_RATINGS".into()))
            .await;

        assert_eq!(
            result,
            Err(CoreError::NotFound("No ratings records found to delete".into()))
        );
        assert!(!format!("{:?}", transaction_log(&db)).contains("DELETE"));
    }
}
