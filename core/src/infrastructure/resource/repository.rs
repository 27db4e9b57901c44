use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DeleteMany, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, TransactionTrait,
};
use tracing::{debug, error};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        query::{ListQuery, value_objects::Predicate},
        resource::ports::{ColumnOf, ModelOf, Resource, ResourceRepository},
    },
    infrastructure::query::condition::{to_condition, to_order},
};

#[derive(Debug, Clone)]
pub struct PostgresResourceRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresResourceRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Applies `predicate` to any filterable statement; `None` leaves it unscoped.
fn scoped<Q: QueryFilter, C: ColumnTrait>(query: Q, predicate: Option<&Predicate<C>>) -> Q {
    match predicate {
        Some(predicate) => query.filter(to_condition(predicate)),
        None => query,
    }
}

fn delete_statement<R: Resource>(
    predicate: Option<&Predicate<ColumnOf<R>>>,
) -> DeleteMany<R::Entity> {
    scoped(R::Entity::delete_many(), predicate)
}

fn page_select<R: Resource>(query: &ListQuery<ColumnOf<R>>) -> Select<R::Entity> {
    let mut select = R::Entity::find();
    if let Some(predicate) = &query.predicate {
        select = select.filter(to_condition(predicate));
    }

    select = select.order_by(query.sort.column, to_order(query.sort.direction));
    if let Some(tie_breaker) = query.sort.tie_breaker {
        select = select.order_by_desc(tie_breaker);
    }

    select
        .limit(query.pagination.limit)
        .offset(query.pagination.offset())
}

impl ResourceRepository for PostgresResourceRepository {
    async fn find_page<R: Resource>(
        &self,
        query: ListQuery<ColumnOf<R>>,
    ) -> Result<Vec<ModelOf<R>>, CoreError> {
        let rows = page_select::<R>(&query)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!(resource = R::descriptor().name, "Failed to list records: {}", e);
                CoreError::from(e)
            })?;

        debug!(
            resource = R::descriptor().name,
            count = rows.len(),
            page = query.pagination.page,
            "listed records"
        );
        Ok(rows)
    }

    async fn find_by_id<R: Resource>(&self, id: i32) -> Result<Option<ModelOf<R>>, CoreError> {
        R::Entity::find()
            .filter(R::descriptor().primary_key.eq(id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!(resource = R::descriptor().name, id, "Failed to get record: {}", e);
                CoreError::from(e)
            })
    }

    async fn insert<R: Resource>(&self, input: R::Create) -> Result<ModelOf<R>, CoreError> {
        R::new_active_model(input)
            .insert(self.db.as_ref())
            .await
            .map_err(|e| {
                error!(resource = R::descriptor().name, "Failed to create record: {}", e);
                CoreError::from(e)
            })
    }

    async fn update<R: Resource>(
        &self,
        id: i32,
        input: R::Update,
    ) -> Result<Option<ModelOf<R>>, CoreError> {
        let Some(model) = self.find_by_id::<R>(id).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        R::apply_changes(&mut active, input);

        let updated = active.update(self.db.as_ref()).await.map_err(|e| {
            error!(resource = R::descriptor().name, id, "Failed to update record: {}", e);
            CoreError::from(e)
        })?;

        Ok(Some(updated))
    }

    async fn delete_by_id<R: Resource>(&self, id: i32) -> Result<u64, CoreError> {
        let result = R::Entity::delete_many()
            .filter(R::descriptor().primary_key.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| {
                error!(resource = R::descriptor().name, id, "Failed to delete record: {}", e);
                CoreError::from(e)
            })?;

        Ok(result.rows_affected)
    }

    async fn delete_matching<R: Resource>(
        &self,
        predicate: Option<Predicate<ColumnOf<R>>>,
    ) -> Result<u64, CoreError> {
        let name = R::descriptor().name;
        let log_failure = |e: sea_orm::DbErr| {
            error!(resource = name, "Failed to bulk delete records: {}", e);
            CoreError::from(e)
        };

        let txn = self.db.begin().await.map_err(log_failure)?;

        let matching = scoped(R::Entity::find(), predicate.as_ref())
            .count(&txn)
            .await
            .map_err(log_failure)?;
        if matching == 0 {
            txn.rollback().await.map_err(log_failure)?;
            return Ok(0);
        }

        let result = delete_statement::<R>(predicate.as_ref())
            .exec(&txn)
            .await
            .map_err(log_failure)?;

        txn.commit().await.map_err(log_failure)?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;
    use crate::{
        domain::query::value_objects::RawQuery,
        resources::{dealers::Dealers, ratings::Ratings},
    };

    fn sql<R: Resource>(raw: RawQuery) -> String {
        let query = ListQuery::compose(R::descriptor(), None, &raw);
        page_select::<R>(&query).build(DbBackend::Postgres).to_string()
    }

    #[test]
    fn test_default_order_has_primary_key_tie_break() {
        let sql = sql::<Ratings>(RawQuery::new());
        assert!(
            sql.ends_with(
                r#"ORDER BY "ratings"."created_at" DESC, "ratings"."id" DESC LIMIT 50 OFFSET 0"#
            ),
            "{sql}"
        );
        assert!(!sql.contains("WHERE"), "{sql}");
    }

    #[test]
    fn test_page_limit_and_whitelisted_sort() {
        let raw = RawQuery::new()
            .with("sortBy", "rating")
            .with("sortDir", "asc")
            .with("page", "3")
            .with("limit", "10");
        let sql = sql::<Ratings>(raw);
        assert!(
            sql.ends_with(
                r#"ORDER BY "ratings"."rating" ASC, "ratings"."id" DESC LIMIT 10 OFFSET 20"#
            ),
            "{sql}"
        );
    }

    #[test]
    fn test_bulk_delete_carries_predicate_not_id_list() {
        let predicate = Ratings::descriptor().relation_predicate("user", 3);

        let sql = delete_statement::<Ratings>(predicate.as_ref())
            .build(DbBackend::Postgres)
            .to_string();

        assert_eq!(sql, r#"DELETE FROM "ratings" WHERE "ratings"."user_id" = 3"#);
    }

    #[test]
    fn test_delete_all_is_unscoped() {
        let sql = delete_statement::<Ratings>(None)
            .build(DbBackend::Postgres)
            .to_string();

        assert_eq!(sql, r#"DELETE FROM "ratings""#);
    }

    #[test]
    fn test_unknown_params_never_reach_sql() {
        let raw = RawQuery::new()
            .with("hashedPassword", "x")
            .with("sortBy", "hashed_password")
            .with("region", "R1");
        let sql = sql::<Ratings>(raw);
        assert!(!sql.contains("hashed"), "{sql}");
        assert!(sql.contains(r#""ratings"."region" = 'R1'"#), "{sql}");
    }

    #[test]
    fn test_limit_is_capped() {
        let sql = sql::<Dealers>(RawQuery::new().with("limit", "10000"));
        assert!(sql.contains("LIMIT 500"), "{sql}");
    }

    #[test]
    fn test_dealer_brand_filter_and_search() {
        let raw = RawQuery::new()
            .with("brandSelling", "Dalmia,Star")
            .with("anyBrand", "true")
            .with("search", "traders");
        let sql = sql::<Dealers>(raw);
        assert!(sql.contains(r#""dealers"."brand_selling" &&"#), "{sql}");
        assert!(sql.contains(r#""dealers"."name" ILIKE '%traders%'"#), "{sql}");
        assert!(sql.contains(" OR "), "{sql}");
    }
}
