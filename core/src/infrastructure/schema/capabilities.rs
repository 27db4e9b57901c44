use sea_orm::{ConnectionTrait, DbBackend, Statement};
use tracing::{error, info};

use crate::domain::common::{
    CapabilityMode, SchemaCapabilities, SchemaConfig, entities::app_errors::CoreError,
};

pub const MASTER_CONNECTED_TABLE: &str = "master_connected_table";

pub async fn table_exists<C: ConnectionTrait>(db: &C, table: &str) -> Result<bool, CoreError> {
    let statement = Statement::from_sql_and_values(
        DbBackend::Postgres,
        r#"
        SELECT EXISTS (
            SELECT 1 FROM information_schema.tables
            WHERE table_schema = current_schema() AND table_name = $1
        ) AS "exists"
        "#,
        [table.into()],
    );

    let row = db.query_one(statement).await.map_err(|e| {
        error!(table, "Failed to inspect schema: {}", e);
        CoreError::from(e)
    })?;

    match row {
        Some(row) => Ok(row.try_get::<bool>("", "exists")?),
        None => Ok(false),
    }
}

/// Resolves the optional tables of this deployment once, at startup.
pub async fn resolve_capabilities<C: ConnectionTrait>(
    db: &C,
    config: &SchemaConfig,
) -> Result<SchemaCapabilities, CoreError> {
    let master_connected_table = match config.master_connected_table {
        CapabilityMode::Enabled => true,
        CapabilityMode::Disabled => false,
        CapabilityMode::Auto => table_exists(db, MASTER_CONNECTED_TABLE).await?,
    };

    info!(master_connected_table, "schema capabilities resolved");
    Ok(SchemaCapabilities {
        master_connected_table,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    use super::*;

    fn exists_row(exists: bool) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("exists", Value::from(exists))])
    }

    #[tokio::test]
    async fn test_auto_mode_reads_information_schema() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![exists_row(true)]])
            .into_connection();

        let capabilities = resolve_capabilities(&db, &SchemaConfig::default())
            .await
            .unwrap();

        assert!(capabilities.master_connected_table);
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        assert!(format!("{log:?}").contains("information_schema.tables"));
    }

    #[tokio::test]
    async fn test_auto_mode_reports_missing_table() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![exists_row(false)]])
            .into_connection();

        let capabilities = resolve_capabilities(&db, &SchemaConfig::default())
            .await
            .unwrap();

        assert!(!capabilities.master_connected_table);
    }

    #[tokio::test]
    async fn test_forced_modes_skip_the_lookup() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let enabled = SchemaConfig {
            master_connected_table: CapabilityMode::Enabled,
        };
        let disabled = SchemaConfig {
            master_connected_table: CapabilityMode::Disabled,
        };

        assert!(resolve_capabilities(&db, &enabled).await.unwrap().master_connected_table);
        assert!(!resolve_capabilities(&db, &disabled).await.unwrap().master_connected_table);
        assert!(db.into_transaction_log().is_empty());
    }
}
