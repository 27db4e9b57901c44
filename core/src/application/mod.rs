use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    domain::common::{FieldForceConfig, SchemaCapabilities, services::Service},
    infrastructure::{
        attendance::PostgresAttendanceRepository,
        db::postgres::{Postgres, PostgresConfig},
        dealer::PostgresDealerRepository,
        geofence::GeofenceProvider,
        health::PostgresHealthCheckRepository,
        resource::PostgresResourceRepository,
        schema::capabilities::resolve_capabilities,
    },
};

pub type FieldForceService = Service<
    PostgresResourceRepository,
    PostgresDealerRepository,
    PostgresAttendanceRepository,
    PostgresHealthCheckRepository,
    GeofenceProvider,
>;

pub async fn create_service(config: FieldForceConfig) -> Result<FieldForceService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
        max_connections: config.database.max_connections,
    })
    .await?;
    let db = postgres.get_db();

    let capabilities = resolve_capabilities(db.as_ref(), &config.schema).await?;

    Ok(build_service(db, capabilities, &config))
}

/// Wires the Postgres adapters around an existing connection.
pub fn build_service(
    db: Arc<DatabaseConnection>,
    capabilities: SchemaCapabilities,
    config: &FieldForceConfig,
) -> FieldForceService {
    Service::new(
        PostgresResourceRepository::new(Arc::clone(&db)),
        PostgresDealerRepository::new(Arc::clone(&db)),
        PostgresAttendanceRepository::new(Arc::clone(&db)),
        PostgresHealthCheckRepository::new(db),
        GeofenceProvider::from(&config.geofence),
        capabilities,
        config.geofence.radius_meters,
    )
}

/// Statements recorded so far by a `MockDatabase` connection.
#[cfg(test)]
pub(crate) fn transaction_log(db: &DatabaseConnection) -> Vec<sea_orm::Transaction> {
    match db {
        DatabaseConnection::MockDatabaseConnection(conn) => {
            DatabaseConnection::MockDatabaseConnection(Arc::clone(conn)).into_transaction_log()
        }
        _ => panic!("not a mock connection"),
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> FieldForceConfig {
    use crate::domain::common::{DatabaseConfig, GeofenceConfig, SchemaConfig};

    FieldForceConfig {
        database: DatabaseConfig {
            host: "localhost".into(),
            port: 5432,
            username: "postgres".into(),
            password: "postgres".into(),
            name: "fieldforce".into(),
            max_connections: 1,
        },
        geofence: GeofenceConfig {
            api_url: "https://api.radar.io/v1".into(),
            secret_key: None,
            tag: "dealer".into(),
            radius_meters: 25,
        },
        schema: SchemaConfig::default(),
    }
}
