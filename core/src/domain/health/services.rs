use crate::domain::{
    attendance::ports::AttendanceRepository,
    common::{entities::app_errors::CoreError, services::Service},
    dealer::ports::DealerRepository,
    geofence::ports::GeofenceClient,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    resource::ports::ResourceRepository,
};

impl<RR, DR, AR, HC, G> HealthCheckService for Service<RR, DR, AR, HC, G>
where
    RR: ResourceRepository,
    DR: DealerRepository,
    AR: AttendanceRepository,
    HC: HealthCheckRepository,
    G: GeofenceClient,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let response_time_ms = self.health_check_repository.ping().await?;
        Ok(DatabaseHealthStatus {
            status: "ok".to_string(),
            response_time_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    use super::*;
    use crate::{
        application::{build_service, test_config},
        domain::common::SchemaCapabilities,
    };

    #[tokio::test]
    async fn test_readiness_reports_ok_after_ping() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );
        let service = build_service(db, SchemaCapabilities::default(), &test_config());

        let status = service.readiness().await.unwrap();

        assert_eq!(status.status, "ok");
    }

    #[tokio::test]
    async fn test_readiness_fails_when_database_is_down() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_errors([DbErr::Custom("connection refused".into())])
                .into_connection(),
        );
        let service = build_service(db, SchemaCapabilities::default(), &test_config());

        let result = service.readiness().await;

        assert!(matches!(result, Err(CoreError::Database(message)) if message.contains("connection refused")));
    }
}
