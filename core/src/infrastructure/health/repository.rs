use std::{sync::Arc, time::Instant};

use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::ports::HealthCheckRepository,
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn ping(&self) -> Result<u64, CoreError> {
        let started = Instant::now();
        self.db
            .execute(Statement::from_string(DbBackend::Postgres, "SELECT 1"))
            .await
            .map_err(|e| {
                error!("Database health check failed: {}", e);
                CoreError::from(e)
            })?;

        Ok(started.elapsed().as_millis() as u64)
    }
}
