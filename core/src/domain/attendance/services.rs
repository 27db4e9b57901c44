use tracing::info;

use crate::{
    domain::{
        attendance::{
            ports::{AttendanceRepository, AttendanceService},
            value_objects::{CheckInInput, CheckOutInput},
        },
        common::{entities::app_errors::CoreError, services::Service},
        dealer::ports::DealerRepository,
        geofence::ports::GeofenceClient,
        health::ports::HealthCheckRepository,
        resource::ports::ResourceRepository,
    },
    entity::salesman_attendance,
};

// The existence read and the insert are not atomic: two concurrent check-ins
// for the same user and day can both pass the read. No unique constraint on
// (user_id, attendance_date) is assumed.
impl<RR, DR, AR, HC, G> AttendanceService for Service<RR, DR, AR, HC, G>
where
    RR: ResourceRepository,
    DR: DealerRepository,
    AR: AttendanceRepository,
    HC: HealthCheckRepository,
    G: GeofenceClient,
{
    async fn check_in(&self, input: CheckInInput) -> Result<salesman_attendance::Model, CoreError> {
        let existing = self
            .attendance_repository
            .find_for_day(input.user_id, input.attendance_date)
            .await?;
        if existing.is_some() {
            return Err(CoreError::AlreadyCheckedIn);
        }

        let record = self.attendance_repository.insert_check_in(input).await?;
        info!(
            user_id = record.user_id,
            attendance_id = record.id,
            date = %record.attendance_date,
            "user checked in"
        );

        Ok(record)
    }

    async fn check_out(
        &self,
        input: CheckOutInput,
    ) -> Result<salesman_attendance::Model, CoreError> {
        let record = self
            .attendance_repository
            .find_for_day(input.user_id, input.attendance_date)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound("No check-in record found for today".to_string())
            })?;
        if record.out_time_timestamp.is_some() {
            return Err(CoreError::AlreadyCheckedOut);
        }

        let record = self
            .attendance_repository
            .record_check_out(record.id, input)
            .await?;
        info!(
            user_id = record.user_id,
            attendance_id = record.id,
            "user checked out"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

    use super::*;
    use crate::{
        application::{FieldForceService, build_service, test_config},
        domain::common::{SchemaCapabilities, generate_timestamp},
    };

    fn service(db: Arc<DatabaseConnection>) -> FieldForceService {
        build_service(db, SchemaCapabilities::default(), &test_config())
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    fn record(checked_out: bool) -> salesman_attendance::Model {
        let now = generate_timestamp();
        salesman_attendance::Model {
            id: 11,
            user_id: 1,
            attendance_date: date(),
            location_name: "Guwahati depot".into(),
            in_time_timestamp: now,
            out_time_timestamp: checked_out.then_some(now),
            in_time_image_captured: false,
            out_time_image_captured: false,
            in_time_image_url: None,
            out_time_image_url: None,
            in_time_latitude: 26.14,
            in_time_longitude: 91.73,
            in_time_accuracy: None,
            in_time_speed: None,
            in_time_heading: None,
            in_time_altitude: None,
            out_time_latitude: checked_out.then_some(26.15),
            out_time_longitude: checked_out.then_some(91.74),
            out_time_accuracy: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn check_in_input() -> CheckInInput {
        CheckInInput {
            user_id: 1,
            attendance_date: date(),
            location_name: "Guwahati depot".into(),
            in_time_image_captured: false,
            in_time_image_url: None,
            in_time_latitude: 26.14,
            in_time_longitude: 91.73,
            in_time_accuracy: None,
            in_time_speed: None,
            in_time_heading: None,
            in_time_altitude: None,
        }
    }

    fn check_out_input() -> CheckOutInput {
        CheckOutInput {
            user_id: 1,
            attendance_date: date(),
            out_time_image_captured: false,
            out_time_image_url: None,
            out_time_latitude: 26.15,
            out_time_longitude: 91.74,
            out_time_accuracy: None,
        }
    }

    #[tokio::test]
    async fn test_second_check_in_same_day_is_rejected() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<salesman_attendance::Model>::new()])
                .append_query_results([vec![record(false)]])
                .append_query_results([vec![record(false)]])
                .into_connection(),
        );
        let service = service(db);

        let first = service.check_in(check_in_input()).await.unwrap();
        assert_eq!(first.id, 11);

        let second = service.check_in(check_in_input()).await;
        assert_eq!(second, Err(CoreError::AlreadyCheckedIn));
        assert_eq!(
            CoreError::AlreadyCheckedIn.to_string(),
            "User has already checked in today"
        );
    }

    #[tokio::test]
    async fn test_check_out_without_check_in_is_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<salesman_attendance::Model>::new()])
                .into_connection(),
        );

        let result = service(db).check_out(check_out_input()).await;

        assert_eq!(
            result,
            Err(CoreError::NotFound(
                "No check-in record found for today".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_check_out_records_out_time_once() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![record(false)]])
                .append_query_results([vec![record(true)]])
                .append_query_results([vec![record(true)]])
                .into_connection(),
        );
        let service = service(db);

        let checked_out = service.check_out(check_out_input()).await.unwrap();
        assert!(checked_out.out_time_timestamp.is_some());

        let again = service.check_out(check_out_input()).await;
        assert_eq!(again, Err(CoreError::AlreadyCheckedOut));
    }
}
