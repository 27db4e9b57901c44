use std::sync::Arc;

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use tracing::error;

use crate::{
    domain::{
        attendance::{
            ports::AttendanceRepository,
            value_objects::{CheckInInput, CheckOutInput},
        },
        common::{entities::app_errors::CoreError, generate_timestamp},
    },
    entity::salesman_attendance::{ActiveModel, Column, Entity, Model},
};

#[derive(Debug, Clone)]
pub struct PostgresAttendanceRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresAttendanceRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl AttendanceRepository for PostgresAttendanceRepository {
    async fn find_for_day(
        &self,
        user_id: i32,
        attendance_date: NaiveDate,
    ) -> Result<Option<Model>, CoreError> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::AttendanceDate.eq(attendance_date))
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!(user_id, "Failed to read attendance: {}", e);
                CoreError::from(e)
            })
    }

    async fn insert_check_in(&self, input: CheckInInput) -> Result<Model, CoreError> {
        let user_id = input.user_id;
        ActiveModel::from(input)
            .insert(self.db.as_ref())
            .await
            .map_err(|e| {
                error!(user_id, "Failed to record check-in: {}", e);
                CoreError::from(e)
            })
    }

    async fn record_check_out(&self, id: i32, input: CheckOutInput) -> Result<Model, CoreError> {
        let now = generate_timestamp();
        ActiveModel {
            id: Set(id),
            out_time_timestamp: Set(Some(now)),
            out_time_image_captured: Set(input.out_time_image_captured),
            out_time_image_url: Set(input.out_time_image_url),
            out_time_latitude: Set(Some(input.out_time_latitude)),
            out_time_longitude: Set(Some(input.out_time_longitude)),
            out_time_accuracy: Set(input.out_time_accuracy),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(self.db.as_ref())
        .await
        .map_err(|e| {
            error!(attendance_id = id, "Failed to record check-out: {}", e);
            CoreError::from(e)
        })
    }
}
