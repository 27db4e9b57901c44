use chrono::NaiveDate;

use crate::{
    domain::{
        attendance::value_objects::{CheckInInput, CheckOutInput},
        common::entities::app_errors::CoreError,
    },
    entity::salesman_attendance,
};

pub trait AttendanceService: Send + Sync {
    /// At most one check-in per user and day.
    fn check_in(
        &self,
        input: CheckInInput,
    ) -> impl Future<Output = Result<salesman_attendance::Model, CoreError>> + Send;

    fn check_out(
        &self,
        input: CheckOutInput,
    ) -> impl Future<Output = Result<salesman_attendance::Model, CoreError>> + Send;
}

pub trait AttendanceRepository: Send + Sync {
    fn find_for_day(
        &self,
        user_id: i32,
        attendance_date: NaiveDate,
    ) -> impl Future<Output = Result<Option<salesman_attendance::Model>, CoreError>> + Send;

    fn insert_check_in(
        &self,
        input: CheckInInput,
    ) -> impl Future<Output = Result<salesman_attendance::Model, CoreError>> + Send;

    fn record_check_out(
        &self,
        id: i32,
        input: CheckOutInput,
    ) -> impl Future<Output = Result<salesman_attendance::Model, CoreError>> + Send;
}
