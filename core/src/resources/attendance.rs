use chrono::{DateTime, FixedOffset};
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    domain::{
        attendance::value_objects::CheckInInput,
        common::generate_timestamp,
        query::descriptor::{
            DateColumn, FieldType, FilterRule, RelationScope, ResourceDescriptor, SortKey,
        },
        resource::ports::Resource,
    },
    entity::salesman_attendance::{ActiveModel, Column, Entity, Model},
};

/// Salesman attendance. Records are created by the check-in flow; the generic
/// endpoints list, correct and delete them. The attendance date is fixed at
/// check-in so corrections cannot move a record onto a day that already has
/// one.
pub struct Attendance;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceChanges {
    #[validate(length(min = 1, message = "locationName is required"))]
    pub location_name: Option<String>,
    pub in_time_timestamp: Option<DateTime<FixedOffset>>,
    pub out_time_timestamp: Option<DateTime<FixedOffset>>,
    #[validate(url(message = "inTimeImageUrl must be a valid URL"))]
    pub in_time_image_url: Option<String>,
    #[validate(url(message = "outTimeImageUrl must be a valid URL"))]
    pub out_time_image_url: Option<String>,
}

static DESCRIPTOR: ResourceDescriptor<Column> = ResourceDescriptor {
    name: "attendance",
    label: "Attendance record",
    primary_key: Column::Id,
    default_sort: Column::AttendanceDate,
    filters: &[
        FilterRule::Exact {
            param: "userId",
            column: Column::UserId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "attendanceDate",
            column: Column::AttendanceDate,
            field_type: FieldType::Date,
        },
        FilterRule::Exact {
            param: "inTimeImageCaptured",
            column: Column::InTimeImageCaptured,
            field_type: FieldType::Boolean,
        },
        FilterRule::Range {
            lower: "startDate",
            upper: "endDate",
            column: Column::AttendanceDate,
            field_type: FieldType::Date,
        },
    ],
    search: &[Column::LocationName],
    sorts: &[
        SortKey {
            key: "attendanceDate",
            column: Column::AttendanceDate,
        },
        SortKey {
            key: "inTimeTimestamp",
            column: Column::InTimeTimestamp,
        },
        SortKey {
            key: "createdAt",
            column: Column::CreatedAt,
        },
    ],
    relations: &[RelationScope {
        segment: "user",
        column: Column::UserId,
    }],
    date_column: Some(DateColumn {
        column: Column::AttendanceDate,
        field_type: FieldType::Date,
    }),
};

impl From<CheckInInput> for ActiveModel {
    fn from(input: CheckInInput) -> Self {
        let now = generate_timestamp();
        ActiveModel {
            user_id: Set(input.user_id),
            attendance_date: Set(input.attendance_date),
            location_name: Set(input.location_name),
            in_time_timestamp: Set(now),
            out_time_timestamp: Set(None),
            in_time_image_captured: Set(input.in_time_image_captured),
            out_time_image_captured: Set(false),
            in_time_image_url: Set(input.in_time_image_url),
            out_time_image_url: Set(None),
            in_time_latitude: Set(input.in_time_latitude),
            in_time_longitude: Set(input.in_time_longitude),
            in_time_accuracy: Set(input.in_time_accuracy),
            in_time_speed: Set(input.in_time_speed),
            in_time_heading: Set(input.in_time_heading),
            in_time_altitude: Set(input.in_time_altitude),
            out_time_latitude: Set(None),
            out_time_longitude: Set(None),
            out_time_accuracy: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }
}

impl Resource for Attendance {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CheckInInput;
    type Update = AttendanceChanges;

    fn descriptor() -> &'static ResourceDescriptor<Column> {
        &DESCRIPTOR
    }

    fn new_active_model(input: CheckInInput) -> ActiveModel {
        ActiveModel::from(input)
    }

    fn apply_changes(model: &mut ActiveModel, input: AttendanceChanges) {
        if let Some(location_name) = input.location_name {
            model.location_name = Set(location_name);
        }
        if let Some(in_time_timestamp) = input.in_time_timestamp {
            model.in_time_timestamp = Set(in_time_timestamp);
        }
        if let Some(out_time_timestamp) = input.out_time_timestamp {
            model.out_time_timestamp = Set(Some(out_time_timestamp));
        }
        if let Some(in_time_image_url) = input.in_time_image_url {
            model.in_time_image_url = Set(Some(in_time_image_url));
        }
        if let Some(out_time_image_url) = input.out_time_image_url {
            model.out_time_image_url = Set(Some(out_time_image_url));
        }
        model.updated_at = Set(generate_timestamp());
    }
}
