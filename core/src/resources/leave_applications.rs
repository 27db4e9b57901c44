use chrono::NaiveDate;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    domain::{
        common::generate_timestamp,
        query::descriptor::{
            DateColumn, FieldType, FilterRule, RelationScope, ResourceDescriptor, SortKey,
        },
        resource::ports::Resource,
    },
    entity::salesman_leave_applications::{ActiveModel, Column, Entity, Model},
};

pub struct LeaveApplications;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewLeaveApplication {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: i32,
    #[validate(length(min = 1, message = "leaveType is required"))]
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(length(min = 1, message = "reason is required"))]
    pub reason: String,
    pub status: Option<String>,
    pub admin_remarks: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplicationChanges {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: Option<i32>,
    #[validate(length(min = 1, message = "leaveType is required"))]
    pub leave_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "reason is required"))]
    pub reason: Option<String>,
    pub status: Option<String>,
    pub admin_remarks: Option<String>,
}

static DESCRIPTOR: ResourceDescriptor<Column> = ResourceDescriptor {
    name: "leave-applications",
    label: "Leave application",
    primary_key: Column::Id,
    default_sort: Column::StartDate,
    filters: &[
        FilterRule::Exact {
            param: "userId",
            column: Column::UserId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "leaveType",
            column: Column::LeaveType,
            field_type: FieldType::Text,
        },
        FilterRule::Exact {
            param: "status",
            column: Column::Status,
            field_type: FieldType::Text,
        },
        FilterRule::Range {
            lower: "startDate",
            upper: "endDate",
            column: Column::StartDate,
            field_type: FieldType::Date,
        },
    ],
    search: &[Column::Reason, Column::AdminRemarks],
    sorts: &[
        SortKey {
            key: "startDate",
            column: Column::StartDate,
        },
        SortKey {
            key: "endDate",
            column: Column::EndDate,
        },
        SortKey {
            key: "status",
            column: Column::Status,
        },
        SortKey {
            key: "createdAt",
            column: Column::CreatedAt,
        },
    ],
    relations: &[
        RelationScope {
            segment: "user",
            column: Column::UserId,
        },
    ],
    date_column: Some(DateColumn {
        column: Column::StartDate,
        field_type: FieldType::Date,
    }),
};

impl Resource for LeaveApplications {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = NewLeaveApplication;
    type Update = LeaveApplicationChanges;

    fn descriptor() -> &'static ResourceDescriptor<Column> {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewLeaveApplication) -> ActiveModel {
        let now = generate_timestamp();
        ActiveModel {
            user_id: Set(input.user_id),
            leave_type: Set(input.leave_type),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            reason: Set(input.reason),
            status: Set(input.status.unwrap_or_else(|| "pending".to_string())),
            admin_remarks: Set(input.admin_remarks),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn apply_changes(model: &mut ActiveModel, input: LeaveApplicationChanges) {
        if let Some(user_id) = input.user_id {
            model.user_id = Set(user_id);
        }
        if let Some(leave_type) = input.leave_type {
            model.leave_type = Set(leave_type);
        }
        if let Some(start_date) = input.start_date {
            model.start_date = Set(start_date);
        }
        if let Some(end_date) = input.end_date {
            model.end_date = Set(end_date);
        }
        if let Some(reason) = input.reason {
            model.reason = Set(reason);
        }
        if let Some(status) = input.status {
            model.status = Set(status);
        }
        if let Some(admin_remarks) = input.admin_remarks {
            model.admin_remarks = Set(Some(admin_remarks));
        }
        model.updated_at = Set(generate_timestamp());
    }
}
