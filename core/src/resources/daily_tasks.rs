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
    entity::daily_tasks::{ActiveModel, Column, Entity, Model},
};

pub struct DailyTasks;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDailyTask {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: i32,
    #[validate(range(min = 1, message = "assignedByUserId must be a positive id"))]
    pub assigned_by_user_id: i32,
    pub task_date: NaiveDate,
    #[validate(length(min = 1, message = "visitType is required"))]
    pub visit_type: String,
    pub related_dealer_id: Option<i32>,
    pub site_name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub pjp_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyTaskChanges {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: Option<i32>,
    #[validate(range(min = 1, message = "assignedByUserId must be a positive id"))]
    pub assigned_by_user_id: Option<i32>,
    pub task_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "visitType is required"))]
    pub visit_type: Option<String>,
    pub related_dealer_id: Option<i32>,
    pub site_name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub pjp_id: Option<i32>,
}

static DESCRIPTOR: ResourceDescriptor<Column> = ResourceDescriptor {
    name: "daily-tasks",
    label: "Daily task",
    primary_key: Column::Id,
    default_sort: Column::TaskDate,
    filters: &[
        FilterRule::Exact {
            param: "userId",
            column: Column::UserId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "assignedByUserId",
            column: Column::AssignedByUserId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "status",
            column: Column::Status,
            field_type: FieldType::Text,
        },
        FilterRule::Exact {
            param: "visitType",
            column: Column::VisitType,
            field_type: FieldType::Text,
        },
        FilterRule::Exact {
            param: "relatedDealerId",
            column: Column::RelatedDealerId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "pjpId",
            column: Column::PjpId,
            field_type: FieldType::Integer,
        },
        FilterRule::Range {
            lower: "startDate",
            upper: "endDate",
            column: Column::TaskDate,
            field_type: FieldType::Date,
        },
    ],
    search: &[Column::SiteName, Column::Description],
    sorts: &[
        SortKey {
            key: "taskDate",
            column: Column::TaskDate,
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
        RelationScope {
            segment: "assigned-by",
            column: Column::AssignedByUserId,
        },
        RelationScope {
            segment: "pjp",
            column: Column::PjpId,
        },
    ],
    date_column: Some(DateColumn {
        column: Column::TaskDate,
        field_type: FieldType::Date,
    }),
};

impl Resource for DailyTasks {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = NewDailyTask;
    type Update = DailyTaskChanges;

    fn descriptor() -> &'static ResourceDescriptor<Column> {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewDailyTask) -> ActiveModel {
        let now = generate_timestamp();
        ActiveModel {
            user_id: Set(input.user_id),
            assigned_by_user_id: Set(input.assigned_by_user_id),
            task_date: Set(input.task_date),
            visit_type: Set(input.visit_type),
            related_dealer_id: Set(input.related_dealer_id),
            site_name: Set(input.site_name),
            description: Set(input.description),
            status: Set(input.status.unwrap_or_else(|| "assigned".to_string())),
            pjp_id: Set(input.pjp_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn apply_changes(model: &mut ActiveModel, input: DailyTaskChanges) {
        if let Some(user_id) = input.user_id {
            model.user_id = Set(user_id);
        }
        if let Some(assigned_by_user_id) = input.assigned_by_user_id {
            model.assigned_by_user_id = Set(assigned_by_user_id);
        }
        if let Some(task_date) = input.task_date {
            model.task_date = Set(task_date);
        }
        if let Some(visit_type) = input.visit_type {
            model.visit_type = Set(visit_type);
        }
        if let Some(related_dealer_id) = input.related_dealer_id {
            model.related_dealer_id = Set(Some(related_dealer_id));
        }
        if let Some(site_name) = input.site_name {
            model.site_name = Set(Some(site_name));
        }
        if let Some(description) = input.description {
            model.description = Set(Some(description));
        }
        if let Some(status) = input.status {
            model.status = Set(status);
        }
        if let Some(pjp_id) = input.pjp_id {
            model.pjp_id = Set(Some(pjp_id));
        }
        model.updated_at = Set(generate_timestamp());
    }
}
