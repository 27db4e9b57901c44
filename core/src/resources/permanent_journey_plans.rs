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
    entity::permanent_journey_plans::{ActiveModel, Column, Entity, Model},
};

pub struct PermanentJourneyPlans;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPermanentJourneyPlan {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: i32,
    #[validate(range(min = 1, message = "createdById must be a positive id"))]
    pub created_by_id: i32,
    pub plan_date: NaiveDate,
    #[validate(length(min = 1, message = "areaToBeVisited is required"))]
    pub area_to_be_visited: String,
    pub description: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PermanentJourneyPlanChanges {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: Option<i32>,
    #[validate(range(min = 1, message = "createdById must be a positive id"))]
    pub created_by_id: Option<i32>,
    pub plan_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "areaToBeVisited is required"))]
    pub area_to_be_visited: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

static DESCRIPTOR: ResourceDescriptor<Column> = ResourceDescriptor {
    name: "pjp",
    label: "Permanent journey plan",
    primary_key: Column::Id,
    default_sort: Column::PlanDate,
    filters: &[
        FilterRule::Exact {
            param: "userId",
            column: Column::UserId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "createdById",
            column: Column::CreatedById,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "status",
            column: Column::Status,
            field_type: FieldType::Text,
        },
        FilterRule::Range {
            lower: "startDate",
            upper: "endDate",
            column: Column::PlanDate,
            field_type: FieldType::Date,
        },
    ],
    search: &[Column::AreaToBeVisited, Column::Description],
    sorts: &[
        SortKey {
            key: "planDate",
            column: Column::PlanDate,
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
            segment: "created-by",
            column: Column::CreatedById,
        },
    ],
    date_column: Some(DateColumn {
        column: Column::PlanDate,
        field_type: FieldType::Date,
    }),
};

impl Resource for PermanentJourneyPlans {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = NewPermanentJourneyPlan;
    type Update = PermanentJourneyPlanChanges;

    fn descriptor() -> &'static ResourceDescriptor<Column> {
        &DESCRIPTOR
    }

    /// New plans start as `planned` unless a status is supplied.
    fn new_active_model(input: NewPermanentJourneyPlan) -> ActiveModel {
        let now = generate_timestamp();
        ActiveModel {
            user_id: Set(input.user_id),
            created_by_id: Set(input.created_by_id),
            plan_date: Set(input.plan_date),
            area_to_be_visited: Set(input.area_to_be_visited),
            description: Set(input.description),
            status: Set(input.status.unwrap_or_else(|| "planned".to_string())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn apply_changes(model: &mut ActiveModel, input: PermanentJourneyPlanChanges) {
        if let Some(user_id) = input.user_id {
            model.user_id = Set(user_id);
        }
        if let Some(created_by_id) = input.created_by_id {
            model.created_by_id = Set(created_by_id);
        }
        if let Some(plan_date) = input.plan_date {
            model.plan_date = Set(plan_date);
        }
        if let Some(area_to_be_visited) = input.area_to_be_visited {
            model.area_to_be_visited = Set(area_to_be_visited);
        }
        if let Some(description) = input.description {
            model.description = Set(Some(description));
        }
        if let Some(status) = input.status {
            model.status = Set(status);
        }
        model.updated_at = Set(generate_timestamp());
    }
}
