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
    entity::ratings::{ActiveModel, Column, Entity, Model},
};

pub struct Ratings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewRating {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: i32,
    #[validate(length(min = 1, message = "area is required"))]
    pub area: String,
    #[validate(length(min = 1, message = "region is required"))]
    pub region: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingChanges {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: Option<i32>,
    #[validate(length(min = 1, message = "area is required"))]
    pub area: Option<String>,
    #[validate(length(min = 1, message = "region is required"))]
    pub region: Option<String>,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: Option<i32>,
}

static DESCRIPTOR: ResourceDescriptor<Column> = ResourceDescriptor {
    name: "ratings",
    label: "Rating",
    primary_key: Column::Id,
    default_sort: Column::CreatedAt,
    filters: &[
        FilterRule::Exact {
            param: "userId",
            column: Column::UserId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "area",
            column: Column::Area,
            field_type: FieldType::Text,
        },
        FilterRule::Exact {
            param: "region",
            column: Column::Region,
            field_type: FieldType::Text,
        },
        FilterRule::Exact {
            param: "rating",
            column: Column::Rating,
            field_type: FieldType::Integer,
        },
        FilterRule::Range {
            lower: "minRating",
            upper: "maxRating",
            column: Column::Rating,
            field_type: FieldType::Integer,
        },
        FilterRule::Range {
            lower: "startDate",
            upper: "endDate",
            column: Column::CreatedAt,
            field_type: FieldType::Timestamp,
        },
    ],
    search: &[Column::Area, Column::Region],
    sorts: &[
        SortKey {
            key: "rating",
            column: Column::Rating,
        },
        SortKey {
            key: "area",
            column: Column::Area,
        },
        SortKey {
            key: "region",
            column: Column::Region,
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
        column: Column::CreatedAt,
        field_type: FieldType::Timestamp,
    }),
};

impl Resource for Ratings {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = NewRating;
    type Update = RatingChanges;

    fn descriptor() -> &'static ResourceDescriptor<Column> {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewRating) -> ActiveModel {
        let now = generate_timestamp();
        ActiveModel {
            user_id: Set(input.user_id),
            area: Set(input.area),
            region: Set(input.region),
            rating: Set(input.rating),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn apply_changes(model: &mut ActiveModel, input: RatingChanges) {
        if let Some(user_id) = input.user_id {
            model.user_id = Set(user_id);
        }
        if let Some(area) = input.area {
            model.area = Set(area);
        }
        if let Some(region) = input.region {
            model.region = Set(region);
        }
        if let Some(rating) = input.rating {
            model.rating = Set(rating);
        }
        model.updated_at = Set(generate_timestamp());
    }
}
