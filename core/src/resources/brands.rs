use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    domain::{
        query::descriptor::{FieldType, FilterRule, ResourceDescriptor, SortKey},
        resource::ports::Resource,
    },
    entity::brands::{ActiveModel, Column, Entity, Model},
};

/// Brand catalogue. No timestamps on this table.
pub struct Brands;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBrand {
    #[validate(length(min = 1, max = 255, message = "name must be 1 to 255 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandChanges {
    #[validate(length(min = 1, max = 255, message = "name must be 1 to 255 characters"))]
    pub name: Option<String>,
}

static DESCRIPTOR: ResourceDescriptor<Column> = ResourceDescriptor {
    name: "brands",
    label: "Brand",
    primary_key: Column::Id,
    default_sort: Column::Id,
    filters: &[
        FilterRule::Exact {
            param: "name",
            column: Column::Name,
            field_type: FieldType::Text,
        },
    ],
    search: &[Column::Name],
    sorts: &[
        SortKey {
            key: "name",
            column: Column::Name,
        },
        SortKey {
            key: "id",
            column: Column::Id,
        },
    ],
    relations: &[],
    date_column: None,
};

impl Resource for Brands {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = NewBrand;
    type Update = BrandChanges;

    fn descriptor() -> &'static ResourceDescriptor<Column> {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewBrand) -> ActiveModel {
        ActiveModel {
            name: Set(input.name),
            ..Default::default()
        }
    }

    fn apply_changes(model: &mut ActiveModel, input: BrandChanges) {
        if let Some(name) = input.name {
            model.name = Set(name);
        }
    }
}
