use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    domain::{
        query::descriptor::{FieldType, FilterRule, RelationScope, ResourceDescriptor, SortKey},
        resource::ports::Resource,
    },
    entity::dealer_brand_mapping::{ActiveModel, Column, Entity, Model},
};

pub struct DealerBrandMappings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDealerBrandMapping {
    #[validate(range(min = 1, message = "dealerId must be a positive id"))]
    pub dealer_id: i32,
    #[validate(range(min = 1, message = "brandId must be a positive id"))]
    pub brand_id: i32,
    #[validate(range(min = 0.0, message = "capacityMt cannot be negative"))]
    pub capacity_mt: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealerBrandMappingChanges {
    #[validate(range(min = 1, message = "dealerId must be a positive id"))]
    pub dealer_id: Option<i32>,
    #[validate(range(min = 1, message = "brandId must be a positive id"))]
    pub brand_id: Option<i32>,
    #[validate(range(min = 0.0, message = "capacityMt cannot be negative"))]
    pub capacity_mt: Option<f64>,
}

static DESCRIPTOR: ResourceDescriptor<Column> = ResourceDescriptor {
    name: "dealer-brand-mapping",
    label: "Dealer brand mapping",
    primary_key: Column::Id,
    default_sort: Column::Id,
    filters: &[
        FilterRule::Exact {
            param: "dealerId",
            column: Column::DealerId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "brandId",
            column: Column::BrandId,
            field_type: FieldType::Integer,
        },
        FilterRule::Range {
            lower: "minCapacity",
            upper: "maxCapacity",
            column: Column::CapacityMt,
            field_type: FieldType::Float,
        },
    ],
    search: &[],
    sorts: &[
        SortKey {
            key: "capacityMt",
            column: Column::CapacityMt,
        },
        SortKey {
            key: "id",
            column: Column::Id,
        },
    ],
    relations: &[
        RelationScope {
            segment: "dealer",
            column: Column::DealerId,
        },
        RelationScope {
            segment: "brand",
            column: Column::BrandId,
        },
    ],
    date_column: None,
};

impl Resource for DealerBrandMappings {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = NewDealerBrandMapping;
    type Update = DealerBrandMappingChanges;

    fn descriptor() -> &'static ResourceDescriptor<Column> {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewDealerBrandMapping) -> ActiveModel {
        ActiveModel {
            dealer_id: Set(input.dealer_id),
            brand_id: Set(input.brand_id),
            capacity_mt: Set(input.capacity_mt),
            ..Default::default()
        }
    }

    fn apply_changes(model: &mut ActiveModel, input: DealerBrandMappingChanges) {
        if let Some(dealer_id) = input.dealer_id {
            model.dealer_id = Set(dealer_id);
        }
        if let Some(brand_id) = input.brand_id {
            model.brand_id = Set(brand_id);
        }
        if let Some(capacity_mt) = input.capacity_mt {
            model.capacity_mt = Set(capacity_mt);
        }
    }
}
