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
    entity::dealers::{ActiveModel, Column, Entity, Model},
};

/// Dealers and sub-dealers. Creation and deletion go through the dealer
/// service so the remote geofence stays in step with the row.
pub struct Dealers;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDealer {
    pub user_id: Option<i32>,
    #[validate(length(min = 1, message = "type is required"))]
    #[serde(rename = "type")]
    pub dealer_type: String,
    pub parent_dealer_id: Option<i32>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "region is required"))]
    pub region: String,
    #[validate(length(min = 1, message = "area is required"))]
    pub area: String,
    #[validate(length(min = 7, max = 20, message = "phoneNo must be 7 to 20 characters"))]
    pub phone_no: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    pub pin_code: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,
    pub date_of_birth: Option<NaiveDate>,
    pub anniversary_date: Option<NaiveDate>,
    #[validate(range(min = 0.0, message = "totalPotential cannot be negative"))]
    pub total_potential: f64,
    #[validate(range(min = 0.0, message = "bestPotential cannot be negative"))]
    pub best_potential: f64,
    /// Brands the dealer currently sells, matched by the `brandSelling` filter.
    #[serde(default)]
    pub brand_selling: Vec<String>,
    pub feedbacks: String,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealerChanges {
    pub user_id: Option<i32>,
    #[validate(length(min = 1, message = "type is required"))]
    #[serde(rename = "type")]
    pub dealer_type: Option<String>,
    pub parent_dealer_id: Option<i32>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "region is required"))]
    pub region: Option<String>,
    #[validate(length(min = 1, message = "area is required"))]
    pub area: Option<String>,
    #[validate(length(min = 7, max = 20, message = "phoneNo must be 7 to 20 characters"))]
    pub phone_no: Option<String>,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: Option<String>,
    pub pin_code: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,
    pub date_of_birth: Option<NaiveDate>,
    pub anniversary_date: Option<NaiveDate>,
    #[validate(range(min = 0.0, message = "totalPotential cannot be negative"))]
    pub total_potential: Option<f64>,
    #[validate(range(min = 0.0, message = "bestPotential cannot be negative"))]
    pub best_potential: Option<f64>,
    pub brand_selling: Option<Vec<String>>,
    pub feedbacks: Option<String>,
    pub remarks: Option<String>,
}

static DESCRIPTOR: ResourceDescriptor<Column> = ResourceDescriptor {
    name: "dealers",
    label: "Dealer",
    primary_key: Column::Id,
    default_sort: Column::CreatedAt,
    filters: &[
        FilterRule::Exact {
            param: "userId",
            column: Column::UserId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "type",
            column: Column::DealerType,
            field_type: FieldType::Text,
        },
        FilterRule::Exact {
            param: "parentDealerId",
            column: Column::ParentDealerId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "region",
            column: Column::Region,
            field_type: FieldType::Text,
        },
        FilterRule::Exact {
            param: "area",
            column: Column::Area,
            field_type: FieldType::Text,
        },
        FilterRule::Exact {
            param: "pinCode",
            column: Column::PinCode,
            field_type: FieldType::Text,
        },
        FilterRule::Range {
            lower: "minTotalPotential",
            upper: "maxTotalPotential",
            column: Column::TotalPotential,
            field_type: FieldType::Float,
        },
        FilterRule::Range {
            lower: "startDate",
            upper: "endDate",
            column: Column::CreatedAt,
            field_type: FieldType::Timestamp,
        },
        FilterRule::Tags {
            param: "brandSelling",
            any_flag: "anyBrand",
            column: Column::BrandSelling,
        },
    ],
    search: &[Column::Name, Column::PhoneNo, Column::Address],
    sorts: &[
        SortKey {
            key: "name",
            column: Column::Name,
        },
        SortKey {
            key: "region",
            column: Column::Region,
        },
        SortKey {
            key: "area",
            column: Column::Area,
        },
        SortKey {
            key: "totalPotential",
            column: Column::TotalPotential,
        },
        SortKey {
            key: "bestPotential",
            column: Column::BestPotential,
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
            segment: "parent",
            column: Column::ParentDealerId,
        },
    ],
    date_column: Some(DateColumn {
        column: Column::CreatedAt,
        field_type: FieldType::Timestamp,
    }),
};

impl Resource for Dealers {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = NewDealer;
    type Update = DealerChanges;

    const RENAMED_FIELDS: &'static [(&'static str, &'static str)] = &[("dealer_type", "type")];

    fn descriptor() -> &'static ResourceDescriptor<Column> {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewDealer) -> ActiveModel {
        let now = generate_timestamp();
        ActiveModel {
            user_id: Set(input.user_id),
            dealer_type: Set(input.dealer_type),
            parent_dealer_id: Set(input.parent_dealer_id),
            name: Set(input.name),
            region: Set(input.region),
            area: Set(input.area),
            phone_no: Set(input.phone_no),
            address: Set(input.address),
            pin_code: Set(input.pin_code),
            latitude: Set(input.latitude),
            longitude: Set(input.longitude),
            date_of_birth: Set(input.date_of_birth),
            anniversary_date: Set(input.anniversary_date),
            total_potential: Set(input.total_potential),
            best_potential: Set(input.best_potential),
            brand_selling: Set(input.brand_selling),
            feedbacks: Set(input.feedbacks),
            remarks: Set(input.remarks),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn apply_changes(model: &mut ActiveModel, input: DealerChanges) {
        if let Some(user_id) = input.user_id {
            model.user_id = Set(Some(user_id));
        }
        if let Some(dealer_type) = input.dealer_type {
            model.dealer_type = Set(dealer_type);
        }
        if let Some(parent_dealer_id) = input.parent_dealer_id {
            model.parent_dealer_id = Set(Some(parent_dealer_id));
        }
        if let Some(name) = input.name {
            model.name = Set(name);
        }
        if let Some(region) = input.region {
            model.region = Set(region);
        }
        if let Some(area) = input.area {
            model.area = Set(area);
        }
        if let Some(phone_no) = input.phone_no {
            model.phone_no = Set(phone_no);
        }
        if let Some(address) = input.address {
            model.address = Set(address);
        }
        if let Some(pin_code) = input.pin_code {
            model.pin_code = Set(Some(pin_code));
        }
        if let Some(latitude) = input.latitude {
            model.latitude = Set(Some(latitude));
        }
        if let Some(longitude) = input.longitude {
            model.longitude = Set(Some(longitude));
        }
        if let Some(date_of_birth) = input.date_of_birth {
            model.date_of_birth = Set(Some(date_of_birth));
        }
        if let Some(anniversary_date) = input.anniversary_date {
            model.anniversary_date = Set(Some(anniversary_date));
        }
        if let Some(total_potential) = input.total_potential {
            model.total_potential = Set(total_potential);
        }
        if let Some(best_potential) = input.best_potential {
            model.best_potential = Set(best_potential);
        }
        if let Some(brand_selling) = input.brand_selling {
            model.brand_selling = Set(brand_selling);
        }
        if let Some(feedbacks) = input.feedbacks {
            model.feedbacks = Set(feedbacks);
        }
        if let Some(remarks) = input.remarks {
            model.remarks = Set(Some(remarks));
        }
        model.updated_at = Set(generate_timestamp());
    }
}
