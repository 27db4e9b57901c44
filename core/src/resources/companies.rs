use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    domain::{
        common::generate_timestamp,
        query::descriptor::{DateColumn, FieldType, FilterRule, ResourceDescriptor, SortKey},
        resource::ports::Resource,
    },
    entity::companies::{ActiveModel, Column, Entity, Model},
};

pub struct Companies;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    #[validate(length(min = 1, message = "companyName is required"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "officeAddress is required"))]
    pub office_address: String,
    #[serde(default)]
    pub is_head_office: bool,
    #[validate(length(min = 7, max = 20, message = "phoneNumber must be 7 to 20 characters"))]
    pub phone_number: String,
    pub region: Option<String>,
    pub area: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyChanges {
    #[validate(length(min = 1, message = "companyName is required"))]
    pub company_name: Option<String>,
    #[validate(length(min = 1, message = "officeAddress is required"))]
    pub office_address: Option<String>,
    pub is_head_office: Option<bool>,
    #[validate(length(min = 7, max = 20, message = "phoneNumber must be 7 to 20 characters"))]
    pub phone_number: Option<String>,
    pub region: Option<String>,
    pub area: Option<String>,
}

static DESCRIPTOR: ResourceDescriptor<Column> = ResourceDescriptor {
    name: "companies",
    label: "Company",
    primary_key: Column::Id,
    default_sort: Column::CreatedAt,
    filters: &[
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
            param: "isHeadOffice",
            column: Column::IsHeadOffice,
            field_type: FieldType::Boolean,
        },
        FilterRule::Range {
            lower: "startDate",
            upper: "endDate",
            column: Column::CreatedAt,
            field_type: FieldType::Timestamp,
        },
    ],
    search: &[Column::CompanyName, Column::OfficeAddress],
    sorts: &[
        SortKey {
            key: "companyName",
            column: Column::CompanyName,
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
    relations: &[],
    date_column: Some(DateColumn {
        column: Column::CreatedAt,
        field_type: FieldType::Timestamp,
    }),
};

impl Resource for Companies {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = NewCompany;
    type Update = CompanyChanges;

    fn descriptor() -> &'static ResourceDescriptor<Column> {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewCompany) -> ActiveModel {
        let now = generate_timestamp();
        ActiveModel {
            company_name: Set(input.company_name),
            office_address: Set(input.office_address),
            is_head_office: Set(input.is_head_office),
            phone_number: Set(input.phone_number),
            region: Set(input.region),
            area: Set(input.area),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn apply_changes(model: &mut ActiveModel, input: CompanyChanges) {
        if let Some(company_name) = input.company_name {
            model.company_name = Set(company_name);
        }
        if let Some(office_address) = input.office_address {
            model.office_address = Set(office_address);
        }
        if let Some(is_head_office) = input.is_head_office {
            model.is_head_office = Set(is_head_office);
        }
        if let Some(phone_number) = input.phone_number {
            model.phone_number = Set(phone_number);
        }
        if let Some(region) = input.region {
            model.region = Set(Some(region));
        }
        if let Some(area) = input.area {
            model.area = Set(Some(area));
        }
        model.updated_at = Set(generate_timestamp());
    }
}
