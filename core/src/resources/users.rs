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
    entity::users::{ActiveModel, Column, Entity, Model},
};

pub struct Users;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(range(min = 1, message = "companyId must be a positive id"))]
    pub company_id: i32,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
    pub phone_number: Option<String>,
    pub region: Option<String>,
    pub area: Option<String>,
    pub salesman_login_id: Option<String>,
    pub status: Option<String>,
    pub reports_to_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserChanges {
    #[validate(range(min = 1, message = "companyId must be a positive id"))]
    pub company_id: Option<i32>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(length(min = 1, message = "role is required"))]
    pub role: Option<String>,
    pub phone_number: Option<String>,
    pub region: Option<String>,
    pub area: Option<String>,
    pub salesman_login_id: Option<String>,
    pub status: Option<String>,
    pub reports_to_id: Option<i32>,
}

static DESCRIPTOR: ResourceDescriptor<Column> = ResourceDescriptor {
    name: "users",
    label: "User",
    primary_key: Column::Id,
    default_sort: Column::CreatedAt,
    filters: &[
        FilterRule::Exact {
            param: "companyId",
            column: Column::CompanyId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "role",
            column: Column::Role,
            field_type: FieldType::Text,
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
            param: "status",
            column: Column::Status,
            field_type: FieldType::Text,
        },
        FilterRule::Exact {
            param: "reportsToId",
            column: Column::ReportsToId,
            field_type: FieldType::Integer,
        },
        FilterRule::Range {
            lower: "startDate",
            upper: "endDate",
            column: Column::CreatedAt,
            field_type: FieldType::Timestamp,
        },
    ],
    search: &[Column::FirstName, Column::LastName, Column::Email, Column::SalesmanLoginId],
    sorts: &[
        SortKey {
            key: "email",
            column: Column::Email,
        },
        SortKey {
            key: "firstName",
            column: Column::FirstName,
        },
        SortKey {
            key: "lastName",
            column: Column::LastName,
        },
        SortKey {
            key: "createdAt",
            column: Column::CreatedAt,
        },
    ],
    relations: &[
        RelationScope {
            segment: "company",
            column: Column::CompanyId,
        },
        RelationScope {
            segment: "manager",
            column: Column::ReportsToId,
        },
    ],
    date_column: Some(DateColumn {
        column: Column::CreatedAt,
        field_type: FieldType::Timestamp,
    }),
};

impl Resource for Users {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = NewUser;
    type Update = UserChanges;

    fn descriptor() -> &'static ResourceDescriptor<Column> {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewUser) -> ActiveModel {
        let now = generate_timestamp();
        ActiveModel {
            company_id: Set(input.company_id),
            email: Set(input.email),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            role: Set(input.role),
            phone_number: Set(input.phone_number),
            region: Set(input.region),
            area: Set(input.area),
            salesman_login_id: Set(input.salesman_login_id),
            status: Set(input.status.unwrap_or_else(|| "active".to_string())),
            reports_to_id: Set(input.reports_to_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn apply_changes(model: &mut ActiveModel, input: UserChanges) {
        if let Some(company_id) = input.company_id {
            model.company_id = Set(company_id);
        }
        if let Some(email) = input.email {
            model.email = Set(email);
        }
        if let Some(first_name) = input.first_name {
            model.first_name = Set(Some(first_name));
        }
        if let Some(last_name) = input.last_name {
            model.last_name = Set(Some(last_name));
        }
        if let Some(role) = input.role {
            model.role = Set(role);
        }
        if let Some(phone_number) = input.phone_number {
            model.phone_number = Set(Some(phone_number));
        }
        if let Some(region) = input.region {
            model.region = Set(Some(region));
        }
        if let Some(area) = input.area {
            model.area = Set(Some(area));
        }
        if let Some(salesman_login_id) = input.salesman_login_id {
            model.salesman_login_id = Set(Some(salesman_login_id));
        }
        if let Some(status) = input.status {
            model.status = Set(status);
        }
        if let Some(reports_to_id) = input.reports_to_id {
            model.reports_to_id = Set(Some(reports_to_id));
        }
        model.updated_at = Set(generate_timestamp());
    }
}
