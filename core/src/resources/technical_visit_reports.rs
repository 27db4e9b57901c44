use chrono::{DateTime, FixedOffset, NaiveDate};
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
    entity::technical_visit_reports::{ActiveModel, Column, Entity, Model},
};

pub struct TechnicalVisitReports;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTechnicalVisitReport {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: i32,
    pub report_date: NaiveDate,
    #[validate(length(min = 1, message = "visitType is required"))]
    pub visit_type: String,
    #[validate(length(min = 1, message = "siteNameConcernedPerson is required"))]
    pub site_name_concerned_person: String,
    #[validate(length(min = 7, max = 20, message = "phoneNo must be 7 to 20 characters"))]
    pub phone_no: String,
    #[validate(email(message = "emailId must be a valid address"))]
    pub email_id: Option<String>,
    pub client_remarks: String,
    pub salesperson_remarks: String,
    pub check_in_time: DateTime<FixedOffset>,
    pub check_out_time: Option<DateTime<FixedOffset>>,
    pub site_visit_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalVisitReportChanges {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: Option<i32>,
    pub report_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "visitType is required"))]
    pub visit_type: Option<String>,
    #[validate(length(min = 1, message = "siteNameConcernedPerson is required"))]
    pub site_name_concerned_person: Option<String>,
    #[validate(length(min = 7, max = 20, message = "phoneNo must be 7 to 20 characters"))]
    pub phone_no: Option<String>,
    #[validate(email(message = "emailId must be a valid address"))]
    pub email_id: Option<String>,
    pub client_remarks: Option<String>,
    pub salesperson_remarks: Option<String>,
    pub check_in_time: Option<DateTime<FixedOffset>>,
    pub check_out_time: Option<DateTime<FixedOffset>>,
    pub site_visit_type: Option<String>,
}

static DESCRIPTOR: ResourceDescriptor<Column> = ResourceDescriptor {
    name: "technical-visit-reports",
    label: "Technical visit report",
    primary_key: Column::Id,
    default_sort: Column::ReportDate,
    filters: &[
        FilterRule::Exact {
            param: "userId",
            column: Column::UserId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "visitType",
            column: Column::VisitType,
            field_type: FieldType::Text,
        },
        FilterRule::Exact {
            param: "siteVisitType",
            column: Column::SiteVisitType,
            field_type: FieldType::Text,
        },
        FilterRule::Range {
            lower: "startDate",
            upper: "endDate",
            column: Column::ReportDate,
            field_type: FieldType::Date,
        },
    ],
    search: &[Column::SiteNameConcernedPerson, Column::ClientRemarks, Column::SalespersonRemarks],
    sorts: &[
        SortKey {
            key: "reportDate",
            column: Column::ReportDate,
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
        column: Column::ReportDate,
        field_type: FieldType::Date,
    }),
};

impl Resource for TechnicalVisitReports {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = NewTechnicalVisitReport;
    type Update = TechnicalVisitReportChanges;

    fn descriptor() -> &'static ResourceDescriptor<Column> {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewTechnicalVisitReport) -> ActiveModel {
        let now = generate_timestamp();
        ActiveModel {
            user_id: Set(input.user_id),
            report_date: Set(input.report_date),
            visit_type: Set(input.visit_type),
            site_name_concerned_person: Set(input.site_name_concerned_person),
            phone_no: Set(input.phone_no),
            email_id: Set(input.email_id),
            client_remarks: Set(input.client_remarks),
            salesperson_remarks: Set(input.salesperson_remarks),
            check_in_time: Set(input.check_in_time),
            check_out_time: Set(input.check_out_time),
            site_visit_type: Set(input.site_visit_type),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn apply_changes(model: &mut ActiveModel, input: TechnicalVisitReportChanges) {
        if let Some(user_id) = input.user_id {
            model.user_id = Set(user_id);
        }
        if let Some(report_date) = input.report_date {
            model.report_date = Set(report_date);
        }
        if let Some(visit_type) = input.visit_type {
            model.visit_type = Set(visit_type);
        }
        if let Some(site_name_concerned_person) = input.site_name_concerned_person {
            model.site_name_concerned_person = Set(site_name_concerned_person);
        }
        if let Some(phone_no) = input.phone_no {
            model.phone_no = Set(phone_no);
        }
        if let Some(email_id) = input.email_id {
            model.email_id = Set(Some(email_id));
        }
        if let Some(client_remarks) = input.client_remarks {
            model.client_remarks = Set(client_remarks);
        }
        if let Some(salesperson_remarks) = input.salesperson_remarks {
            model.salesperson_remarks = Set(salesperson_remarks);
        }
        if let Some(check_in_time) = input.check_in_time {
            model.check_in_time = Set(check_in_time);
        }
        if let Some(check_out_time) = input.check_out_time {
            model.check_out_time = Set(Some(check_out_time));
        }
        if let Some(site_visit_type) = input.site_visit_type {
            model.site_visit_type = Set(Some(site_visit_type));
        }
        model.updated_at = Set(generate_timestamp());
    }
}
