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
    entity::daily_visit_reports::{ActiveModel, Column, Entity, Model},
};

/// Field visits logged by salesmen, one per dealer visit.
pub struct DailyVisitReports;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDailyVisitReport {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: i32,
    pub dealer_id: Option<i32>,
    pub report_date: NaiveDate,
    #[validate(length(min = 1, message = "dealerType is required"))]
    pub dealer_type: String,
    pub dealer_name: Option<String>,
    pub sub_dealer_name: Option<String>,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "longitude must be between -180 and 180"))]
    pub longitude: f64,
    #[validate(length(min = 1, message = "visitType is required"))]
    pub visit_type: String,
    pub dealer_total_potential: f64,
    pub dealer_best_potential: f64,
    #[serde(default)]
    pub brand_selling: Vec<String>,
    pub contact_person: Option<String>,
    pub contact_person_phone_no: Option<String>,
    #[validate(range(min = 0.0, message = "todayOrderMt cannot be negative"))]
    pub today_order_mt: f64,
    #[validate(range(min = 0.0, message = "todayCollectionRupees cannot be negative"))]
    pub today_collection_rupees: f64,
    pub overdue_amount: Option<f64>,
    pub feedbacks: String,
    pub solutions_as_per_salesperson: Option<String>,
    pub any_remarks: Option<String>,
    pub check_in_time: DateTime<FixedOffset>,
    pub check_out_time: Option<DateTime<FixedOffset>>,
    #[validate(url(message = "inTimeImageUrl must be a valid URL"))]
    pub in_time_image_url: Option<String>,
    #[validate(url(message = "outTimeImageUrl must be a valid URL"))]
    pub out_time_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyVisitReportChanges {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: Option<i32>,
    pub dealer_id: Option<i32>,
    pub report_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "dealerType is required"))]
    pub dealer_type: Option<String>,
    pub dealer_name: Option<String>,
    pub sub_dealer_name: Option<String>,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,
    #[validate(length(min = 1, message = "visitType is required"))]
    pub visit_type: Option<String>,
    pub dealer_total_potential: Option<f64>,
    pub dealer_best_potential: Option<f64>,
    pub brand_selling: Option<Vec<String>>,
    pub contact_person: Option<String>,
    pub contact_person_phone_no: Option<String>,
    #[validate(range(min = 0.0, message = "todayOrderMt cannot be negative"))]
    pub today_order_mt: Option<f64>,
    #[validate(range(min = 0.0, message = "todayCollectionRupees cannot be negative"))]
    pub today_collection_rupees: Option<f64>,
    pub overdue_amount: Option<f64>,
    pub feedbacks: Option<String>,
    pub solutions_as_per_salesperson: Option<String>,
    pub any_remarks: Option<String>,
    pub check_in_time: Option<DateTime<FixedOffset>>,
    pub check_out_time: Option<DateTime<FixedOffset>>,
    #[validate(url(message = "inTimeImageUrl must be a valid URL"))]
    pub in_time_image_url: Option<String>,
    #[validate(url(message = "outTimeImageUrl must be a valid URL"))]
    pub out_time_image_url: Option<String>,
}

static DESCRIPTOR: ResourceDescriptor<Column> = ResourceDescriptor {
    name: "daily-visit-reports",
    label: "Daily visit report",
    primary_key: Column::Id,
    default_sort: Column::ReportDate,
    filters: &[
        FilterRule::Exact {
            param: "userId",
            column: Column::UserId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "dealerId",
            column: Column::DealerId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "dealerType",
            column: Column::DealerType,
            field_type: FieldType::Text,
        },
        FilterRule::Exact {
            param: "visitType",
            column: Column::VisitType,
            field_type: FieldType::Text,
        },
        FilterRule::Range {
            lower: "startDate",
            upper: "endDate",
            column: Column::ReportDate,
            field_type: FieldType::Date,
        },
        FilterRule::Range {
            lower: "minOrderMt",
            upper: "maxOrderMt",
            column: Column::TodayOrderMt,
            field_type: FieldType::Float,
        },
        FilterRule::Tags {
            param: "brandSelling",
            any_flag: "anyBrand",
            column: Column::BrandSelling,
        },
    ],
    search: &[Column::DealerName, Column::SubDealerName, Column::Location, Column::ContactPerson],
    sorts: &[
        SortKey {
            key: "reportDate",
            column: Column::ReportDate,
        },
        SortKey {
            key: "todayOrderMt",
            column: Column::TodayOrderMt,
        },
        SortKey {
            key: "todayCollectionRupees",
            column: Column::TodayCollectionRupees,
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
            segment: "dealer",
            column: Column::DealerId,
        },
    ],
    date_column: Some(DateColumn {
        column: Column::ReportDate,
        field_type: FieldType::Date,
    }),
};

impl Resource for DailyVisitReports {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = NewDailyVisitReport;
    type Update = DailyVisitReportChanges;

    fn descriptor() -> &'static ResourceDescriptor<Column> {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewDailyVisitReport) -> ActiveModel {
        let now = generate_timestamp();
        ActiveModel {
            user_id: Set(input.user_id),
            dealer_id: Set(input.dealer_id),
            report_date: Set(input.report_date),
            dealer_type: Set(input.dealer_type),
            dealer_name: Set(input.dealer_name),
            sub_dealer_name: Set(input.sub_dealer_name),
            location: Set(input.location),
            latitude: Set(input.latitude),
            longitude: Set(input.longitude),
            visit_type: Set(input.visit_type),
            dealer_total_potential: Set(input.dealer_total_potential),
            dealer_best_potential: Set(input.dealer_best_potential),
            brand_selling: Set(input.brand_selling),
            contact_person: Set(input.contact_person),
            contact_person_phone_no: Set(input.contact_person_phone_no),
            today_order_mt: Set(input.today_order_mt),
            today_collection_rupees: Set(input.today_collection_rupees),
            overdue_amount: Set(input.overdue_amount),
            feedbacks: Set(input.feedbacks),
            solutions_as_per_salesperson: Set(input.solutions_as_per_salesperson),
            any_remarks: Set(input.any_remarks),
            check_in_time: Set(input.check_in_time),
            check_out_time: Set(input.check_out_time),
            in_time_image_url: Set(input.in_time_image_url),
            out_time_image_url: Set(input.out_time_image_url),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn apply_changes(model: &mut ActiveModel, input: DailyVisitReportChanges) {
        if let Some(user_id) = input.user_id {
            model.user_id = Set(user_id);
        }
        if let Some(dealer_id) = input.dealer_id {
            model.dealer_id = Set(Some(dealer_id));
        }
        if let Some(report_date) = input.report_date {
            model.report_date = Set(report_date);
        }
        if let Some(dealer_type) = input.dealer_type {
            model.dealer_type = Set(dealer_type);
        }
        if let Some(dealer_name) = input.dealer_name {
            model.dealer_name = Set(Some(dealer_name));
        }
        if let Some(sub_dealer_name) = input.sub_dealer_name {
            model.sub_dealer_name = Set(Some(sub_dealer_name));
        }
        if let Some(location) = input.location {
            model.location = Set(location);
        }
        if let Some(latitude) = input.latitude {
            model.latitude = Set(latitude);
        }
        if let Some(longitude) = input.longitude {
            model.longitude = Set(longitude);
        }
        if let Some(visit_type) = input.visit_type {
            model.visit_type = Set(visit_type);
        }
        if let Some(dealer_total_potential) = input.dealer_total_potential {
            model.dealer_total_potential = Set(dealer_total_potential);
        }
        if let Some(dealer_best_potential) = input.dealer_best_potential {
            model.dealer_best_potential = Set(dealer_best_potential);
        }
        if let Some(brand_selling) = input.brand_selling {
            model.brand_selling = Set(brand_selling);
        }
        if let Some(contact_person) = input.contact_person {
            model.contact_person = Set(Some(contact_person));
        }
        if let Some(contact_person_phone_no) = input.contact_person_phone_no {
            model.contact_person_phone_no = Set(Some(contact_person_phone_no));
        }
        if let Some(today_order_mt) = input.today_order_mt {
            model.today_order_mt = Set(today_order_mt);
        }
        if let Some(today_collection_rupees) = input.today_collection_rupees {
            model.today_collection_rupees = Set(today_collection_rupees);
        }
        if let Some(overdue_amount) = input.overdue_amount {
            model.overdue_amount = Set(Some(overdue_amount));
        }
        if let Some(feedbacks) = input.feedbacks {
            model.feedbacks = Set(feedbacks);
        }
        if let Some(solutions_as_per_salesperson) = input.solutions_as_per_salesperson {
            model.solutions_as_per_salesperson = Set(Some(solutions_as_per_salesperson));
        }
        if let Some(any_remarks) = input.any_remarks {
            model.any_remarks = Set(Some(any_remarks));
        }
        if let Some(check_in_time) = input.check_in_time {
            model.check_in_time = Set(check_in_time);
        }
        if let Some(check_out_time) = input.check_out_time {
            model.check_out_time = Set(Some(check_out_time));
        }
        if let Some(in_time_image_url) = input.in_time_image_url {
            model.in_time_image_url = Set(Some(in_time_image_url));
        }
        if let Some(out_time_image_url) = input.out_time_image_url {
            model.out_time_image_url = Set(Some(out_time_image_url));
        }
        model.updated_at = Set(generate_timestamp());
    }
}
