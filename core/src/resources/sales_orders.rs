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
    entity::sales_orders::{ActiveModel, Column, Entity, Model},
};

pub struct SalesOrders;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSalesOrder {
    #[validate(range(min = 1, message = "salesmanId must be a positive id"))]
    pub salesman_id: i32,
    #[validate(range(min = 1, message = "dealerId must be a positive id"))]
    pub dealer_id: i32,
    #[validate(range(min = 0.0, message = "quantity cannot be negative"))]
    pub quantity: f64,
    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,
    #[validate(range(min = 0.0, message = "orderTotal cannot be negative"))]
    pub order_total: f64,
    #[validate(range(min = 0.0, message = "advancePayment cannot be negative"))]
    pub advance_payment: f64,
    #[validate(range(min = 0.0, message = "pendingPayment cannot be negative"))]
    pub pending_payment: f64,
    pub estimated_delivery: NaiveDate,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderChanges {
    #[validate(range(min = 1, message = "salesmanId must be a positive id"))]
    pub salesman_id: Option<i32>,
    #[validate(range(min = 1, message = "dealerId must be a positive id"))]
    pub dealer_id: Option<i32>,
    #[validate(range(min = 0.0, message = "quantity cannot be negative"))]
    pub quantity: Option<f64>,
    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: Option<String>,
    #[validate(range(min = 0.0, message = "orderTotal cannot be negative"))]
    pub order_total: Option<f64>,
    #[validate(range(min = 0.0, message = "advancePayment cannot be negative"))]
    pub advance_payment: Option<f64>,
    #[validate(range(min = 0.0, message = "pendingPayment cannot be negative"))]
    pub pending_payment: Option<f64>,
    pub estimated_delivery: Option<NaiveDate>,
    pub remarks: Option<String>,
}

// The `user` relation scopes on the salesman who booked the order.
static DESCRIPTOR: ResourceDescriptor<Column> = ResourceDescriptor {
    name: "sales-orders",
    label: "Sales order",
    primary_key: Column::Id,
    default_sort: Column::CreatedAt,
    filters: &[
        FilterRule::Exact {
            param: "salesmanId",
            column: Column::SalesmanId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "dealerId",
            column: Column::DealerId,
            field_type: FieldType::Integer,
        },
        FilterRule::Exact {
            param: "unit",
            column: Column::Unit,
            field_type: FieldType::Text,
        },
        FilterRule::Range {
            lower: "minOrderTotal",
            upper: "maxOrderTotal",
            column: Column::OrderTotal,
            field_type: FieldType::Float,
        },
        FilterRule::Range {
            lower: "startDate",
            upper: "endDate",
            column: Column::CreatedAt,
            field_type: FieldType::Timestamp,
        },
        FilterRule::Range {
            lower: "deliveryFrom",
            upper: "deliveryTo",
            column: Column::EstimatedDelivery,
            field_type: FieldType::Date,
        },
    ],
    search: &[Column::Remarks],
    sorts: &[
        SortKey {
            key: "orderTotal",
            column: Column::OrderTotal,
        },
        SortKey {
            key: "estimatedDelivery",
            column: Column::EstimatedDelivery,
        },
        SortKey {
            key: "createdAt",
            column: Column::CreatedAt,
        },
    ],
    relations: &[
        RelationScope {
            segment: "user",
            column: Column::SalesmanId,
        },
        RelationScope {
            segment: "dealer",
            column: Column::DealerId,
        },
    ],
    date_column: Some(DateColumn {
        column: Column::CreatedAt,
        field_type: FieldType::Timestamp,
    }),
};

impl Resource for SalesOrders {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = NewSalesOrder;
    type Update = SalesOrderChanges;

    fn descriptor() -> &'static ResourceDescriptor<Column> {
        &DESCRIPTOR
    }

    fn new_active_model(input: NewSalesOrder) -> ActiveModel {
        let now = generate_timestamp();
        ActiveModel {
            salesman_id: Set(input.salesman_id),
            dealer_id: Set(input.dealer_id),
            quantity: Set(input.quantity),
            unit: Set(input.unit),
            order_total: Set(input.order_total),
            advance_payment: Set(input.advance_payment),
            pending_payment: Set(input.pending_payment),
            estimated_delivery: Set(input.estimated_delivery),
            remarks: Set(input.remarks),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn apply_changes(model: &mut ActiveModel, input: SalesOrderChanges) {
        if let Some(salesman_id) = input.salesman_id {
            model.salesman_id = Set(salesman_id);
        }
        if let Some(dealer_id) = input.dealer_id {
            model.dealer_id = Set(dealer_id);
        }
        if let Some(quantity) = input.quantity {
            model.quantity = Set(quantity);
        }
        if let Some(unit) = input.unit {
            model.unit = Set(unit);
        }
        if let Some(order_total) = input.order_total {
            model.order_total = Set(order_total);
        }
        if let Some(advance_payment) = input.advance_payment {
            model.advance_payment = Set(advance_payment);
        }
        if let Some(pending_payment) = input.pending_payment {
            model.pending_payment = Set(pending_payment);
        }
        if let Some(estimated_delivery) = input.estimated_delivery {
            model.estimated_delivery = Set(estimated_delivery);
        }
        if let Some(remarks) = input.remarks {
            model.remarks = Set(Some(remarks));
        }
        model.updated_at = Set(generate_timestamp());
    }
}
