//! Lowers a domain [`Predicate`] onto sea-orm conditions.
//!
//! Columns and values come from the resource's typed whitelist, and values are
//! always bound as parameters.

use sea_orm::{
    ColumnTrait, Condition, Order, Value,
    sea_query::{
        BinOper, Expr, SimpleExpr,
        extension::postgres::{PgBinOper, PgExpr},
    },
};

use crate::domain::query::{
    sort::SortDirection,
    value_objects::{FilterValue, Predicate},
};

pub fn to_condition<C: ColumnTrait>(predicate: &Predicate<C>) -> Condition {
    match predicate {
        Predicate::All(parts) => parts
            .iter()
            .fold(Condition::all(), |condition, part| condition.add(to_condition(part))),
        Predicate::Any(parts) => parts
            .iter()
            .fold(Condition::any(), |condition, part| condition.add(to_condition(part))),
        Predicate::Eq(column, value) => Condition::all().add(column.eq(to_value(value))),
        Predicate::Gte(column, value) => Condition::all().add(column.gte(to_value(value))),
        Predicate::Lte(column, value) => Condition::all().add(column.lte(to_value(value))),
        Predicate::Lt(column, value) => Condition::all().add(column.lt(to_value(value))),
        Predicate::ILike(column, pattern) => {
            Condition::all().add(Expr::col(column.as_column_ref()).ilike(pattern.as_str()))
        }
        Predicate::Overlaps(column, tags) => {
            Condition::all().add(array_op(*column, PgBinOper::Overlap, tags))
        }
        Predicate::ContainsAll(column, tags) => {
            Condition::all().add(array_op(*column, PgBinOper::Contains, tags))
        }
    }
}

fn array_op<C: ColumnTrait>(column: C, operator: PgBinOper, tags: &[String]) -> SimpleExpr {
    SimpleExpr::Binary(
        Box::new(Expr::col(column.as_column_ref()).into()),
        BinOper::PgOperator(operator),
        Box::new(SimpleExpr::Value(Value::from(tags.to_vec()))),
    )
}

fn to_value(value: &FilterValue) -> Value {
    match value {
        FilterValue::Text(text) => text.clone().into(),
        FilterValue::Integer(number) => (*number).into(),
        FilterValue::Float(number) => (*number).into(),
        FilterValue::Boolean(flag) => (*flag).into(),
        FilterValue::Date(date) => (*date).into(),
        FilterValue::Timestamp(timestamp) => (*timestamp).into(),
    }
}

pub fn to_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    use super::*;
    use crate::entity::{daily_visit_reports, dealers};

    fn dealer_sql(predicate: Predicate<dealers::Column>) -> String {
        dealers::Entity::find()
            .filter(to_condition(&predicate))
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn test_conjunction_of_comparisons() {
        let sql = daily_visit_reports::Entity::find()
            .filter(to_condition(&Predicate::All(vec![
                Predicate::Eq(
                    daily_visit_reports::Column::UserId,
                    FilterValue::Integer(3),
                ),
                Predicate::Gte(
                    daily_visit_reports::Column::ReportDate,
                    FilterValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
                ),
            ])))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""daily_visit_reports"."user_id" = 3"#), "{sql}");
        assert!(sql.contains(r#""daily_visit_reports"."report_date" >= '2024-01-01'"#), "{sql}");
        assert!(sql.contains(" AND "), "{sql}");
    }

    #[test]
    fn test_search_is_ilike_or() {
        let sql = dealer_sql(Predicate::Any(vec![
            Predicate::ILike(dealers::Column::Name, "%north%".into()),
            Predicate::ILike(dealers::Column::Address, "%north%".into()),
        ]));

        assert!(sql.contains(r#""dealers"."name" ILIKE '%north%'"#), "{sql}");
        assert!(sql.contains(" OR "), "{sql}");
    }

    #[test]
    fn test_array_modes_use_postgres_operators() {
        let tags = vec!["A".to_string(), "B".to_string()];

        let all = dealer_sql(Predicate::ContainsAll(dealers::Column::BrandSelling, tags.clone()));
        assert!(all.contains(r#""dealers"."brand_selling" @>"#), "{all}");

        let any = dealer_sql(Predicate::Overlaps(dealers::Column::BrandSelling, tags));
        assert!(any.contains(r#""dealers"."brand_selling" &&"#), "{any}");
    }
}
