use chrono::NaiveDate;

use crate::domain::{
    bulk::value_objects::{BulkScope, SCOPED_CONFIRMATION},
    common::entities::app_errors::CoreError,
    query::{
        descriptor::{FieldType, ResourceDescriptor},
        filter::{lower_bound, upper_bound},
        value_objects::{FilterValue, Predicate, parse_date},
    },
};

/// Fails unless `provided` is exactly `expected`.
pub fn ensure_confirmed(provided: Option<&str>, expected: &str) -> Result<(), CoreError> {
    match provided {
        Some(value) if value == expected => Ok(()),
        _ => Err(CoreError::ConfirmationRequired(format!(
            "Confirmation required: pass confirm={expected} to perform this deletion"
        ))),
    }
}

/// Validates the scope of a bulk deletion, then its confirmation, and returns
/// the predicate selecting the affected rows (`None` for the whole table).
pub fn guard_bulk_delete<C: Copy>(
    descriptor: &ResourceDescriptor<C>,
    scope: &BulkScope,
    confirm: Option<&str>,
) -> Result<Option<Predicate<C>>, CoreError> {
    match scope {
        BulkScope::Relation { segment, id } => {
            let predicate = descriptor.relation_predicate(segment, *id).ok_or_else(|| {
                CoreError::Invalid(format!(
                    "Unknown relation '{segment}' for {}",
                    descriptor.name
                ))
            })?;
            ensure_confirmed(confirm, SCOPED_CONFIRMATION)?;
            Ok(Some(predicate))
        }
        BulkScope::DateRange { start, end } => {
            let predicate = date_range_predicate(descriptor, start.as_deref(), end.as_deref())?;
            ensure_confirmed(confirm, SCOPED_CONFIRMATION)?;
            Ok(Some(predicate))
        }
        BulkScope::All => {
            ensure_confirmed(confirm, &descriptor.delete_all_token())?;
            Ok(None)
        }
    }
}

fn date_range_predicate<C: Copy>(
    descriptor: &ResourceDescriptor<C>,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Predicate<C>, CoreError> {
    let date_column = descriptor.date_column.ok_or_else(|| {
        CoreError::Invalid(format!(
            "{} cannot be deleted by date range",
            descriptor.name
        ))
    })?;

    let (Some(start), Some(end)) = (non_blank(start), non_blank(end)) else {
        return Err(CoreError::Invalid(
            "startDate and endDate are required".to_string(),
        ));
    };

    let invalid = || {
        CoreError::Invalid("startDate and endDate must be dates (YYYY-MM-DD)".to_string())
    };
    let first: NaiveDate = parse_date(start).ok_or_else(invalid)?;
    let last: NaiveDate = parse_date(end).ok_or_else(invalid)?;
    if first > last {
        return Err(CoreError::Invalid(
            "startDate must not be after endDate".to_string(),
        ));
    }

    // Date columns compare on calendar days; timestamp columns take the raw
    // bounds so a date-only end still covers its whole day.
    let (lower, upper) = match date_column.field_type {
        FieldType::Timestamp => (
            lower_bound(date_column.column, FieldType::Timestamp, start),
            upper_bound(date_column.column, FieldType::Timestamp, end),
        ),
        _ => (
            Some(Predicate::Gte(date_column.column, FilterValue::Date(first))),
            Some(Predicate::Lte(date_column.column, FilterValue::Date(last))),
        ),
    };

    match (lower, upper) {
        (Some(lower), Some(upper)) => Ok(Predicate::All(vec![lower, upper])),
        _ => Err(invalid()),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::descriptor::{DateColumn, RelationScope};

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Col {
        Id,
        UserId,
        ReportDate,
    }

    static DESCRIPTOR: ResourceDescriptor<Col> = ResourceDescriptor {
        name: "daily-visit-reports",
        label: "Daily visit report",
        primary_key: Col::Id,
        default_sort: Col::ReportDate,
        filters: &[],
        search: &[],
        sorts: &[],
        relations: &[RelationScope {
            segment: "user",
            column: Col::UserId,
        }],
        date_column: Some(DateColumn {
            column: Col::ReportDate,
            field_type: FieldType::Date,
        }),
    };

    fn date_range(start: Option<&str>, end: Option<&str>) -> BulkScope {
        BulkScope::DateRange {
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        }
    }

    #[test]
    fn test_relation_scope_requires_literal_true() {
        let scope = BulkScope::Relation {
            segment: "user".into(),
            id: 4,
        };
        for confirm in [None, Some("yes"), Some("TRUE"), Some("")] {
            assert!(matches!(
                guard_bulk_delete(&DESCRIPTOR, &scope, confirm),
                Err(CoreError::ConfirmationRequired(_))
            ));
        }
        assert_eq!(
            guard_bulk_delete(&DESCRIPTOR, &scope, Some("true")),
            Ok(Some(Predicate::Eq(Col::UserId, FilterValue::Integer(4))))
        );
    }

    #[test]
    fn test_date_range_validates_bounds_before_confirmation() {
        let missing_end = date_range(Some("2024-01-01"), None);
        assert!(matches!(
            guard_bulk_delete(&DESCRIPTOR, &missing_end, None),
            Err(CoreError::Invalid(_))
        ));

        let reversed = date_range(Some("2024-02-01"), Some("2024-01-01"));
        assert!(matches!(
            guard_bulk_delete(&DESCRIPTOR, &reversed, Some("true")),
            Err(CoreError::Invalid(_))
        ));

        let garbage = date_range(Some("yesterday"), Some("2024-01-01"));
        assert!(matches!(
            guard_bulk_delete(&DESCRIPTOR, &garbage, Some("true")),
            Err(CoreError::Invalid(_))
        ));

        let unconfirmed = date_range(Some("2024-01-01"), Some("2024-01-31"));
        assert!(matches!(
            guard_bulk_delete(&DESCRIPTOR, &unconfirmed, None),
            Err(CoreError::ConfirmationRequired(_))
        ));
    }

    #[test]
    fn test_confirmed_date_range_is_inclusive() {
        let scope = date_range(Some("2024-01-01"), Some("2024-01-31"));
        let predicate = guard_bulk_delete(&DESCRIPTOR, &scope, Some("true")).unwrap();
        assert_eq!(
            predicate,
            Some(Predicate::All(vec![
                Predicate::Gte(
                    Col::ReportDate,
                    FilterValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
                ),
                Predicate::Lte(
                    Col::ReportDate,
                    FilterValue::Date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
                ),
            ]))
        );
    }

    #[test]
    fn test_delete_all_requires_resource_token() {
        assert!(guard_bulk_delete(&DESCRIPTOR, &BulkScope::All, Some("true")).is_err());
        assert_eq!(
            guard_bulk_delete(
                &DESCRIPTOR,
                &BulkScope::All,
                Some("DELETE_ALL_DAILY_VISIT_REPORTS")
            ),
            Ok(None)
        );
    }
}
