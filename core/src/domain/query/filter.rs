//! Translates query-string parameters into a [`Predicate`] over a resource's
//! whitelisted columns.
//!
//! Unknown parameters are ignored. A recognised parameter whose value does not
//! coerce to the column type is skipped rather than failing the request.

use tracing::debug;

use super::descriptor::{FieldType, FilterRule, ResourceDescriptor};
use super::value_objects::{
    Bound, FilterValue, Predicate, RawQuery, contains_pattern, is_date_only, parse_timestamp,
};

pub const SEARCH_PARAM: &str = "search";

pub fn build_filter<C: Copy>(
    descriptor: &ResourceDescriptor<C>,
    raw: &RawQuery,
) -> Option<Predicate<C>> {
    let mut predicates = Vec::new();

    for rule in descriptor.filters {
        match *rule {
            FilterRule::Exact {
                param,
                column,
                field_type,
            } => {
                if let Some(value) = raw.get(param) {
                    match field_type.coerce(value) {
                        Some(value) => predicates.push(Predicate::Eq(column, value)),
                        None => debug!(param, value, "skipping filter with unparsable value"),
                    }
                }
            }
            FilterRule::Range {
                lower,
                upper,
                column,
                field_type,
            } => {
                if let Some(value) = raw.get(lower) {
                    match lower_bound(column, field_type, value) {
                        Some(predicate) => predicates.push(predicate),
                        None => debug!(param = lower, value, "skipping unparsable lower bound"),
                    }
                }
                if let Some(value) = raw.get(upper) {
                    match upper_bound(column, field_type, value) {
                        Some(predicate) => predicates.push(predicate),
                        None => debug!(param = upper, value, "skipping unparsable upper bound"),
                    }
                }
            }
            FilterRule::Tags {
                param,
                any_flag,
                column,
            } => {
                let tags = raw.list(param);
                if !tags.is_empty() {
                    if raw.is_true(any_flag) {
                        predicates.push(Predicate::Overlaps(column, tags));
                    } else {
                        predicates.push(Predicate::ContainsAll(column, tags));
                    }
                }
            }
        }
    }

    if let Some(needle) = raw.get(SEARCH_PARAM) {
        let pattern = contains_pattern(needle);
        let matches = descriptor
            .search
            .iter()
            .map(|column| Predicate::ILike(*column, pattern.clone()))
            .collect();
        if let Some(search) = Predicate::any(matches) {
            predicates.push(search);
        }
    }

    Predicate::all(predicates)
}

pub fn lower_bound<C>(column: C, field_type: FieldType, raw: &str) -> Option<Predicate<C>> {
    let value = match field_type {
        FieldType::Timestamp => FilterValue::Timestamp(parse_timestamp(raw, Bound::Lower)?),
        other => other.coerce(raw)?,
    };
    Some(Predicate::Gte(column, value))
}

/// Inclusive upper bound. A date-only value on a timestamp column covers the
/// whole day.
pub fn upper_bound<C>(column: C, field_type: FieldType, raw: &str) -> Option<Predicate<C>> {
    match field_type {
        FieldType::Timestamp => {
            let value = FilterValue::Timestamp(parse_timestamp(raw, Bound::Upper)?);
            if is_date_only(raw) {
                Some(Predicate::Lt(column, value))
            } else {
                Some(Predicate::Lte(column, value))
            }
        }
        other => Some(Predicate::Lte(column, other.coerce(raw)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::descriptor::{FieldType, FilterRule, ResourceDescriptor};
    use chrono::NaiveDate;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Col {
        Id,
        UserId,
        Region,
        Area,
        Name,
        Rating,
        ReportDate,
        CreatedAt,
        BrandSelling,
    }

    static DESCRIPTOR: ResourceDescriptor<Col> = ResourceDescriptor {
        name: "test-rows",
        label: "Test row",
        primary_key: Col::Id,
        default_sort: Col::CreatedAt,
        filters: &[
            FilterRule::Exact {
                param: "userId",
                column: Col::UserId,
                field_type: FieldType::Integer,
            },
            FilterRule::Exact {
                param: "region",
                column: Col::Region,
                field_type: FieldType::Text,
            },
            FilterRule::Range {
                lower: "minRating",
                upper: "maxRating",
                column: Col::Rating,
                field_type: FieldType::Integer,
            },
            FilterRule::Range {
                lower: "startDate",
                upper: "endDate",
                column: Col::ReportDate,
                field_type: FieldType::Date,
            },
            FilterRule::Range {
                lower: "createdFrom",
                upper: "createdTo",
                column: Col::CreatedAt,
                field_type: FieldType::Timestamp,
            },
            FilterRule::Tags {
                param: "brandSelling",
                any_flag: "anyBrand",
                column: Col::BrandSelling,
            },
        ],
        search: &[Col::Name, Col::Area],
        sorts: &[],
        relations: &[],
        date_column: None,
    };

    fn build(raw: RawQuery) -> Option<Predicate<Col>> {
        build_filter(&DESCRIPTOR, &raw)
    }

    #[test]
    fn test_no_recognised_params_yields_no_predicate() {
        let raw = RawQuery::new()
            .with("unknownColumn", "x")
            .with("page", "2")
            .with("region", "");
        assert_eq!(build(raw), None);
    }

    #[test]
    fn test_single_exact_filter_is_not_wrapped() {
        let raw = RawQuery::new().with("region", "R1");
        assert_eq!(
            build(raw),
            Some(Predicate::Eq(Col::Region, FilterValue::Text("R1".into())))
        );
    }

    #[test]
    fn test_unparsable_numeric_filter_is_skipped() {
        let raw = RawQuery::new().with("userId", "abc").with("region", "R1");
        assert_eq!(
            build(raw),
            Some(Predicate::Eq(Col::Region, FilterValue::Text("R1".into())))
        );
    }

    #[test]
    fn test_range_bounds_are_independent() {
        let only_lower = build(RawQuery::new().with("minRating", "3"));
        assert_eq!(
            only_lower,
            Some(Predicate::Gte(Col::Rating, FilterValue::Integer(3)))
        );

        let only_upper = build(RawQuery::new().with("endDate", "2024-01-31"));
        assert_eq!(
            only_upper,
            Some(Predicate::Lte(
                Col::ReportDate,
                FilterValue::Date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
            ))
        );

        let both = build(RawQuery::new().with("minRating", "2").with("maxRating", "4"));
        assert!(matches!(both, Some(Predicate::All(parts)) if parts.len() == 2));
    }

    #[test]
    fn test_date_only_upper_bound_on_timestamp_is_exclusive_next_day() {
        let predicate = build(RawQuery::new().with("createdTo", "2024-01-31"));
        match predicate {
            Some(Predicate::Lt(Col::CreatedAt, FilterValue::Timestamp(ts))) => {
                assert_eq!(ts.to_rfc3339(), "2024-02-01T00:00:00+00:00");
            }
            other => panic!("unexpected predicate: {other:?}"),
        }
    }

    #[test]
    fn test_tags_default_to_contains_all() {
        let predicate = build(RawQuery::new().with("brandSelling", "A,B"));
        assert_eq!(
            predicate,
            Some(Predicate::ContainsAll(
                Col::BrandSelling,
                vec!["A".to_string(), "B".to_string()]
            ))
        );
    }

    #[test]
    fn test_tags_any_mode_uses_overlap() {
        let predicate = build(
            RawQuery::new()
                .with("brandSelling", "A")
                .with("brandSelling", "B")
                .with("anyBrand", "true"),
        );
        assert_eq!(
            predicate,
            Some(Predicate::Overlaps(
                Col::BrandSelling,
                vec!["A".to_string(), "B".to_string()]
            ))
        );
    }

    #[test]
    fn test_search_is_or_across_columns_and_anded_with_filters() {
        let predicate = build(RawQuery::new().with("search", "north").with("region", "R1"));
        let Some(Predicate::All(parts)) = predicate else {
            panic!("expected a conjunction");
        };
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts[1],
            Predicate::Any(vec![
                Predicate::ILike(Col::Name, "%north%".into()),
                Predicate::ILike(Col::Area, "%north%".into()),
            ])
        );
    }
}
