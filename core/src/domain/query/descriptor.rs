use super::value_objects::{FilterValue, Predicate};

/// Column types a query-string value can be coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Integer,
    Float,
    Boolean,
    Date,
    Timestamp,
}

/// One whitelisted filter of a resource.
///
/// Columns are the entity's own column enum, so a rule can only ever name a
/// column that exists on the table.
#[derive(Debug, Clone, Copy)]
pub enum FilterRule<C: 'static> {
    /// `param=value` matches the column exactly.
    Exact {
        param: &'static str,
        column: C,
        field_type: FieldType,
    },
    /// `lower` and `upper` bound the column independently, both inclusive.
    Range {
        lower: &'static str,
        upper: &'static str,
        column: C,
        field_type: FieldType,
    },
    /// Tag-like array column. Every supplied value must be present, unless
    /// `any_flag=true` asks for at least one of them.
    Tags {
        param: &'static str,
        any_flag: &'static str,
        column: C,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct SortKey<C: 'static> {
    pub key: &'static str,
    pub column: C,
}

/// Path segment of a relation-scoped endpoint (`/{resource}/{segment}/{id}`)
/// and the foreign-key column it scopes on.
#[derive(Debug, Clone, Copy)]
pub struct RelationScope<C: 'static> {
    pub segment: &'static str,
    pub column: C,
}

#[derive(Debug, Clone, Copy)]
pub struct DateColumn<C: 'static> {
    pub column: C,
    pub field_type: FieldType,
}

/// Static description of a table exposed through the generic handlers.
#[derive(Debug)]
pub struct ResourceDescriptor<C: 'static> {
    /// URL segment, e.g. `daily-visit-reports`.
    pub name: &'static str,
    /// Human label used in messages, e.g. `Daily visit report`.
    pub label: &'static str,
    pub primary_key: C,
    pub default_sort: C,
    pub filters: &'static [FilterRule<C>],
    /// Columns matched case-insensitively by the `search` parameter.
    pub search: &'static [C],
    pub sorts: &'static [SortKey<C>],
    pub relations: &'static [RelationScope<C>],
    /// Column used by the bulk date-range deletion, when the table has one.
    pub date_column: Option<DateColumn<C>>,
}

impl<C: Copy> ResourceDescriptor<C> {
    pub fn relation(&self, segment: &str) -> Option<&RelationScope<C>> {
        self.relations.iter().find(|scope| scope.segment == segment)
    }

    pub fn sort_column(&self, key: &str) -> Option<C> {
        self.sorts
            .iter()
            .find(|sort| sort.key == key)
            .map(|sort| sort.column)
    }

    /// Equality on the foreign key behind `segment`, or `None` for an unknown
    /// relation.
    pub fn relation_predicate(&self, segment: &str, id: i32) -> Option<Predicate<C>> {
        self.relation(segment)
            .map(|scope| Predicate::Eq(scope.column, FilterValue::Integer(i64::from(id))))
    }

    /// Every query parameter recognised by the filter rules.
    pub fn filter_params(&self) -> Vec<&'static str> {
        self.filters
            .iter()
            .flat_map(|rule| match *rule {
                FilterRule::Exact { param, .. } => vec![param],
                FilterRule::Range { lower, upper, .. } => vec![lower, upper],
                FilterRule::Tags {
                    param, any_flag, ..
                } => vec![param, any_flag],
            })
            .collect()
    }

    /// Confirmation value required to wipe the whole table.
    pub fn delete_all_token(&self) -> String {
        format!(
            "DELETE_ALL_{}",
            self.name.replace('-', "_").to_ascii_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum Col {
        Id,
        UserId,
    }

    static DESCRIPTOR: ResourceDescriptor<Col> = ResourceDescriptor {
        name: "daily-visit-reports",
        label: "Daily visit report",
        primary_key: Col::Id,
        default_sort: Col::Id,
        filters: &[
            FilterRule::Exact {
                param: "userId",
                column: Col::UserId,
                field_type: FieldType::Integer,
            },
            FilterRule::Range {
                lower: "startDate",
                upper: "endDate",
                column: Col::Id,
                field_type: FieldType::Date,
            },
        ],
        search: &[],
        sorts: &[SortKey {
            key: "userId",
            column: Col::UserId,
        }],
        relations: &[RelationScope {
            segment: "user",
            column: Col::UserId,
        }],
        date_column: None,
    };

    #[test]
    fn test_delete_all_token_is_upper_snake_case() {
        assert_eq!(
            DESCRIPTOR.delete_all_token(),
            "DELETE_ALL_DAILY_VISIT_REPORTS"
        );
    }

    #[test]
    fn test_relation_lookup() {
        assert!(matches!(
            DESCRIPTOR.relation("user").map(|scope| scope.column),
            Some(Col::UserId)
        ));
        assert!(DESCRIPTOR.relation("dealer").is_none());
    }

    #[test]
    fn test_sort_column_lookup_is_exact() {
        assert!(DESCRIPTOR.sort_column("userId").is_some());
        assert!(DESCRIPTOR.sort_column("userid").is_none());
    }

    #[test]
    fn test_filter_params_lists_both_range_bounds() {
        assert_eq!(
            DESCRIPTOR.filter_params(),
            vec!["userId", "startDate", "endDate"]
        );
    }
}
