//! Generic filtered-list query engine shared by every resource.

pub mod descriptor;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod value_objects;

use descriptor::ResourceDescriptor;
use filter::build_filter;
use pagination::{LIMIT_PARAM, PAGE_PARAM, Pagination};
use sort::{ResolvedSort, SORT_BY_PARAM, SORT_DIR_PARAM, resolve_sort};
use value_objects::{Predicate, RawQuery};

/// A fully resolved list query: what to match, how to order, which page.
#[derive(Debug, Clone)]
pub struct ListQuery<C> {
    pub predicate: Option<Predicate<C>>,
    pub sort: ResolvedSort<C>,
    pub pagination: Pagination,
}

impl<C: Copy> ListQuery<C> {
    /// Combines the request's filters with an optional base predicate (the
    /// relation scope of `/resource/{relation}/{id}` endpoints).
    pub fn compose(
        descriptor: &ResourceDescriptor<C>,
        base: Option<Predicate<C>>,
        raw: &RawQuery,
    ) -> Self {
        Self {
            predicate: Predicate::and(base, build_filter(descriptor, raw)),
            sort: resolve_sort(
                descriptor,
                raw.get(SORT_BY_PARAM),
                raw.get(SORT_DIR_PARAM),
            ),
            pagination: Pagination::from_raw(raw.get(PAGE_PARAM), raw.get(LIMIT_PARAM)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::descriptor::{FieldType, FilterRule, RelationScope, SortKey};
    use crate::domain::query::sort::SortDirection;
    use crate::domain::query::value_objects::FilterValue;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Col {
        Id,
        UserId,
        Area,
        CreatedAt,
    }

    static DESCRIPTOR: ResourceDescriptor<Col> = ResourceDescriptor {
        name: "ratings",
        label: "Rating",
        primary_key: Col::Id,
        default_sort: Col::CreatedAt,
        filters: &[FilterRule::Exact {
            param: "area",
            column: Col::Area,
            field_type: FieldType::Text,
        }],
        search: &[],
        sorts: &[SortKey {
            key: "area",
            column: Col::Area,
        }],
        relations: &[RelationScope {
            segment: "user",
            column: Col::UserId,
        }],
        date_column: None,
    };

    #[test]
    fn test_compose_scopes_filters_sorts_and_pages() {
        let raw = RawQuery::new()
            .with("area", "north")
            .with("sortBy", "area")
            .with("sortDir", "asc")
            .with("page", "2")
            .with("limit", "10");
        let base = Some(Predicate::Eq(Col::UserId, FilterValue::Integer(7)));

        let query = ListQuery::compose(&DESCRIPTOR, base, &raw);

        assert_eq!(
            query.predicate,
            Some(Predicate::All(vec![
                Predicate::Eq(Col::UserId, FilterValue::Integer(7)),
                Predicate::Eq(Col::Area, FilterValue::Text("north".into())),
            ]))
        );
        assert_eq!(query.sort.column, Col::Area);
        assert_eq!(query.sort.direction, SortDirection::Asc);
        assert_eq!(query.pagination.offset(), 10);
    }

    #[test]
    fn test_compose_without_params_is_unfiltered_default_page() {
        let query = ListQuery::compose(&DESCRIPTOR, None, &RawQuery::new());
        assert!(query.predicate.is_none());
        assert_eq!(query.sort.column, Col::CreatedAt);
        assert_eq!(query.sort.direction, SortDirection::Desc);
        assert_eq!(query.pagination, Pagination::default());
    }
}
