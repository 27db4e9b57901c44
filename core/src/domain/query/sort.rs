use std::mem::discriminant;

use super::descriptor::ResourceDescriptor;

pub const SORT_BY_PARAM: &str = "sortBy";
pub const SORT_DIR_PARAM: &str = "sortDir";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Only the literal `asc` (any case) sorts ascending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ResolvedSort<C> {
    pub column: C,
    pub direction: SortDirection,
    /// Secondary ordering on the primary key so equal values page stably.
    pub tie_breaker: Option<C>,
}

pub fn resolve_sort<C: Copy>(
    descriptor: &ResourceDescriptor<C>,
    sort_by: Option<&str>,
    sort_dir: Option<&str>,
) -> ResolvedSort<C> {
    let column = sort_by
        .and_then(|key| descriptor.sort_column(key))
        .unwrap_or(descriptor.default_sort);

    // Columns are fieldless enums: equal discriminants mean the same column.
    let tie_breaker = if discriminant(&column) == discriminant(&descriptor.primary_key) {
        None
    } else {
        Some(descriptor.primary_key)
    };

    ResolvedSort {
        column,
        direction: SortDirection::parse(sort_dir),
        tie_breaker,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::descriptor::SortKey;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Col {
        Id,
        CreatedAt,
        Rating,
        HashedPassword,
    }

    static DESCRIPTOR: ResourceDescriptor<Col> = ResourceDescriptor {
        name: "ratings",
        label: "Rating",
        primary_key: Col::Id,
        default_sort: Col::CreatedAt,
        filters: &[],
        search: &[],
        sorts: &[
            SortKey {
                key: "rating",
                column: Col::Rating,
            },
            SortKey {
                key: "id",
                column: Col::Id,
            },
        ],
        relations: &[],
        date_column: None,
    };

    #[test]
    fn test_whitelisted_key_and_asc() {
        let sort = resolve_sort(&DESCRIPTOR, Some("rating"), Some("ASC"));
        assert_eq!(sort.column, Col::Rating);
        assert_eq!(sort.direction, SortDirection::Asc);
        assert_eq!(sort.tie_breaker, Some(Col::Id));
    }

    #[test]
    fn test_unknown_key_falls_back_to_default_desc() {
        for key in [None, Some(""), Some("hashedPassword"), Some("rating; DROP TABLE")] {
            let sort = resolve_sort(&DESCRIPTOR, key, None);
            assert_eq!(sort.column, Col::CreatedAt);
            assert_eq!(sort.direction, SortDirection::Desc);
        }
        assert_ne!(
            resolve_sort(&DESCRIPTOR, Some("hashedPassword"), None).column,
            Col::HashedPassword
        );
    }

    #[test]
    fn test_anything_but_asc_is_desc() {
        for dir in [None, Some("desc"), Some("ascending"), Some("up"), Some("")] {
            assert_eq!(SortDirection::parse(dir), SortDirection::Desc);
        }
        assert_eq!(SortDirection::parse(Some(" aSc ")), SortDirection::Asc);
    }

    #[test]
    fn test_no_tie_breaker_when_sorting_by_primary_key() {
        let sort = resolve_sort(&DESCRIPTOR, Some("id"), Some("asc"));
        assert_eq!(sort.column, Col::Id);
        assert_eq!(sort.tie_breaker, None);
    }
}
