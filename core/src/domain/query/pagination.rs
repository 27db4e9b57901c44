use serde::Serialize;

pub const PAGE_PARAM: &str = "page";
pub const LIMIT_PARAM: &str = "limit";

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 50;
pub const MAX_LIMIT: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// `page` below 1 or non-numeric becomes 1. A non-numeric `limit` becomes
    /// the default, a numeric one is clamped to `[1, MAX_LIMIT]`.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|page| *page >= 1)
            .map(|page| page as u64)
            .unwrap_or(DEFAULT_PAGE);

        let limit = limit
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(|limit| limit.clamp(1, MAX_LIMIT as i64) as u64)
            .unwrap_or(DEFAULT_LIMIT);

        Self { page, limit }
    }

    /// Capped at `i64::MAX`, the largest offset Postgres accepts.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let pagination = Pagination::from_raw(None, None);
        assert_eq!(pagination, Pagination { page: 1, limit: 50 });
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn test_limit_clamped_to_nearest_bound() {
        for (raw, expected) in [("0", 1), ("-20", 1), ("501", 500), ("100000", 500), ("1", 1), ("500", 500)] {
            assert_eq!(Pagination::from_raw(None, Some(raw)).limit, expected, "limit={raw}");
        }
    }

    #[test]
    fn test_non_numeric_limit_uses_default() {
        assert_eq!(Pagination::from_raw(None, Some("lots")).limit, 50);
        assert_eq!(Pagination::from_raw(None, Some("")).limit, 50);
    }

    #[test]
    fn test_invalid_page_is_one() {
        for raw in ["0", "-3", "two", "", "1.5"] {
            assert_eq!(Pagination::from_raw(Some(raw), None).page, 1, "page={raw}");
        }
    }

    #[test]
    fn test_offset() {
        let pagination = Pagination::from_raw(Some("3"), Some("20"));
        assert_eq!(pagination.offset(), 40);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let pagination = Pagination::from_raw(Some(&i64::MAX.to_string()), Some("500"));
        assert_eq!(pagination.offset(), i64::MAX as u64);
    }
}
