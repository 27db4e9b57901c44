use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::descriptor::FieldType;

/// Query-string parameters of one request, with repeated keys accumulated.
#[derive(Debug, Clone, Default)]
pub struct RawQuery {
    params: HashMap<String, Vec<String>>,
}

impl RawQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            params.entry(key).or_default().push(value);
        }
        Self { params }
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.params
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
        self
    }

    /// First non-empty value of `key`, trimmed.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)?
            .iter()
            .map(|value| value.trim())
            .find(|value| !value.is_empty())
    }

    /// Every value of `key`, comma-separated entries split out.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.params
            .get(key)
            .map(|values| {
                values
                    .iter()
                    .flat_map(|value| value.split(','))
                    .map(|value| value.trim())
                    .filter(|value| !value.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_true(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

/// Which side of a range a raw bound sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Lower,
    Upper,
}

impl FieldType {
    /// Coerces a raw query value; `None` when the value does not parse.
    pub fn coerce(self, raw: &str) -> Option<FilterValue> {
        match self {
            FieldType::Text => Some(FilterValue::Text(raw.to_string())),
            FieldType::Integer => raw.parse::<i64>().ok().map(FilterValue::Integer),
            FieldType::Float => raw
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(FilterValue::Float),
            FieldType::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => Some(FilterValue::Boolean(true)),
                "false" | "0" => Some(FilterValue::Boolean(false)),
                _ => None,
            },
            FieldType::Date => parse_date(raw).map(FilterValue::Date),
            FieldType::Timestamp => parse_timestamp(raw, Bound::Lower).map(FilterValue::Timestamp),
        }
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// A date-only upper bound covers the whole day: it resolves to the next
/// midnight, which callers compare with `<`.
pub fn parse_timestamp(raw: &str, bound: Bound) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let date = match bound {
        Bound::Lower => date,
        Bound::Upper => date.succ_opt()?,
    };
    Some(date.and_time(NaiveTime::MIN).and_utc())
}

pub fn is_date_only(raw: &str) -> bool {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
}

/// Boolean condition over the columns of one table.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<C> {
    Eq(C, FilterValue),
    Gte(C, FilterValue),
    Lte(C, FilterValue),
    Lt(C, FilterValue),
    /// Case-insensitive `LIKE` with an already escaped pattern.
    ILike(C, String),
    /// Array column shares at least one element with the list.
    Overlaps(C, Vec<String>),
    /// Array column holds every element of the list.
    ContainsAll(C, Vec<String>),
    All(Vec<Predicate<C>>),
    Any(Vec<Predicate<C>>),
}

impl<C> Predicate<C> {
    /// AND of `predicates`; `None` when empty, the predicate itself when single.
    pub fn all(mut predicates: Vec<Predicate<C>>) -> Option<Predicate<C>> {
        match predicates.len() {
            0 => None,
            1 => predicates.pop(),
            _ => Some(Predicate::All(predicates)),
        }
    }

    pub fn any(mut predicates: Vec<Predicate<C>>) -> Option<Predicate<C>> {
        match predicates.len() {
            0 => None,
            1 => predicates.pop(),
            _ => Some(Predicate::Any(predicates)),
        }
    }

    pub fn and(base: Option<Predicate<C>>, other: Option<Predicate<C>>) -> Option<Predicate<C>> {
        match (base, other) {
            (Some(base), Some(other)) => Some(Predicate::All(vec![base, other])),
            (base, other) => base.or(other),
        }
    }
}

/// `%needle%` with `LIKE` wildcards in the needle escaped.
pub fn contains_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_query_accumulates_repeated_keys() {
        let raw = RawQuery::from_pairs(vec![
            ("brandSelling".to_string(), "A".to_string()),
            ("brandSelling".to_string(), "B, C".to_string()),
        ]);
        assert_eq!(raw.list("brandSelling"), vec!["A", "B", "C"]);
        assert_eq!(raw.get("brandSelling"), Some("A"));
    }

    #[test]
    fn test_raw_query_skips_blank_values() {
        let raw = RawQuery::new().with("region", "   ").with("region", "R1");
        assert_eq!(raw.get("region"), Some("R1"));
        assert!(raw.get("area").is_none());
        assert!(RawQuery::new().with("tags", " , ,").list("tags").is_empty());
    }

    #[test]
    fn test_coerce_rejects_garbage_numbers() {
        assert_eq!(FieldType::Integer.coerce("12"), Some(FilterValue::Integer(12)));
        assert_eq!(FieldType::Integer.coerce("12abc"), None);
        assert_eq!(FieldType::Float.coerce("NaN"), None);
        assert_eq!(FieldType::Boolean.coerce("yes"), None);
    }

    #[test]
    fn test_coerce_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            FieldType::Date.coerce("2024-03-09"),
            Some(FilterValue::Date(expected))
        );
        assert_eq!(
            FieldType::Date.coerce("2024-03-09T10:00:00Z"),
            Some(FilterValue::Date(expected))
        );
        assert_eq!(FieldType::Date.coerce("09/03/2024"), None);
    }

    #[test]
    fn test_date_only_upper_bound_is_next_midnight() {
        let upper = parse_timestamp("2024-03-09", Bound::Upper).unwrap();
        assert_eq!(upper.to_rfc3339(), "2024-03-10T00:00:00+00:00");
        let lower = parse_timestamp("2024-03-09", Bound::Lower).unwrap();
        assert_eq!(lower.to_rfc3339(), "2024-03-09T00:00:00+00:00");
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[test]
    fn test_predicate_and_combines_optional_sides() {
        let base = Some(Predicate::Eq("user_id", FilterValue::Integer(1)));
        let other = Some(Predicate::Eq("region", FilterValue::Text("R1".into())));
        assert!(matches!(
            Predicate::and(base.clone(), other),
            Some(Predicate::All(parts)) if parts.len() == 2
        ));
        assert_eq!(Predicate::and(base.clone(), None), base);
        assert_eq!(Predicate::<&str>::and(None, None), None);
    }
}
