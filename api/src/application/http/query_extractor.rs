use axum::{extract::FromRequestParts, http::request::Parts};
use fieldforce_core::domain::{
    bulk::value_objects::{CONFIRM_PARAM, END_DATE_PARAM, START_DATE_PARAM},
    query::value_objects::RawQuery,
};

use super::server::api_entities::api_error::ApiError;

/// Raw query-string parameters, repeated keys kept.
///
/// Interpretation is left to the query engine: unknown keys and unparsable
/// values never reject the request.
#[derive(Debug, Clone, Default)]
pub struct RawQueryExtractor(pub RawQuery);

impl RawQueryExtractor {
    pub fn confirm(&self) -> Option<String> {
        self.0.get(CONFIRM_PARAM).map(str::to_string)
    }

    pub fn date_range(&self) -> (Option<String>, Option<String>) {
        (
            self.0.get(START_DATE_PARAM).map(str::to_string),
            self.0.get(END_DATE_PARAM).map(str::to_string),
        )
    }
}

impl<S> FromRequestParts<S> for RawQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::bad_request(format!("Invalid query string: {e}")))?;

        Ok(RawQueryExtractor(RawQuery::from_pairs(pairs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> RawQueryExtractor {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        RawQueryExtractor::from_request_parts(&mut parts, &())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_repeated_keys_are_kept() {
        let RawQueryExtractor(raw) =
            extract("/api/dealers?brandSelling=Star&brandSelling=Dalmia%2CACC&page=2").await;

        assert_eq!(raw.list("brandSelling"), vec!["Star", "Dalmia", "ACC"]);
        assert_eq!(raw.get("page"), Some("2"));
    }

    #[tokio::test]
    async fn test_missing_query_is_empty() {
        let extractor = extract("/api/ratings").await;
        assert!(extractor.confirm().is_none());
        assert_eq!(extractor.date_range(), (None, None));
    }

    #[tokio::test]
    async fn test_bulk_params() {
        let extractor =
            extract("/api/ratings/bulk/date-range?startDate=2024-01-01&endDate=2024-01-31&confirm=true")
                .await;
        assert_eq!(extractor.confirm().as_deref(), Some("true"));
        assert_eq!(
            extractor.date_range(),
            (Some("2024-01-01".into()), Some("2024-01-31".into()))
        );
    }
}
