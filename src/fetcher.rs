//! Fetch-and-validate pipeline.
//!
//! [`Fetcher::fetch_validated`] performs one GET against the configured origin and
//! turns the outcome into a [`Result`]:
//!
//! 1. the URL is built from the path and the present query parameters,
//! 2. a transport failure becomes `NETWORK_ERROR`,
//! 3. a non-2xx status is classified by code alone (`NOT_FOUND`, `RATE_LIMITED`,
//!    `SERVER_ERROR`) without reading the body,
//! 4. a body that is not JSON becomes `PARSE_ERROR` ("Failed to parse JSON response"),
//! 5. JSON that does not deserialize into the target type becomes `PARSE_ERROR`
//!    ("Response did not match expected schema").
//!
//! There are no retries and no caching.

use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{debug, trace};
use url::Url;

use crate::error::{Error, Result, SchemaError};
use crate::utils::HttpClient;

/// A query parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(s) => f.write_str(s),
            QueryValue::Integer(n) => write!(f, "{}", n),
            QueryValue::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Integer(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Integer(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

/// Ordered query parameters.
///
/// Entries keep insertion order. Absent values are remembered but never serialized,
/// and setting a name again replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, Option<QueryValue>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter
    pub fn set(self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.set_opt(name, Some(value))
    }

    /// Set a parameter that may be absent
    pub fn set_opt<V: Into<QueryValue>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        let name = name.into();
        let value = value.map(Into::into);

        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Present parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| (name.as_str(), v)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Runs single GET requests against one origin and validates the JSON responses
#[derive(Debug, Clone)]
pub struct Fetcher {
    http: HttpClient,
    base_url: Url,
}

impl Fetcher {
    pub fn new(http: HttpClient, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Resolve `path` against the origin and append the present parameters.
    ///
    /// The path is used verbatim; `?` and `#` inside it are percent-encoded instead
    /// of starting a query or fragment.
    pub fn build_url(&self, path: &str, params: &QueryParams) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url.set_query(None);
        url.set_fragment(None);

        if !params.is_empty() {
            let mut query = url.query_pairs_mut();
            for (name, value) in params.iter() {
                query.append_pair(name, &value.to_string());
            }
        }

        url
    }

    /// GET `path` and deserialize the JSON body into `T`
    pub async fn fetch_validated<T>(&self, path: &str, params: &QueryParams) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(path, params);
        debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                debug!("Request to {} failed: {}", url, e);
                Error::network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!("{} returned status {}", url, status);
            return Err(Error::from_status(status.as_u16(), url.as_str()));
        }

        let body = response.bytes().await.map_err(Error::invalid_json)?;
        trace!("{} returned {} bytes", url, body.len());

        let json: serde_json::Value =
            serde_json::from_slice(&body).map_err(Error::invalid_json)?;

        validate(json).map_err(|e| {
            debug!("Response from {} did not match schema: {}", url, e);
            Error::schema_mismatch(e)
        })
    }
}

/// Validate decoded JSON against the shape of `T`, applying its normalizations
pub fn validate<T: DeserializeOwned>(json: serde_json::Value) -> Result<T, SchemaError> {
    serde_json::from_value(json).map_err(SchemaError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde::Deserialize;
    use std::error::Error as _;

    #[derive(Debug, PartialEq, Deserialize)]
    struct TestRecord {
        title: String,
        key: String,
    }

    fn fetcher_for(base: &str) -> Fetcher {
        Fetcher::new(HttpClient::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn test_query_params_skip_absent_values() {
        let params = QueryParams::new()
            .set("q", "test")
            .set("limit", 10u32)
            .set_opt::<String>("missing", None);

        let present: Vec<_> = params.iter().map(|(n, v)| (n, v.to_string())).collect();
        assert_eq!(
            present,
            vec![("q", "test".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn test_query_params_replace_in_place() {
        let params = QueryParams::new()
            .set("q", "first")
            .set("limit", 10u32)
            .set("q", "second");

        let names: Vec<_> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["q", "limit"]);
        assert_eq!(params.iter().next().unwrap().1, &QueryValue::from("second"));
    }

    #[test]
    fn test_build_url() {
        let fetcher = fetcher_for("https://openlibrary.org");
        let params = QueryParams::new()
            .set("q", "Roald Dahl")
            .set("limit", 100u32)
            .set("offset", 0u32)
            .set_opt::<&str>("sort", None);

        let url = fetcher.build_url("/search/authors.json", &params);
        assert_eq!(
            url.as_str(),
            "https://openlibrary.org/search/authors.json?q=Roald+Dahl&limit=100&offset=0"
        );
    }

    #[test]
    fn test_build_url_without_params() {
        let fetcher = fetcher_for("https://openlibrary.org");
        let url = fetcher.build_url("/works/OL45804W.json", &QueryParams::new());
        assert_eq!(url.as_str(), "https://openlibrary.org/works/OL45804W.json");
    }

    #[test]
    fn test_build_url_keeps_path_verbatim() {
        let fetcher = fetcher_for("https://openlibrary.org");
        let url = fetcher.build_url("/authors//authors/OL34184A.json", &QueryParams::new());
        assert!(url.as_str().contains("/authors/OL34184A.json"));

        let url = fetcher.build_url("/authors/OL1A?x=1.json", &QueryParams::new());
        assert!(url.query().is_none());
    }

    #[tokio::test]
    async fn test_returns_parsed_data_on_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/works/OL45804W.json")
            .match_header("user-agent", crate::config::USER_AGENT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"title":"Fantastic Mr Fox","key":"/works/OL45804W"}"#)
            .create_async()
            .await;

        let fetcher = fetcher_for(&server.url());
        let result: TestRecord = fetcher
            .fetch_validated("/works/OL45804W.json", &QueryParams::new())
            .await
            .unwrap();

        assert_eq!(
            result,
            TestRecord {
                title: "Fantastic Mr Fox".to_string(),
                key: "/works/OL45804W".to_string(),
            }
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_appends_query_params() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search.json")
            .match_query(mockito::Matcher::Exact("q=test&limit=10".to_string()))
            .with_status(200)
            .with_body(r#"{"title":"Test","key":"/works/OL1W"}"#)
            .create_async()
            .await;

        let fetcher = fetcher_for(&server.url());
        let params = QueryParams::new()
            .set("q", "test")
            .set("limit", 10u32)
            .set_opt::<String>("missing", None);
        let result: Result<TestRecord> = fetcher.fetch_validated("/search.json", &params).await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    async fn error_for_status(status: usize) -> Error {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/works/OL1W.json")
            .with_status(status)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        fetcher_for(&server.url())
            .fetch_validated::<TestRecord>("/works/OL1W.json", &QueryParams::new())
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn test_not_found_on_404() {
        let err = error_for_status(404).await;
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.http_status(), Some(404));
        assert!(err.message().contains("/works/OL1W.json"));
    }

    #[tokio::test]
    async fn test_rate_limited_on_429() {
        let err = error_for_status(429).await;
        assert_eq!(err.kind(), ErrorKind::RateLimited);
        assert_eq!(err.http_status(), Some(429));
    }

    #[tokio::test]
    async fn test_server_error_on_500() {
        let err = error_for_status(500).await;
        assert_eq!(err.kind(), ErrorKind::ServerError);
        assert_eq!(err.http_status(), Some(500));
        assert!(err.cause().is_none());
    }

    #[tokio::test]
    async fn test_network_error_when_transport_fails() {
        // Nothing listens on port 1
        let fetcher = fetcher_for("http://127.0.0.1:1");
        let err = fetcher
            .fetch_validated::<TestRecord>("/works/OL1W.json", &QueryParams::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NetworkError);
        assert!(err.http_status().is_none());
        let cause = err.source().unwrap();
        assert!(cause.downcast_ref::<reqwest::Error>().is_some());
    }

    #[tokio::test]
    async fn test_parse_error_on_invalid_json() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/works/OL1W.json")
            .with_status(200)
            .with_body("{ unexpected token")
            .create_async()
            .await;

        let err = fetcher_for(&server.url())
            .fetch_validated::<TestRecord>("/works/OL1W.json", &QueryParams::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ParseError);
        assert_eq!(err.message(), "Failed to parse JSON response");
        assert!(err
            .source()
            .unwrap()
            .downcast_ref::<serde_json::Error>()
            .is_some());
    }

    #[tokio::test]
    async fn test_parse_error_on_schema_mismatch() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/works/OL1W.json")
            .with_status(200)
            .with_body(r#"{"wrong":"shape"}"#)
            .create_async()
            .await;

        let err = fetcher_for(&server.url())
            .fetch_validated::<TestRecord>("/works/OL1W.json", &QueryParams::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ParseError);
        assert_eq!(err.message(), "Response did not match expected schema");
        let detail = err.source().unwrap().downcast_ref::<SchemaError>().unwrap();
        assert!(detail.detail().contains("title"));
    }

    #[test]
    fn test_validate_applies_normalization() {
        let doc: crate::models::SearchDoc = validate(serde_json::json!({
            "key": "/works/OL45804W",
            "title": "Fantastic Mr Fox"
        }))
        .unwrap();
        assert_eq!(doc.key, "OL45804W");
    }
}
