//! Request construction: URL, query string, headers and body.

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Method, Request};
use serde::Serialize;
use url::Url;

use super::Client;
use crate::config::{API_PATH, HEADER_X_API_VERSION, X_API_VERSION};
use crate::error::{Error, Result};

/// Ordered query parameters. Duplicate keys are kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(Vec<(String, String)>);

impl Query {
    /// An empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes a typed options struct. Fields serialized as `None` are omitted.
    pub fn from_params<T: Serialize + ?Sized>(params: &T) -> Result<Self> {
        let encoded = serde_urlencoded::to_string(params)?;
        Ok(Self(
            url::form_urlencoded::parse(encoded.as_bytes())
                .into_owned()
                .collect(),
        ))
    }

    /// Same as [`Query::from_params`] followed by [`Query::set`]`("company_id", ..)`.
    pub fn for_company<T: Serialize + ?Sized>(company_id: i32, params: &T) -> Result<Self> {
        let mut query = Self::from_params(params)?;
        query.set("company_id", company_id);
        Ok(query)
    }

    /// A query holding only `company_id`.
    pub fn with_company_id(company_id: i32) -> Self {
        let mut query = Self::new();
        query.set("company_id", company_id);
        query
    }

    /// Appends a pair, keeping any existing pairs with the same key.
    pub fn append(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    /// Replaces every existing pair with this key by a single pair.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        let key = key.into();
        self.0.retain(|(k, _)| *k != key);
        self.0.push((key, value.to_string()));
        self
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pairs in the order they will be sent.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

/// What goes into the request body.
#[derive(Debug)]
pub enum Payload {
    Empty,
    /// Already-encoded JSON.
    Json(Vec<u8>),
    Multipart(Form),
}

impl Payload {
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self> {
        serde_json::to_vec(body).map(Payload::Json).map_err(Error::Encode)
    }
}

impl Client {
    /// Resolves `path` under `<api_endpoint>/api/1/`, keeping any path prefix
    /// already present on the configured endpoint.
    pub fn endpoint_url(&self, path: &str, query: &Query) -> Result<Url> {
        let mut url = Url::parse(&self.config().api_endpoint)?;

        let mut full = url.path().trim_end_matches('/').to_string();
        full.push_str(API_PATH);
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            full.push('/');
            full.push_str(segment);
        }
        url.set_path(&full);

        url.set_query(None);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.pairs());
        }
        Ok(url)
    }

    /// Builds a request ready for [`Client::dispatch`].
    ///
    /// `DELETE` never carries a body or a content type. Every other method is
    /// sent as `application/json` unless the payload is multipart.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        payload: Payload,
    ) -> Result<Request> {
        let url = self.endpoint_url(path, query)?;
        let is_delete = method == Method::DELETE;

        let mut builder = self
            .http()
            .request(method, url)
            .header(HEADER_X_API_VERSION, HeaderValue::from_static(X_API_VERSION));

        if let Some(timeout) = self.config().timeout {
            builder = builder.timeout(timeout);
        }

        if !is_delete {
            builder = match payload {
                Payload::Multipart(form) => builder.multipart(form),
                Payload::Json(bytes) => builder
                    .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                    .body(bytes),
                Payload::Empty => {
                    builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                }
            };
        }

        builder
            .build()
            .map_err(|e| Error::Build(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde::Deserialize;

    fn client(endpoint: &str) -> Client {
        Client::new(Config::new("id", "secret", "http://localhost/cb").with_api_endpoint(endpoint))
            .unwrap()
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Params {
        company_id: i32,
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        shortcut: Option<String>,
    }

    #[derive(Serialize, Default)]
    struct Opts {
        #[serde(skip_serializing_if = "Option::is_none")]
        offset: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        partner_code: Option<String>,
    }

    #[test]
    fn test_url_joins_api_prefix() {
        let client = client("https://api.freee.co.jp");
        let url = client.endpoint_url("deals/12", &Query::new()).unwrap();
        assert_eq!(url.as_str(), "https://api.freee.co.jp/api/1/deals/12");
    }

    #[test]
    fn test_url_keeps_endpoint_path_prefix() {
        let client = client("https://proxy.example.com/freee/");
        let url = client.endpoint_url("segments/1/tags", &Query::new()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://proxy.example.com/freee/api/1/segments/1/tags"
        );
    }

    #[test]
    fn test_url_invalid_endpoint() {
        let client = client("not a url");
        let err = client.endpoint_url("deals", &Query::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_query_from_params_omits_none() {
        let opts = Opts {
            limit: Some(20),
            partner_code: Some("a b&c".to_string()),
            ..Default::default()
        };
        let query = Query::for_company(7, &opts).unwrap();

        assert_eq!(query.get("limit"), Some("20"));
        assert_eq!(query.get("partner_code"), Some("a b&c"));
        assert_eq!(query.get("offset"), None);
        assert_eq!(query.get("company_id"), Some("7"));

        let url = client("https://api.freee.co.jp")
            .endpoint_url("deals", &query)
            .unwrap();
        assert_eq!(
            url.query(),
            Some("limit=20&partner_code=a+b%26c&company_id=7")
        );
    }

    #[test]
    fn test_query_keeps_duplicates_and_set_replaces() {
        let mut query = Query::new();
        query.append("visible_tags[]", "partner").append("visible_tags[]", "item");
        query.set("company_id", 1).set("company_id", 2);

        assert_eq!(
            query.pairs(),
            &[
                ("visible_tags[]".to_string(), "partner".to_string()),
                ("visible_tags[]".to_string(), "item".to_string()),
                ("company_id".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_query_has_no_question_mark() {
        let url = client("https://api.freee.co.jp")
            .endpoint_url("users/me", &Query::from_params(&Opts::default()).unwrap())
            .unwrap();
        assert_eq!(url.as_str(), "https://api.freee.co.jp/api/1/users/me");
    }

    #[test]
    fn test_build_json_request() {
        let params = Params {
            company_id: 1,
            name: "交通費".to_string(),
            shortcut: None,
        };
        let request = client("https://api.freee.co.jp")
            .build_request(
                Method::POST,
                "items",
                &Query::new(),
                Payload::json(&params).unwrap(),
            )
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.headers()[HEADER_X_API_VERSION], "2020-06-15");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        let decoded: Params = serde_json::from_slice(body).unwrap();
        assert_eq!(decoded, params);
    }

    #[test]
    fn test_build_delete_request_has_no_body() {
        let request = client("https://api.freee.co.jp")
            .build_request(
                Method::DELETE,
                "deals/3",
                &Query::with_company_id(1),
                Payload::json(&serde_json::json!({"ignored": true})).unwrap(),
            )
            .unwrap();

        assert!(request.body().is_none());
        assert!(request.headers().get(CONTENT_TYPE).is_none());
        assert_eq!(request.headers()[HEADER_X_API_VERSION], "2020-06-15");
        assert_eq!(request.url().query(), Some("company_id=1"));
    }

    #[test]
    fn test_build_get_request_without_body() {
        let request = client("https://api.freee.co.jp")
            .build_request(Method::GET, "banks", &Query::new(), Payload::Empty)
            .unwrap();

        assert!(request.body().is_none());
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_build_request_applies_timeout() {
        let client = Client::new(
            Config::new("id", "secret", "http://localhost/cb")
                .with_timeout(std::time::Duration::from_secs(3)),
        )
        .unwrap();
        let request = client
            .build_request(Method::GET, "banks", &Query::new(), Payload::Empty)
            .unwrap();
        assert_eq!(request.timeout(), Some(&std::time::Duration::from_secs(3)));
    }
}
