//! Authenticated dispatch for freee API calls.

use std::sync::Arc;

use log::debug;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Method, Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::classify::{classify, decode};
use super::request::{Payload, Query};
use crate::auth::TokenSource;
use crate::config::Config;
use crate::error::{Error, Result, find_api_error};

/// freee API client.
///
/// Holds only read-only configuration and a connection pool, so one instance can
/// be shared by any number of concurrent calls. Credentials are supplied per call
/// through a [`TokenSource`].
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl Client {
    /// Builds a client with its own connection pool.
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Build(format!("HTTP client: {}", e)))?;
        Ok(Self::with_http_client(config, http))
    }

    /// Uses an existing reqwest client, e.g. one with custom proxies or TLS roots.
    pub fn with_http_client(config: Config, http: reqwest::Client) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Attaches a bearer token from `token_source` and sends the request once.
    ///
    /// The response is returned unread. Token retrieval failures come back as an
    /// [`crate::ApiError`] with `authorization_required` set.
    #[tracing::instrument(
        skip_all,
        fields(method = %request.method(), path = %request.url().path())
    )]
    pub async fn dispatch(
        &self,
        token_source: &dyn TokenSource,
        mut request: Request,
    ) -> Result<Response> {
        let token = token_source.token().await?;

        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.secret()))
            .map_err(|_| Error::Build("access token is not a valid header value".to_string()))?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);

        debug!("{} {}", request.method(), request.url());
        self.http.execute(request).await.map_err(|e| {
            match find_api_error(&e) {
                Some(api) => Error::Api(api.clone()),
                None => Error::Transport(e),
            }
        })
    }

    /// Builds, dispatches and classifies a request, returning the successful
    /// response with its body still unread.
    pub(crate) async fn send(
        &self,
        token_source: &dyn TokenSource,
        method: Method,
        path: &str,
        query: &Query,
        payload: Payload,
    ) -> Result<Response> {
        let request = self.build_request(method.clone(), path, query, payload)?;
        let response = self.dispatch(token_source, request).await?;
        classify(&method, response).await
    }

    /// Sends a JSON call and decodes the JSON response into `T`.
    pub async fn call<B, T>(
        &self,
        token_source: &dyn TokenSource,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = match body {
            Some(body) => Payload::json(body)?,
            None => Payload::Empty,
        };
        let response = self.send(token_source, method, path, query, payload).await?;
        decode(response).await
    }

    /// Sends a call whose successful response carries nothing worth decoding.
    pub async fn call_no_content(
        &self,
        token_source: &dyn TokenSource,
        method: Method,
        path: &str,
        query: &Query,
    ) -> Result<()> {
        self.send(token_source, method, path, query, Payload::Empty)
            .await
            .map(drop)
    }

    /// GET `path` and decode the JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        token_source: &dyn TokenSource,
        path: &str,
        query: &Query,
    ) -> Result<T> {
        self.call::<(), T>(token_source, Method::GET, path, query, None)
            .await
    }

    /// POST `body` as JSON and decode the response.
    pub async fn post<B, T>(&self, token_source: &dyn TokenSource, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(token_source, Method::POST, path, &Query::new(), Some(body))
            .await
    }

    /// PUT `body` as JSON and decode the response.
    pub async fn put<B, T>(&self, token_source: &dyn TokenSource, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(token_source, Method::PUT, path, &Query::new(), Some(body))
            .await
    }

    /// DELETE `path`, expecting an empty response.
    pub async fn delete(
        &self,
        token_source: &dyn TokenSource,
        path: &str,
        query: &Query,
    ) -> Result<()> {
        self.call_no_content(token_source, Method::DELETE, path, query)
            .await
    }
}
