//! Client configuration and freee protocol constants.

use std::time::Duration;

use oauth2::basic::BasicClient;
use oauth2::{AuthType, AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet, RedirectUrl, TokenUrl};

use crate::error::Result;

/// Default API root.
pub const API_ENDPOINT: &str = "https://api.freee.co.jp";
/// Versioned prefix every endpoint path is joined under.
pub const API_PATH: &str = "/api/1";

pub const HEADER_X_API_VERSION: &str = "X-Api-Version";
pub const HEADER_X_FREEE_REQUEST_ID: &str = "X-Freee-Request-ID";
/// Value sent in [`HEADER_X_API_VERSION`] on every request.
pub const X_API_VERSION: &str = "2020-06-15";

pub const OAUTH2_AUTH_URL: &str = "https://accounts.secure.freee.co.jp/public_api/authorize";
pub const OAUTH2_TOKEN_URL: &str = "https://accounts.secure.freee.co.jp/public_api/token";

/// OAuth2 client configured with freee's authorize and token endpoints.
pub type FreeeOauth2Client =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// OAuth2 application credentials and endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Oauth2Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub auth_url: String,
    pub token_url: String,
}

/// Settings shared by every call made through a [`crate::Client`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_endpoint: String,
    pub oauth2: Oauth2Config,
    /// Upper bound for a single HTTP exchange. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Config {
    /// Production endpoints with the given OAuth2 client credentials.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            api_endpoint: API_ENDPOINT.to_string(),
            oauth2: Oauth2Config {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
                redirect_url: redirect_url.into(),
                auth_url: OAUTH2_AUTH_URL.to_string(),
                token_url: OAUTH2_TOKEN_URL.to_string(),
            },
            timeout: None,
            user_agent: format!("freee-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Points API calls at another host, e.g. a mock server.
    pub fn with_api_endpoint(mut self, api_endpoint: impl Into<String>) -> Self {
        self.api_endpoint = api_endpoint.into();
        self
    }

    /// Points the refresh grant at another token endpoint.
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.oauth2.token_url = token_url.into();
        self
    }

    /// Per-request timeout; unset means no timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds an OAuth2 client for these credentials.
    ///
    /// freee expects the client credentials in the token request body rather
    /// than in a Basic authorization header.
    pub fn oauth2_client(&self) -> Result<FreeeOauth2Client> {
        let client = BasicClient::new(ClientId::new(self.oauth2.client_id.clone()))
            .set_client_secret(ClientSecret::new(self.oauth2.client_secret.clone()))
            .set_auth_uri(AuthUrl::new(self.oauth2.auth_url.clone())?)
            .set_token_uri(TokenUrl::new(self.oauth2.token_url.clone())?)
            .set_redirect_uri(RedirectUrl::new(self.oauth2.redirect_url.clone())?)
            .set_auth_type(AuthType::RequestBody);
        Ok(client)
    }
}
