//! Token source backed by the OAuth2 refresh-token grant.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use log::debug;
use oauth2::basic::BasicErrorResponse;
use oauth2::{
    AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse, RefreshToken, RequestTokenError,
    TokenResponse,
};
use reqwest::StatusCode;
use tokio::sync::Mutex;

use super::{AccessToken, TokenError, TokenSource};
use crate::config::{Config, FreeeOauth2Client};
use crate::error::{Error, Result};

/// Tokens are refreshed this long before they actually expire.
const EXPIRY_DELTA: Duration = Duration::from_secs(10);

/// An OAuth2 token as issued by the freee token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// `None` means the token never expires on its own.
    pub expires_at: Option<SystemTime>,
}

impl Token {
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        expires_at: Option<SystemTime>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token,
            expires_at,
        }
    }

    /// A token that only carries a refresh token and is refreshed on first use.
    pub fn from_refresh_token(refresh_token: impl Into<String>) -> Self {
        Self::new(String::new(), Some(refresh_token.into()), None)
    }

    fn is_valid_at(&self, now: SystemTime) -> bool {
        if self.access_token.is_empty() {
            return false;
        }
        match self.expires_at {
            Some(expires_at) => now + EXPIRY_DELTA < expires_at,
            None => true,
        }
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"****")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "****"))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Reuses the current access token until it expires, then exchanges the refresh
/// token for a new one.
///
/// freee rotates refresh tokens, so callers that persist credentials should
/// store [`RefreshingTokenSource::current`] after each session.
pub struct RefreshingTokenSource {
    oauth2: FreeeOauth2Client,
    http: reqwest::Client,
    token: Mutex<Token>,
}

impl RefreshingTokenSource {
    /// Builds the OAuth2 client from `config`; no request is made until the first `token()` call.
    pub fn new(config: &Config, token: Token) -> Result<Self> {
        // Token requests must not follow redirects.
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Build(format!("OAuth2 HTTP client: {}", e)))?;

        Ok(Self {
            oauth2: config.oauth2_client()?,
            http,
            token: Mutex::new(token),
        })
    }

    /// Returns the most recent token, including any rotated refresh token.
    pub async fn current(&self) -> Token {
        self.token.lock().await.clone()
    }

    #[tracing::instrument(skip(self, refresh_token))]
    async fn refresh(&self, refresh_token: &str) -> Result<Token, TokenError> {
        debug!("Refreshing access token at {}...", self.oauth2.token_uri().as_str());

        // oauth2 drops the response status, so note it on the way through.
        let last_status = Arc::new(AtomicU16::new(0));
        let recording_client = RecordingClient {
            http: self.http.clone(),
            status: Arc::clone(&last_status),
        };

        let response = self
            .oauth2
            .exchange_refresh_token(&RefreshToken::new(refresh_token.to_string()))
            .request_async(&recording_client)
            .await
            .map_err(|e| {
                let status = StatusCode::from_u16(last_status.load(Ordering::Relaxed)).ok();
                token_error(e, status)
            })?;

        let expires_at = response.expires_in().map(|d| SystemTime::now() + d);
        // Keep the previous refresh token when the server does not rotate it.
        let refresh_token = response
            .refresh_token()
            .map(|t| t.secret().to_string())
            .unwrap_or_else(|| refresh_token.to_string());

        Ok(Token {
            access_token: response.access_token().secret().to_string(),
            refresh_token: Some(refresh_token),
            expires_at,
        })
    }
}

/// Forwards to `reqwest::Client`, storing each response status in `status`.
struct RecordingClient {
    http: reqwest::Client,
    status: Arc<AtomicU16>,
}

impl<'c> AsyncHttpClient<'c> for RecordingClient {
    type Error = HttpClientError<reqwest::Error>;
    type Future = Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + Send + 'c>>;

    fn call(&'c self, request: HttpRequest) -> Self::Future {
        Box::pin(async move {
            let response = self.http.call(request).await?;
            self.status.store(response.status().as_u16(), Ordering::Relaxed);
            Ok(response)
        })
    }
}

#[async_trait]
impl TokenSource for RefreshingTokenSource {
    async fn token(&self) -> Result<AccessToken, TokenError> {
        let mut current = self.token.lock().await;
        if current.is_valid_at(SystemTime::now()) {
            return Ok(AccessToken::new(current.access_token.clone()));
        }

        let Some(refresh_token) = current.refresh_token.clone() else {
            return Err(TokenError::new(
                "access token expired and no refresh token is available",
            ));
        };

        let token = self.refresh(&refresh_token).await?;
        let access = AccessToken::new(token.access_token.clone());
        *current = token;
        Ok(access)
    }
}

/// `status` is the token endpoint's response status, if one was received.
fn token_error<RE>(
    err: RequestTokenError<RE, BasicErrorResponse>,
    status: Option<StatusCode>,
) -> TokenError
where
    RE: std::error::Error + 'static,
{
    match err {
        RequestTokenError::ServerResponse(resp) => TokenError {
            status,
            message: resp.to_string(),
        },
        RequestTokenError::Parse(e, body) => TokenError {
            status,
            message: format!("{}: {}", e, String::from_utf8_lossy(&body)),
        },
        RequestTokenError::Request(e) => TokenError::new(e.to_string()),
        RequestTokenError::Other(msg) => TokenError::new(msg),
    }
}
