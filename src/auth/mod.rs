//! Access token providers.
//!
//! Every API call takes a [`TokenSource`] from the caller. The client never owns
//! credentials; it asks the source for a bearer token right before sending.
//!
//! - [`StaticTokenSource`] - a fixed access token
//! - [`RefreshingTokenSource`] - refreshes through the OAuth2 token endpoint

mod refresh;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::ApiError;

pub use refresh::{RefreshingTokenSource, Token};

/// A bearer token ready to be sent.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(****)")
    }
}

/// Failure to obtain an access token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to retrieve access token: {message}")]
pub struct TokenError {
    /// Status returned by the token endpoint, when the failure came from a response.
    pub status: Option<StatusCode>,
    pub message: String,
}

impl TokenError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        ApiError {
            status: err.status,
            raw_error: err.to_string(),
            authorization_required: true,
        }
    }
}

impl From<TokenError> for crate::error::Error {
    fn from(err: TokenError) -> Self {
        crate::error::Error::Api(err.into())
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Returns a currently valid access token, refreshing it if needed.
    async fn token(&self) -> Result<AccessToken, TokenError>;
}

/// Always hands out the same access token.
#[derive(Debug, Clone)]
pub struct StaticTokenSource {
    token: AccessToken,
}

impl StaticTokenSource {
    /// A source that always hands out `access_token`.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            token: AccessToken::new(access_token),
        }
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn token(&self) -> Result<AccessToken, TokenError> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_token_source() {
        let source = StaticTokenSource::new("abc");
        assert_eq!(source.token().await.unwrap().secret(), "abc");
        assert_eq!(source.token().await.unwrap().secret(), "abc");
    }

    #[test]
    fn test_access_token_debug_is_redacted() {
        let token = AccessToken::new("very-secret");
        assert!(!format!("{:?}", token).contains("very-secret"));
    }

    #[test]
    fn test_token_error_requires_authorization() {
        let err = TokenError {
            status: Some(StatusCode::BAD_REQUEST),
            message: "invalid_grant".to_string(),
        };

        let api: ApiError = err.into();
        assert!(api.authorization_required);
        assert_eq!(api.status, Some(StatusCode::BAD_REQUEST));
        assert!(api.raw_error.contains("invalid_grant"));
    }
}
