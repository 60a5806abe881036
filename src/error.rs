//! Error types returned by every API call.

use reqwest::StatusCode;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A failure reported by the freee API, or by the token endpoint in front of it.
///
/// `authorization_required` means the stored credentials are no longer usable and
/// the OAuth2 authorization flow has to be run again. Retrying the same request
/// will not help.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status of the failed response, when one was received.
    pub status: Option<StatusCode>,
    /// Response body (or token endpoint message) as received.
    pub raw_error: String,
    /// The caller must re-run the OAuth2 authorization flow.
    pub authorization_required: bool,
}

impl ApiError {
    /// An error response with the given status and body.
    pub fn new(status: StatusCode, raw_error: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            raw_error: raw_error.into(),
            authorization_required: false,
        }
    }

    /// Status code as a plain integer, `0` when no response was received.
    pub fn status_code(&self) -> u16 {
        self.status.map(|s| s.as_u16()).unwrap_or(0)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "freee API error ({}): {}", status, self.raw_error)?,
            None => write!(f, "freee API error: {}", self.raw_error)?,
        }
        if self.authorization_required {
            write!(f, " (re-authorization required)")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Errors produced while building, sending, or decoding a request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API (or the token endpoint) rejected the call.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The configured endpoint could not be turned into a request URL.
    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request body could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Query parameters could not be URL-encoded.
    #[error("failed to encode query parameters: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The request could not be assembled (headers, multipart parts, HTTP client).
    #[error("failed to build request: {0}")]
    Build(String),

    /// Network failure, timeout, or any other transport-level problem.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Parameters were rejected locally before any request was sent.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

impl Error {
    /// Returns the structured API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    /// True when the caller has to redo the OAuth2 authorization flow.
    pub fn is_authorization_required(&self) -> bool {
        self.api_error()
            .is_some_and(|e| e.authorization_required)
    }
}

/// Walks an error's cause chain and returns the first [`ApiError`] in it.
pub fn find_api_error<'a>(err: &'a (dyn std::error::Error + 'static)) -> Option<&'a ApiError> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(api) = e.downcast_ref::<ApiError>() {
            return Some(api);
        }
        if let Some(Error::Api(api)) = e.downcast_ref::<Error>() {
            return Some(api);
        }
        current = e.source();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("outer: {inner}")]
    struct Wrapper {
        #[source]
        inner: ApiError,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("outermost")]
    struct Outer(#[source] Wrapper);

    #[test]
    fn test_api_error_display() {
        let err = ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error");
        assert_eq!(
            err.to_string(),
            "freee API error (500 Internal Server Error): internal error"
        );

        let err = ApiError {
            status: None,
            raw_error: "token expired".to_string(),
            authorization_required: true,
        };
        assert!(err.to_string().contains("re-authorization required"));
        assert_eq!(err.status_code(), 0);
    }

    #[test]
    fn test_error_is_authorization_required() {
        let mut api = ApiError::new(StatusCode::UNAUTHORIZED, "{}");
        assert!(!Error::Api(api.clone()).is_authorization_required());

        api.authorization_required = true;
        assert!(Error::Api(api).is_authorization_required());

        let err = Error::InvalidParams("x".to_string());
        assert!(!err.is_authorization_required());
        assert!(err.api_error().is_none());
    }

    #[test]
    fn test_find_api_error_in_chain() {
        let err = Outer(Wrapper {
            inner: ApiError::new(StatusCode::UNAUTHORIZED, "nested"),
        });

        let found = find_api_error(&err).unwrap();
        assert_eq!(found.status, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(found.raw_error, "nested");
    }

    #[test]
    fn test_find_api_error_through_anyhow() {
        let err = anyhow::Error::new(ApiError::new(StatusCode::FORBIDDEN, "denied"))
            .context("calling deals");

        let found = find_api_error(err.as_ref()).unwrap();
        assert_eq!(found.status, Some(StatusCode::FORBIDDEN));
    }

    #[test]
    fn test_find_api_error_missing() {
        let err = std::io::Error::other("plain failure");
        assert!(find_api_error(&err).is_none());
    }
}
