//! Response classification: freee error bodies and JSON decoding.

use log::{debug, warn};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::HEADER_X_FREEE_REQUEST_ID;
use crate::error::{ApiError, Error, Result};

/// `code` values freee sends with a 401 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnauthorizedCode {
    InvalidAccessToken,
    ExpiredAccessToken,
    #[serde(other)]
    Other,
}

impl UnauthorizedCode {
    /// Whether the code means the stored token can no longer be used.
    pub fn requires_authorization(&self) -> bool {
        match self {
            UnauthorizedCode::InvalidAccessToken | UnauthorizedCode::ExpiredAccessToken => true,
            UnauthorizedCode::Other => false,
        }
    }
}

/// Body of a 401 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnauthorizedError {
    pub code: UnauthorizedCode,
}

/// Passes responses below 400 through untouched and turns the rest into
/// [`ApiError`]s.
pub async fn classify(method: &Method, response: Response) -> Result<Response> {
    let status = response.status();
    let request_id = response
        .headers()
        .get(HEADER_X_FREEE_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let url = response.url();
    debug!(target: "freee", "{}: {}", HEADER_X_FREEE_REQUEST_ID, request_id);
    debug!(
        target: "freee",
        "{}: {} {}{}",
        status,
        method,
        url.host_str().unwrap_or_default(),
        url.path()
    );

    if status.as_u16() < 400 {
        return Ok(response);
    }

    let raw_error = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            warn!(target: "freee", "Failed to read error response body: {}", e);
            String::new()
        }
    };

    Err(Error::Api(api_error(status, raw_error)))
}

/// Builds the error for a failed response body. Only 401 bodies are inspected.
pub fn api_error(status: StatusCode, raw_error: String) -> ApiError {
    let mut err = ApiError::new(status, raw_error);
    if status == StatusCode::UNAUTHORIZED {
        match serde_json::from_str::<UnauthorizedError>(&err.raw_error) {
            Ok(body) => err.authorization_required = body.code.requires_authorization(),
            Err(e) => debug!(target: "freee", "Unrecognized 401 body: {}", e),
        }
    }
    err
}

/// Decodes a successful response body as JSON.
pub async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(Error::Decode)
}
