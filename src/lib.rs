//! Typed client for the freee accounting API.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;

pub use auth::{AccessToken, RefreshingTokenSource, StaticTokenSource, Token, TokenError, TokenSource};
pub use config::Config;
pub use error::{ApiError, Error, Result, find_api_error};
pub use http::{Client, Query};
pub use resources::FieldOrder;

/// Shared helpers for unit tests.
#[cfg(test)]
pub mod test_utils {
    use crate::auth::StaticTokenSource;
    use crate::config::Config;
    use crate::http::Client;
    use crate::resources::FieldOrder;
    use serde::Serialize;

    /// Client pointed at a mock server.
    pub fn test_client(api_endpoint: &str) -> Client {
        Client::new(
            Config::new("client-id", "client-secret", "urn:ietf:wg:oauth:2.0:oob")
                .with_api_endpoint(api_endpoint),
        )
        .unwrap()
    }

    /// Token source sending `Bearer test-token`.
    pub fn test_token() -> StaticTokenSource {
        StaticTokenSource::new("test-token")
    }

    /// Checks that `T::FIELDS` lists exactly the keys `value` serializes to,
    /// without duplicates.
    pub fn assert_field_order<T: FieldOrder + Serialize>(value: &T) {
        let json = serde_json::to_value(value).unwrap();
        let mut keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();

        let mut fields = T::FIELDS.to_vec();
        fields.sort_unstable();
        fields.dedup();

        assert_eq!(fields.len(), T::FIELDS.len(), "duplicate field names");
        assert_eq!(keys, fields);
    }
}
