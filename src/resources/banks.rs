//! Banks and card issuers freee can sync with. Not scoped to a company.

use serde::{Deserialize, Serialize};

use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "banks";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBanksOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// bank_account, credit_card, wallet, network_service, other
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banks {
    pub banks: Vec<Bank>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub id: i32,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name_kana: Option<String>,
}

impl Client {
    /// Lists the banks freee can sync with. Not scoped to a company.
    pub async fn get_banks(
        &self,
        token_source: &dyn TokenSource,
        opts: &GetBanksOpts,
    ) -> Result<Banks> {
        self.get(token_source, PATH, &Query::from_params(opts)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_client, test_token};

    #[tokio::test]
    async fn test_get_banks_has_no_company_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/1/banks?limit=2&type=credit_card")
            .with_status(200)
            .with_body(
                r#"{"banks": [
                    {"id": 1, "name": "freeeカード", "type": "credit_card", "name_kana": "フリーカード"},
                    {"id": 2, "name": null, "type": null, "name_kana": null}
                ]}"#,
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let opts = GetBanksOpts {
            limit: Some(2),
            kind: Some("credit_card".to_string()),
            ..Default::default()
        };
        let banks = client.get_banks(&test_token(), &opts).await.unwrap();

        assert_eq!(banks.banks.len(), 2);
        assert_eq!(banks.banks[0].kind.as_deref(), Some("credit_card"));
        assert_eq!(banks.banks[1].name, None);
        mock.assert_async().await;
    }
}
