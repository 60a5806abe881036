//! Walletables (口座): bank accounts, credit cards and cash wallets.

use serde::{Deserialize, Serialize};

use super::{FieldOrder, WalletableType};
use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "walletables";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetWalletablesOpts {
    /// Include `last_balance` and `walletable_balance`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_balance: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub walletable_type: Option<WalletableType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walletables {
    pub walletables: Vec<Walletable>,
    #[serde(default)]
    pub meta: WalletablesMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletablesMeta {
    /// False while balances are still being aggregated.
    pub up_to_date: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct WalletableResponse {
    walletable: Walletable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walletable {
    pub id: i32,
    pub name: String,
    /// Null for cash wallets.
    pub bank_id: Option<i32>,
    #[serde(rename = "type")]
    pub walletable_type: WalletableType,
    /// Balance as synced from the bank.
    pub last_balance: Option<i32>,
    /// Balance as registered in freee.
    pub walletable_balance: Option<i32>,
}

impl FieldOrder for Walletable {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "bank_id",
        "type",
        "last_balance",
        "walletable_balance",
    ];
}

impl Client {
    /// Lists bank accounts, credit cards and wallets.
    #[tracing::instrument(skip(self, token_source))]
    pub async fn get_walletables(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetWalletablesOpts,
    ) -> Result<Walletables> {
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }

    /// Fetches one walletable.
    pub async fn get_walletable(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        walletable_id: i32,
        opts: &GetWalletablesOpts,
    ) -> Result<Walletable> {
        let response: WalletableResponse = self
            .get(
                token_source,
                &format!("{}/{}", PATH, walletable_id),
                &Query::for_company(company_id, opts)?,
            )
            .await?;
        Ok(response.walletable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_field_order, test_client, test_token};

    const WALLETABLE: &str = r#"{
        "id": 10,
        "name": "みずほ銀行",
        "bank_id": 2,
        "type": "bank_account",
        "last_balance": 100000,
        "walletable_balance": 98800
    }"#;

    #[test]
    fn test_walletable_field_order() {
        let walletable: Walletable = serde_json::from_str(WALLETABLE).unwrap();
        assert_field_order(&walletable);
    }

    #[tokio::test]
    async fn test_get_walletables() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/1/walletables?with_balance=true&company_id=1")
            .with_status(200)
            .with_body(format!(
                r#"{{"walletables": [{}, {{"id": 3, "name": "現金", "bank_id": null, "type": "wallet", "last_balance": null, "walletable_balance": 45000}}], "meta": {{"up_to_date": true}}}}"#,
                WALLETABLE
            ))
            .create_async()
            .await;

        let client = test_client(&server.url());
        let opts = GetWalletablesOpts {
            with_balance: Some(true),
            ..Default::default()
        };
        let result = client
            .get_walletables(&test_token(), 1, &opts)
            .await
            .unwrap();

        assert!(result.meta.up_to_date);
        assert_eq!(result.walletables[1].walletable_type, WalletableType::Wallet);
        assert_eq!(result.walletables[1].bank_id, None);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_walletable_by_type() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/1/walletables/10?type=bank_account&company_id=1")
            .with_status(200)
            .with_body(format!(r#"{{"walletable": {}}}"#, WALLETABLE))
            .create_async()
            .await;

        let client = test_client(&server.url());
        let opts = GetWalletablesOpts {
            walletable_type: Some(WalletableType::BankAccount),
            ..Default::default()
        };
        let walletable = client
            .get_walletable(&test_token(), 1, 10, &opts)
            .await
            .unwrap();

        assert_eq!(walletable.walletable_balance, Some(98800));
        mock.assert_async().await;
    }
}
