//! Account items (勘定科目).

use serde::{Deserialize, Serialize};

use super::FieldOrder;
use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "account_items";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetAccountItemsOpts {
    /// Only items valid on this date (yyyy-mm-dd).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountItems {
    pub account_items: Vec<AccountItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountItem {
    pub id: i32,
    pub name: String,
    pub tax_code: i32,
    pub shortcut: Option<String>,
    pub shortcut_num: Option<String>,
    pub default_tax_id: Option<i32>,
    pub default_tax_code: i32,
    pub account_category: String,
    pub account_category_id: i32,
    pub categories: Vec<String>,
    pub available: bool,
    pub walletable_id: Option<i32>,
    pub group_name: Option<String>,
    pub corresponding_income_name: Option<String>,
    pub corresponding_income_id: Option<i32>,
    pub corresponding_expense_name: Option<String>,
    pub corresponding_expense_id: Option<i32>,
}

impl FieldOrder for AccountItem {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "tax_code",
        "shortcut",
        "shortcut_num",
        "default_tax_id",
        "default_tax_code",
        "account_category",
        "account_category_id",
        "categories",
        "available",
        "walletable_id",
        "group_name",
        "corresponding_income_name",
        "corresponding_income_id",
        "corresponding_expense_name",
        "corresponding_expense_id",
    ];
}

impl Client {
    /// Lists the account items (勘定科目) of a company.
    #[tracing::instrument(skip(self, token_source))]
    pub async fn get_account_items(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetAccountItemsOpts,
    ) -> Result<AccountItems> {
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_field_order, test_client, test_token};

    const BODY: &str = r#"{
        "account_items": [{
            "id": 101,
            "name": "旅費交通費",
            "tax_code": 136,
            "shortcut": "RYOHI",
            "shortcut_num": "701",
            "default_tax_id": 34,
            "default_tax_code": 136,
            "account_category": "経費",
            "account_category_id": 14,
            "categories": ["販売管理費", "経費"],
            "available": true,
            "walletable_id": null,
            "group_name": "旅費交通費",
            "corresponding_income_name": "売掛金",
            "corresponding_income_id": 10,
            "corresponding_expense_name": "未払金",
            "corresponding_expense_id": 20
        }]
    }"#;

    #[tokio::test]
    async fn test_get_account_items() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/1/account_items?base_date=2021-04-01&company_id=1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(BODY)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let opts = GetAccountItemsOpts {
            base_date: Some("2021-04-01".to_string()),
        };
        let result = client
            .get_account_items(&test_token(), 1, &opts)
            .await
            .unwrap();

        assert_eq!(result.account_items.len(), 1);
        let item = &result.account_items[0];
        assert_eq!(item.name, "旅費交通費");
        assert_eq!(item.walletable_id, None);
        assert_field_order(item);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_account_items_without_opts() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/1/account_items?company_id=3")
            .with_status(200)
            .with_body(r#"{"account_items": []}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let result = client
            .get_account_items(&test_token(), 3, &GetAccountItemsOpts::default())
            .await
            .unwrap();

        assert!(result.account_items.is_empty());
        mock.assert_async().await;
    }
}
