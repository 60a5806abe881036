//! Selectable account items for entry forms (勘定科目の選択肢).

use serde::{Deserialize, Serialize};

use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "forms/selectables";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetSelectablesOpts {
    /// Comma separated: `account_groups`, `default_tax`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub includes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selectables {
    pub account_categories: Vec<AccountCategory>,
    #[serde(default)]
    pub account_groups: Vec<AccountGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCategory {
    /// `debit` or `credit`.
    pub balance: String,
    pub org_code: String,
    pub role: String,
    pub title: String,
    pub desc: Option<String>,
    pub account_items: Vec<SelectableAccountItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableAccountItem {
    pub id: i32,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub help: Option<String>,
    pub shortcut: Option<String>,
    pub default_tax: Option<DefaultTax>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultTax {
    pub tax_rate_5: Option<TaxRate>,
    pub tax_rate_8: Option<TaxRate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountGroup {
    pub id: i32,
    pub name: String,
    pub account_structure_id: i32,
    pub account_category_id: i32,
    pub detail_type: Option<i32>,
    pub index: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Client {
    /// Lists the account items selectable in forms, grouped by category.
    pub async fn get_selectables(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetSelectablesOpts,
    ) -> Result<Selectables> {
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_client, test_token};

    #[tokio::test]
    async fn test_get_selectables() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                "/api/1/forms/selectables?includes=default_tax%2Caccount_groups&company_id=1",
            )
            .with_status(200)
            .with_body(
                r#"{
                    "account_categories": [{
                        "balance": "debit",
                        "org_code": "expense",
                        "role": "sga",
                        "title": "経費",
                        "desc": null,
                        "account_items": [{
                            "id": 101,
                            "name": "旅費交通費",
                            "desc": null,
                            "help": "電車代など",
                            "shortcut": "RYOHI",
                            "default_tax": {
                                "tax_rate_5": {"id": 34, "name": "課対仕入5%"},
                                "tax_rate_8": {"id": 136, "name": "課対仕入8%"}
                            }
                        }]
                    }],
                    "account_groups": [{
                        "id": 3,
                        "name": "旅費",
                        "account_structure_id": 1,
                        "account_category_id": 12,
                        "detail_type": null,
                        "index": 0,
                        "created_at": null,
                        "updated_at": null
                    }]
                }"#,
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let opts = GetSelectablesOpts {
            includes: Some("default_tax,account_groups".to_string()),
        };
        let result = client
            .get_selectables(&test_token(), 1, &opts)
            .await
            .unwrap();

        let item = &result.account_categories[0].account_items[0];
        assert_eq!(item.shortcut.as_deref(), Some("RYOHI"));
        assert_eq!(
            item.default_tax.as_ref().and_then(|t| t.tax_rate_8.as_ref()).map(|r| r.id),
            Some(136)
        );
        assert_eq!(result.account_groups[0].account_category_id, 12);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_account_groups_absent() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/1/forms/selectables?company_id=1")
            .with_status(200)
            .with_body(r#"{"account_categories": []}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let result = client
            .get_selectables(&test_token(), 1, &GetSelectablesOpts::default())
            .await
            .unwrap();

        assert!(result.account_groups.is_empty());
    }
}
