//! Items (品目).

use serde::{Deserialize, Serialize};

use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "items";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetItemsOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Items {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ItemResponse {
    item: Item,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub update_date: String,
    pub available: bool,
    pub shortcut1: Option<String>,
    pub shortcut2: Option<String>,
}

/// Body for creating or updating an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemParams {
    pub company_id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut2: Option<String>,
}

impl Client {
    /// Lists items (品目).
    pub async fn get_items(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetItemsOpts,
    ) -> Result<Items> {
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }

    /// Creates an item.
    pub async fn create_item(
        &self,
        token_source: &dyn TokenSource,
        params: &ItemParams,
    ) -> Result<Item> {
        let response: ItemResponse = self.post(token_source, PATH, params).await?;
        Ok(response.item)
    }

    /// Renames or otherwise updates an item.
    pub async fn update_item(
        &self,
        token_source: &dyn TokenSource,
        item_id: i32,
        params: &ItemParams,
    ) -> Result<Item> {
        let response: ItemResponse = self
            .put(token_source, &format!("{}/{}", PATH, item_id), params)
            .await?;
        Ok(response.item)
    }

    /// Deletes an item.
    pub async fn destroy_item(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        item_id: i32,
    ) -> Result<()> {
        self.delete(
            token_source,
            &format!("{}/{}", PATH, item_id),
            &Query::with_company_id(company_id),
        )
        .await
    }
}
