//! Memo tags (メモタグ).

use serde::{Deserialize, Serialize};

use super::FieldOrder;
use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "tags";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetTagsOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_update_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_update_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags {
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TagResponse {
    tag: Tag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub update_date: String,
    pub shortcut1: Option<String>,
    pub shortcut2: Option<String>,
}

impl FieldOrder for Tag {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "company_id",
        "name",
        "update_date",
        "shortcut1",
        "shortcut2",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagParams {
    pub company_id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut2: Option<String>,
}

impl Client {
    /// Lists memo tags (メモタグ).
    pub async fn get_tags(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetTagsOpts,
    ) -> Result<Tags> {
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }

    /// Fetches one memo tag.
    pub async fn get_tag(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        tag_id: i32,
    ) -> Result<Tag> {
        let response: TagResponse = self
            .get(
                token_source,
                &format!("{}/{}", PATH, tag_id),
                &Query::with_company_id(company_id),
            )
            .await?;
        Ok(response.tag)
    }

    /// Creates a memo tag.
    pub async fn create_tag(
        &self,
        token_source: &dyn TokenSource,
        params: &TagParams,
    ) -> Result<Tag> {
        let response: TagResponse = self.post(token_source, PATH, params).await?;
        Ok(response.tag)
    }

    /// Updates a memo tag.
    pub async fn update_tag(
        &self,
        token_source: &dyn TokenSource,
        tag_id: i32,
        params: &TagParams,
    ) -> Result<Tag> {
        let response: TagResponse = self
            .put(token_source, &format!("{}/{}", PATH, tag_id), params)
            .await?;
        Ok(response.tag)
    }

    /// Deletes a memo tag.
    pub async fn destroy_tag(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        tag_id: i32,
    ) -> Result<()> {
        self.delete(
            token_source,
            &format!("{}/{}", PATH, tag_id),
            &Query::with_company_id(company_id),
        )
        .await
    }
}
