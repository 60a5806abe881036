//! Segment tags (セグメントタグ). A company has up to three segments.

use serde::{Deserialize, Serialize};

use super::FieldOrder;
use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

/// One of the three segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentId {
    One,
    Two,
    Three,
}

impl SegmentId {
    pub fn number(self) -> u32 {
        match self {
            SegmentId::One => 1,
            SegmentId::Two => 2,
            SegmentId::Three => 3,
        }
    }

    fn tags_path(self) -> String {
        format!("segments/{}/tags", self.number())
    }
}

impl TryFrom<u32> for SegmentId {
    type Error = crate::error::Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            1 => Ok(SegmentId::One),
            2 => Ok(SegmentId::Two),
            3 => Ok(SegmentId::Three),
            other => Err(crate::error::Error::InvalidParams(format!(
                "segment id must be 1, 2 or 3, got {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetSegmentTagsOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentTags {
    pub segment_tags: Vec<SegmentTag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SegmentTagResponse {
    segment_tag: SegmentTag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentTag {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub shortcut1: Option<String>,
    pub shortcut2: Option<String>,
}

impl FieldOrder for SegmentTag {
    const FIELDS: &'static [&'static str] =
        &["id", "name", "description", "shortcut1", "shortcut2"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentTagParams {
    pub company_id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut2: Option<String>,
}

impl Client {
    /// Lists the tags of one segment.
    pub async fn get_segment_tags(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        segment: SegmentId,
        opts: &GetSegmentTagsOpts,
    ) -> Result<SegmentTags> {
        self.get(
            token_source,
            &segment.tags_path(),
            &Query::for_company(company_id, opts)?,
        )
        .await
    }

    /// Adds a tag to a segment.
    pub async fn create_segment_tag(
        &self,
        token_source: &dyn TokenSource,
        segment: SegmentId,
        params: &SegmentTagParams,
    ) -> Result<SegmentTag> {
        let response: SegmentTagResponse = self
            .post(token_source, &segment.tags_path(), params)
            .await?;
        Ok(response.segment_tag)
    }

    /// Updates a segment tag.
    pub async fn update_segment_tag(
        &self,
        token_source: &dyn TokenSource,
        segment: SegmentId,
        tag_id: i32,
        params: &SegmentTagParams,
    ) -> Result<SegmentTag> {
        let response: SegmentTagResponse = self
            .put(
                token_source,
                &format!("{}/{}", segment.tags_path(), tag_id),
                params,
            )
            .await?;
        Ok(response.segment_tag)
    }

    /// Deletes a segment tag.
    pub async fn destroy_segment_tag(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        segment: SegmentId,
        tag_id: i32,
    ) -> Result<()> {
        self.delete(
            token_source,
            &format!("{}/{}", segment.tags_path(), tag_id),
            &Query::with_company_id(company_id),
        )
        .await
    }
}
