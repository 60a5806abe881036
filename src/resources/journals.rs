//! Journal exports (仕訳帳). Requesting one starts an asynchronous export job.

use serde::{Deserialize, Serialize};

use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "journals";

/// Export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalDownloadType {
    Generic,
    GenericV2,
    Csv,
    Pdf,
    Yayoi,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetJournalsOpts {
    pub download_type: JournalDownloadType,
    /// Sent as one `visible_tags` pair per entry.
    #[serde(skip)]
    pub visible_tags: Vec<String>,
    /// Sent as one `visible_ids` pair per entry.
    #[serde(skip)]
    pub visible_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl GetJournalsOpts {
    /// Options with only the required download type set.
    pub fn new(download_type: JournalDownloadType) -> Self {
        Self {
            download_type,
            visible_tags: Vec::new(),
            visible_ids: Vec::new(),
            start_date: None,
            end_date: None,
        }
    }

    fn to_query(&self, company_id: i32) -> Result<Query> {
        let mut query = Query::from_params(self)?;
        for tag in &self.visible_tags {
            query.append("visible_tags", tag);
        }
        for id in &self.visible_ids {
            query.append("visible_ids", id);
        }
        query.set("company_id", company_id);
        Ok(query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journals {
    pub journals: Journal,
}

/// Status of an export job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    pub id: i32,
    pub messages: Option<Vec<String>>,
    pub company_id: i32,
    pub download_type: Option<JournalDownloadType>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub visible_tags: Option<Vec<String>>,
    pub visible_ids: Option<Vec<String>>,
    /// Poll this URL for the export result.
    pub status_url: Option<String>,
    pub up_to_date: Option<bool>,
    pub up_to_date_reasons: Option<Vec<UpToDateReason>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpToDateReason {
    pub code: String,
    pub message: String,
}

impl Client {
    /// Requests a journal export. The result carries a `status_url` to poll.
    #[tracing::instrument(skip(self, token_source))]
    pub async fn get_journals(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetJournalsOpts,
    ) -> Result<Journals> {
        self.get(token_source, PATH, &opts.to_query(company_id)?)
            .await
    }
}
