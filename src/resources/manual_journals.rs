//! Manual journals (振替伝票).

use serde::{Deserialize, Serialize};

use super::{EntrySide, FieldOrder};
use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "manual_journals";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetManualJournalsOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_side: Option<EntrySide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_item_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_1_tag_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_2_tag_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_3_tag_id: Option<i32>,
    /// posted_with_mention, raised_with_mention, resolved_with_mention, posted, raised, resolved, not_posted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_important: Option<bool>,
    /// only, without
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualJournals {
    pub manual_journals: Vec<ManualJournal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualJournalResponse {
    pub manual_journal: ManualJournal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualJournal {
    pub id: i32,
    pub company_id: i32,
    pub issue_date: String,
    /// 決算整理仕訳
    pub adjustment: bool,
    pub txn_number: Option<String>,
    pub details: Vec<ManualJournalDetail>,
}

impl FieldOrder for ManualJournal {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "company_id",
        "issue_date",
        "adjustment",
        "txn_number",
        "details",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualJournalDetail {
    pub id: i64,
    pub entry_side: EntrySide,
    pub account_item_id: i32,
    pub tax_code: i32,
    pub partner_id: Option<i32>,
    pub partner_name: Option<String>,
    pub partner_code: Option<String>,
    pub partner_long_name: Option<String>,
    pub item_id: Option<i32>,
    pub item_name: Option<String>,
    pub section_id: Option<i32>,
    pub section_name: Option<String>,
    pub tag_ids: Vec<i32>,
    pub tag_names: Vec<String>,
    pub segment_1_tag_id: Option<i32>,
    pub segment_1_tag_name: Option<String>,
    pub segment_2_tag_id: Option<i32>,
    pub segment_2_tag_name: Option<String>,
    pub segment_3_tag_id: Option<i32>,
    pub segment_3_tag_name: Option<String>,
    pub amount: i32,
    pub vat: i32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateManualJournalParams {
    pub company_id: i32,
    pub issue_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_number: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub adjustment: bool,
    pub details: Vec<ManualJournalParamsDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateManualJournalParams {
    pub company_id: i32,
    pub issue_date: String,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub adjustment: bool,
    /// Existing lines missing from this list are deleted; lines without `id` are added.
    pub details: Vec<ManualJournalParamsDetail>,
}

/// Journal line as sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualJournalParamsDetail {
    /// Only on update, to keep an existing line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub entry_side: EntrySide,
    pub tax_code: i32,
    pub account_item_id: i32,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag_ids: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_1_tag_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_2_tag_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_3_tag_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ManualJournalParamsDetail {
    /// A detail line with no tags, section or description.
    pub fn new(entry_side: EntrySide, account_item_id: i32, tax_code: i32, amount: i64) -> Self {
        Self {
            id: None,
            entry_side,
            tax_code,
            account_item_id,
            amount,
            vat: None,
            partner_id: None,
            partner_code: None,
            item_id: None,
            section_id: None,
            tag_ids: Vec::new(),
            segment_1_tag_id: None,
            segment_2_tag_id: None,
            segment_3_tag_id: None,
            description: None,
        }
    }
}

impl Client {
    /// Lists manual journals (振替伝票).
    pub async fn get_manual_journals(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetManualJournalsOpts,
    ) -> Result<ManualJournals> {
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }

    /// Creates a manual journal.
    pub async fn create_manual_journal(
        &self,
        token_source: &dyn TokenSource,
        params: &CreateManualJournalParams,
    ) -> Result<ManualJournalResponse> {
        self.post(token_source, PATH, params).await
    }

    /// Replaces a manual journal.
    pub async fn update_manual_journal(
        &self,
        token_source: &dyn TokenSource,
        journal_id: i32,
        params: &UpdateManualJournalParams,
    ) -> Result<ManualJournalResponse> {
        self.put(token_source, &format!("{}/{}", PATH, journal_id), params)
            .await
    }

    /// Deletes a manual journal.
    pub async fn destroy_manual_journal(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        journal_id: i32,
    ) -> Result<()> {
        self.delete(
            token_source,
            &format!("{}/{}", PATH, journal_id),
            &Query::with_company_id(company_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_field_order, test_client, test_token};
    use mockito::Matcher;

    const JOURNAL: &str = r#"{
        "id": 55,
        "company_id": 1,
        "issue_date": "2021-03-31",
        "adjustment": true,
        "txn_number": null,
        "details": [{
            "id": 1,
            "entry_side": "debit",
            "account_item_id": 803,
            "tax_code": 0,
            "partner_id": null,
            "partner_name": null,
            "partner_code": null,
            "partner_long_name": null,
            "item_id": null,
            "item_name": null,
            "section_id": null,
            "section_name": null,
            "tag_ids": [],
            "tag_names": [],
            "segment_1_tag_id": null,
            "segment_1_tag_name": null,
            "segment_2_tag_id": null,
            "segment_2_tag_name": null,
            "segment_3_tag_id": null,
            "segment_3_tag_name": null,
            "amount": 1000,
            "vat": 0,
            "description": "減価償却"
        }, {
            "id": 2,
            "entry_side": "credit",
            "account_item_id": 120,
            "tax_code": 0,
            "partner_id": null,
            "partner_name": null,
            "partner_code": null,
            "partner_long_name": null,
            "item_id": null,
            "item_name": null,
            "section_id": null,
            "section_name": null,
            "tag_ids": [],
            "tag_names": [],
            "segment_1_tag_id": null,
            "segment_1_tag_name": null,
            "segment_2_tag_id": null,
            "segment_2_tag_name": null,
            "segment_3_tag_id": null,
            "segment_3_tag_name": null,
            "amount": 1000,
            "vat": 0,
            "description": ""
        }]
    }"#;

    #[test]
    fn test_manual_journal_field_order() {
        let journal: ManualJournal = serde_json::from_str(JOURNAL).unwrap();
        assert_eq!(journal.details[1].entry_side, EntrySide::Credit);
        assert_field_order(&journal);
    }

    #[tokio::test]
    async fn test_get_manual_journals() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                "/api/1/manual_journals?entry_side=debit&adjustment=only&company_id=1",
            )
            .with_status(200)
            .with_body(format!(r#"{{"manual_journals": [{}]}}"#, JOURNAL))
            .create_async()
            .await;

        let client = test_client(&server.url());
        let opts = GetManualJournalsOpts {
            entry_side: Some(EntrySide::Debit),
            adjustment: Some("only".to_string()),
            ..Default::default()
        };
        let result = client
            .get_manual_journals(&test_token(), 1, &opts)
            .await
            .unwrap();

        assert!(result.manual_journals[0].adjustment);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_manual_journal() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/1/manual_journals")
            .match_body(Matcher::Json(serde_json::json!({
                "company_id": 1,
                "issue_date": "2021-03-31",
                "adjustment": true,
                "details": [
                    {"entry_side": "debit", "tax_code": 0, "account_item_id": 803, "amount": 1000},
                    {"entry_side": "credit", "tax_code": 0, "account_item_id": 120, "amount": 1000}
                ]
            })))
            .with_status(201)
            .with_body(format!(r#"{{"manual_journal": {}}}"#, JOURNAL))
            .create_async()
            .await;

        let params = CreateManualJournalParams {
            company_id: 1,
            issue_date: "2021-03-31".to_string(),
            txn_number: None,
            adjustment: true,
            details: vec![
                ManualJournalParamsDetail::new(EntrySide::Debit, 803, 0, 1000),
                ManualJournalParamsDetail::new(EntrySide::Credit, 120, 0, 1000),
            ],
        };
        let client = test_client(&server.url());
        let result = client
            .create_manual_journal(&test_token(), &params)
            .await
            .unwrap();

        assert_eq!(result.manual_journal.id, 55);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_manual_journal() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/1/manual_journals/55")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "details": [{"id": 1, "amount": 2000}]
            })))
            .with_status(200)
            .with_body(format!(r#"{{"manual_journal": {}}}"#, JOURNAL))
            .create_async()
            .await;

        let params = UpdateManualJournalParams {
            company_id: 1,
            issue_date: "2021-03-31".to_string(),
            adjustment: false,
            details: vec![ManualJournalParamsDetail {
                id: Some(1),
                ..ManualJournalParamsDetail::new(EntrySide::Debit, 803, 0, 2000)
            }],
        };
        let client = test_client(&server.url());
        client
            .update_manual_journal(&test_token(), 55, &params)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_destroy_manual_journal() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/1/manual_journals/55?company_id=1")
            .with_status(204)
            .create_async()
            .await;

        let client = test_client(&server.url());
        client
            .destroy_manual_journal(&test_token(), 1, 55)
            .await
            .unwrap();

        mock.assert_async().await;
    }
}
