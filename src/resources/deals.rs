//! Deals (取引): income and expense transactions with their lines and payments.

use serde::{Deserialize, Serialize};

use super::{EntrySide, FieldOrder, WalletableType};
use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "deals";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealType {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStatus {
    Settled,
    Unsettled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetDealsOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_item_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DealStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub deal_type: Option<DealType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_renew_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_renew_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// `me` limits results to deals registered by this application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_from: Option<String>,
    /// `with` includes accrual lines, `without` (default) leaves them out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accruals: Option<String>,
}

/// Options for fetching a single deal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetDealOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accruals: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deals {
    pub deals: Vec<Deal>,
    pub meta: DealsMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealsMeta {
    pub total_count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct DealResponse {
    deal: Deal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub id: u64,
    pub company_id: i32,
    pub issue_date: String,
    pub due_date: Option<String>,
    pub amount: i32,
    pub due_amount: Option<i32>,
    #[serde(rename = "type")]
    pub deal_type: Option<DealType>,
    pub partner_id: Option<i32>,
    pub partner_code: Option<String>,
    pub ref_number: Option<String>,
    pub status: DealStatus,
    pub details: Option<Vec<DealDetail>>,
    pub renews: Option<Vec<DealRenew>>,
    pub payments: Option<Vec<DealPayment>>,
    pub receipts: Option<Vec<DealReceipt>>,
}

impl FieldOrder for Deal {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "company_id",
        "issue_date",
        "due_date",
        "amount",
        "due_amount",
        "type",
        "partner_id",
        "partner_code",
        "ref_number",
        "status",
        "details",
        "renews",
        "payments",
        "receipts",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealDetail {
    pub id: u64,
    pub account_item_id: i32,
    pub tax_code: i32,
    pub item_id: Option<i32>,
    pub section_id: Option<i32>,
    pub tag_ids: Option<Vec<i32>>,
    pub segment_1_tag_id: Option<i32>,
    pub segment_2_tag_id: Option<i32>,
    pub segment_3_tag_id: Option<i32>,
    /// Tax-inclusive amount.
    pub amount: i32,
    pub vat: i32,
    pub description: Option<String>,
    pub entry_side: EntrySide,
}

/// A "+更新" line: an adjustment applied to an existing deal line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealRenew {
    pub id: u64,
    pub update_date: String,
    pub renew_target_id: i64,
    pub renew_target_type: String,
    pub details: Vec<DealDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealPayment {
    pub id: u64,
    pub date: String,
    pub from_walletable_type: Option<WalletableType>,
    pub from_walletable_id: Option<i32>,
    pub amount: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealReceipt {
    pub id: i32,
    pub status: String,
    pub description: Option<String>,
    pub mime_type: String,
    pub issue_date: Option<String>,
    pub origin: String,
    pub created_at: String,
    pub user: DealUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealUser {
    pub id: i32,
    pub email: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealCreateParams {
    pub issue_date: String,
    #[serde(rename = "type")]
    pub deal_type: DealType,
    pub company_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_number: Option<String>,
    pub details: Vec<DealParamsDetail>,
    /// Leave empty to register an unsettled deal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<DealParamsPayment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_ids: Option<Vec<i32>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealUpdateParams {
    pub issue_date: String,
    #[serde(rename = "type")]
    pub deal_type: DealType,
    pub company_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_number: Option<String>,
    /// Existing lines missing from this list are deleted; lines without `id` are added.
    pub details: Vec<DealParamsDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_ids: Option<Vec<i32>>,
}

/// Deal line as sent on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealParamsDetail {
    /// Only on update, to keep an existing line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub tax_code: i32,
    pub account_item_id: i32,
    pub amount: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_1_tag_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_2_tag_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_3_tag_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Computed by freee when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealParamsPayment {
    pub amount: i32,
    pub from_walletable_id: i32,
    pub from_walletable_type: WalletableType,
    pub date: String,
}

impl Client {
    /// Lists deals (取引).
    #[tracing::instrument(skip(self, token_source))]
    pub async fn get_deals(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetDealsOpts,
    ) -> Result<Deals> {
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }

    /// Fetches one deal.
    pub async fn get_deal(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        deal_id: u64,
        opts: &GetDealOpts,
    ) -> Result<Deal> {
        let response: DealResponse = self
            .get(
                token_source,
                &format!("{}/{}", PATH, deal_id),
                &Query::for_company(company_id, opts)?,
            )
            .await?;
        Ok(response.deal)
    }

    /// Creates a deal and returns it as stored.
    pub async fn create_deal(
        &self,
        token_source: &dyn TokenSource,
        params: &DealCreateParams,
    ) -> Result<Deal> {
        let response: DealResponse = self.post(token_source, PATH, params).await?;
        Ok(response.deal)
    }

    /// Replaces a deal.
    pub async fn update_deal(
        &self,
        token_source: &dyn TokenSource,
        deal_id: u64,
        params: &DealUpdateParams,
    ) -> Result<Deal> {
        let response: DealResponse = self
            .put(token_source, &format!("{}/{}", PATH, deal_id), params)
            .await?;
        Ok(response.deal)
    }

    /// Deletes a deal.
    pub async fn destroy_deal(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        deal_id: u64,
    ) -> Result<()> {
        self.delete(
            token_source,
            &format!("{}/{}", PATH, deal_id),
            &Query::with_company_id(company_id),
        )
        .await
    }
}
