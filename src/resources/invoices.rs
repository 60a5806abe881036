//! Invoices (請求書).

use serde::{Deserialize, Serialize};

use super::FieldOrder;
use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "invoices";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetInvoicesOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// draft, applying, remanded, rejected, approved, issued, unsubmitted, submitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_status: Option<String>,
    /// unsettled, settled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoices {
    pub invoices: Vec<Invoice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i32,
    pub company_id: i32,
    pub issue_date: String,
    pub partner_id: i32,
    pub partner_code: Option<String>,
    pub invoice_number: String,
    pub title: Option<String>,
    pub due_date: Option<String>,
    pub total_amount: i32,
    pub total_vat: Option<i32>,
    pub sub_total: Option<i32>,
    pub booking_date: Option<String>,
    pub description: Option<String>,
    pub invoice_status: String,
    pub payment_status: Option<String>,
    pub payment_date: Option<String>,
    pub web_published_at: Option<String>,
    pub web_downloaded_at: Option<String>,
    pub web_confirmed_at: Option<String>,
    pub mail_sent_at: Option<String>,
    pub posting_status: String,
    pub partner_name: Option<String>,
    pub partner_display_name: Option<String>,
    pub partner_title: Option<String>,
    pub partner_zipcode: Option<String>,
    pub partner_prefecture_code: Option<i32>,
    pub partner_prefecture_name: Option<String>,
    pub partner_address1: Option<String>,
    pub partner_address2: Option<String>,
    pub partner_contact_info: Option<String>,
    pub company_name: String,
    pub company_zipcode: Option<String>,
    pub company_prefecture_code: Option<i32>,
    pub company_prefecture_name: Option<String>,
    pub company_address1: Option<String>,
    pub company_address2: Option<String>,
    pub company_contact_info: Option<String>,
    pub payment_type: String,
    pub payment_bank_info: Option<String>,
    pub message: Option<String>,
    pub notes: Option<String>,
    pub invoice_layout: String,
    pub tax_entry_method: String,
    pub deal_id: Option<i32>,
    pub invoice_contents: Option<Vec<InvoiceContent>>,
    pub total_amount_per_vat_rate: TotalAmountPerVatRate,
}

impl FieldOrder for Invoice {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "company_id",
        "issue_date",
        "partner_id",
        "partner_code",
        "invoice_number",
        "title",
        "due_date",
        "total_amount",
        "total_vat",
        "sub_total",
        "booking_date",
        "description",
        "invoice_status",
        "payment_status",
        "payment_date",
        "web_published_at",
        "web_downloaded_at",
        "web_confirmed_at",
        "mail_sent_at",
        "posting_status",
        "partner_name",
        "partner_display_name",
        "partner_title",
        "partner_zipcode",
        "partner_prefecture_code",
        "partner_prefecture_name",
        "partner_address1",
        "partner_address2",
        "partner_contact_info",
        "company_name",
        "company_zipcode",
        "company_prefecture_code",
        "company_prefecture_name",
        "company_address1",
        "company_address2",
        "company_contact_info",
        "payment_type",
        "payment_bank_info",
        "message",
        "notes",
        "invoice_layout",
        "tax_entry_method",
        "deal_id",
        "invoice_contents",
        "total_amount_per_vat_rate",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceContent {
    pub id: i32,
    pub order: i32,
    /// normal, discount, text
    #[serde(rename = "type")]
    pub kind: String,
    pub qty: f64,
    pub unit: String,
    pub unit_price: f64,
    pub amount: i32,
    pub vat: i32,
    pub reduced_vat: bool,
    pub description: String,
    pub account_item_id: i32,
    pub account_item_name: String,
    pub tax_code: i32,
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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalAmountPerVatRate {
    pub vat_5: u64,
    pub vat_8: u64,
    pub reduced_vat_8: u64,
    pub vat_10: u64,
}

impl Client {
    /// Lists invoices (請求書).
    pub async fn get_invoices(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetInvoicesOpts,
    ) -> Result<Invoices> {
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }
}
