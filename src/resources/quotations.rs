//! Quotations (見積書). Line items share their shape with invoices.

use serde::{Deserialize, Serialize};

use super::invoices::{InvoiceContent, TotalAmountPerVatRate};
use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "quotations";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetQuotationsOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotation_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// all, unsubmitted, submitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotation_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotations {
    pub quotations: Vec<Quotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: i32,
    pub company_id: i32,
    pub issue_date: String,
    pub partner_id: i32,
    pub partner_code: Option<String>,
    pub quotation_number: String,
    pub title: Option<String>,
    pub total_amount: i32,
    pub total_vat: Option<i32>,
    pub sub_total: Option<i32>,
    pub description: Option<String>,
    pub quotation_status: String,
    pub web_published_at: Option<String>,
    pub web_downloaded_at: Option<String>,
    pub web_confirmed_at: Option<String>,
    pub mail_sent_at: Option<String>,
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
    pub message: Option<String>,
    pub notes: Option<String>,
    pub quotation_layout: String,
    pub tax_entry_method: String,
    pub quotation_contents: Option<Vec<InvoiceContent>>,
    pub total_amount_per_vat_rate: Option<TotalAmountPerVatRate>,
}

impl Client {
    /// Lists quotations (見積書).
    pub async fn get_quotations(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetQuotationsOpts,
    ) -> Result<Quotations> {
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }
}
