//! Receipts (証憑ファイル). Creating one is the only multipart upload in the API.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::FieldOrder;
use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "receipts";

/// Upload parameters. The file travels as the `receipt` form part.
#[derive(Clone, PartialEq, Eq)]
pub struct CreateReceiptParams {
    pub company_id: i32,
    pub description: Option<String>,
    /// yyyy-mm-dd
    pub issue_date: String,
    pub receipt: Vec<u8>,
}

impl CreateReceiptParams {
    /// Scalar form fields, in the order they are written to the form.
    fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("company_id".to_string(), self.company_id.to_string()),
            ("issue_date".to_string(), self.issue_date.clone()),
        ];
        if let Some(description) = &self.description {
            fields.push(("description".to_string(), description.clone()));
        }
        fields
    }
}

impl std::fmt::Debug for CreateReceiptParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateReceiptParams")
            .field("company_id", &self.company_id)
            .field("description", &self.description)
            .field("issue_date", &self.issue_date)
            .field("receipt", &format_args!("<{} bytes>", self.receipt.len()))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetReceiptsOpts {
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,
    /// posted, raised, resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_important: Option<bool>,
    /// all, without_deal, with_expense_application_line, with_deal, ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl GetReceiptsOpts {
    /// Options covering the given date range.
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            user_name: None,
            number: None,
            comment_type: None,
            comment_important: None,
            category: None,
            offset: None,
            limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipts {
    pub receipts: Vec<Receipt>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptResponse {
    pub receipt: Receipt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: i32,
    /// unconfirmed, confirmed, deleted, ignored
    pub status: String,
    pub description: Option<String>,
    pub mime_type: String,
    pub issue_date: Option<String>,
    pub origin: String,
    pub created_at: String,
    pub user: ReceiptUser,
}

impl FieldOrder for Receipt {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "status",
        "description",
        "mime_type",
        "issue_date",
        "origin",
        "created_at",
        "user",
    ];
}

/// The user who uploaded the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptUser {
    pub id: i32,
    pub email: String,
    pub display_name: Option<String>,
}

impl Client {
    /// Uploads a receipt file named `file_name`.
    #[tracing::instrument(skip(self, token_source))]
    pub async fn create_receipt(
        &self,
        token_source: &dyn TokenSource,
        params: &CreateReceiptParams,
        file_name: &str,
    ) -> Result<ReceiptResponse> {
        self.post_files(
            token_source,
            Method::POST,
            PATH,
            &Query::new(),
            &params.form_fields(),
            file_name,
            params.receipt.clone(),
        )
        .await
    }

    /// Fetches one receipt (証憑ファイル).
    pub async fn get_receipt(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        receipt_id: i32,
    ) -> Result<ReceiptResponse> {
        self.get(
            token_source,
            &format!("{}/{}", PATH, receipt_id),
            &Query::with_company_id(company_id),
        )
        .await
    }

    /// Lists receipts uploaded in a date range.
    pub async fn get_receipts(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetReceiptsOpts,
    ) -> Result<Receipts> {
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }
}
