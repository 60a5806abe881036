//! Expense application line templates (経費科目).

use serde::{Deserialize, Serialize};

use super::FieldOrder;
use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "expense_application_line_templates";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetExpenseApplicationLineTemplatesOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseApplicationLineTemplates {
    pub expense_application_line_templates: Vec<ExpenseApplicationLineTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseApplicationLineTemplate {
    pub id: i32,
    pub name: String,
    pub account_item_id: Option<i32>,
    pub account_item_name: String,
    pub tax_code: Option<i32>,
    pub tax_name: String,
    pub description: Option<String>,
    pub line_description: Option<String>,
    pub required_receipt: Option<bool>,
}

impl FieldOrder for ExpenseApplicationLineTemplate {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "account_item_id",
        "account_item_name",
        "tax_code",
        "tax_name",
        "description",
        "line_description",
        "required_receipt",
    ];
}

impl Client {
    /// Lists expense line templates (経費科目).
    pub async fn get_expense_application_line_templates(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetExpenseApplicationLineTemplatesOpts,
    ) -> Result<ExpenseApplicationLineTemplates> {
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }
}
