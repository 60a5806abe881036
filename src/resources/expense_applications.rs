//! Expense applications (経費申請).

use serde::{Deserialize, Serialize};

use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "expense_applications";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetExpenseApplicationsOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payroll_attached: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_transaction_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_transaction_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseApplications {
    pub expense_applications: Vec<ExpenseApplication>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseApplication {
    pub id: i32,
    pub company_id: i32,
    pub title: String,
    pub issue_date: String,
    pub description: Option<String>,
    pub total_amount: Option<i32>,
    pub status: String,
    pub section_id: Option<i32>,
    pub tag_ids: Option<Vec<i32>>,
    pub expense_application_lines: Vec<ExpenseApplicationLine>,
    pub deal_id: Option<i32>,
    pub deal_status: Option<String>,
    pub applicant_id: i32,
    pub application_number: String,
    pub current_step_id: Option<i32>,
    pub current_round: Option<i32>,
    pub segment_1_tag_id: Option<i32>,
    pub segment_2_tag_id: Option<i32>,
    pub segment_3_tag_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseApplicationLine {
    pub id: i32,
    pub transaction_date: Option<String>,
    pub description: Option<String>,
    pub amount: Option<i32>,
    pub expense_application_line_template_id: Option<i32>,
    pub receipt_id: Option<i32>,
}

impl Client {
    /// Lists expense applications (経費申請).
    pub async fn get_expense_applications(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetExpenseApplicationsOpts,
    ) -> Result<ExpenseApplications> {
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }
}
