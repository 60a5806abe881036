//! Trial balance reports (試算表): balance sheet, P&L and cost report,
//! each for one, two or three fiscal years.

use std::collections::HashMap;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::auth::TokenSource;
use crate::error::{Error, Result};
use crate::http::{Client, Query};

const PATH: &str = "reports";

/// Which trial balance to fetch. The path segment doubles as the response key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrialBalanceKind {
    Bs,
    BsTwoYears,
    BsThreeYears,
    Pl,
    PlTwoYears,
    PlThreeYears,
    Cr,
    CrTwoYears,
    CrThreeYears,
}

impl TrialBalanceKind {
    pub const ALL: [TrialBalanceKind; 9] = [
        TrialBalanceKind::Bs,
        TrialBalanceKind::BsTwoYears,
        TrialBalanceKind::BsThreeYears,
        TrialBalanceKind::Pl,
        TrialBalanceKind::PlTwoYears,
        TrialBalanceKind::PlThreeYears,
        TrialBalanceKind::Cr,
        TrialBalanceKind::CrTwoYears,
        TrialBalanceKind::CrThreeYears,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TrialBalanceKind::Bs => "trial_bs",
            TrialBalanceKind::BsTwoYears => "trial_bs_two_years",
            TrialBalanceKind::BsThreeYears => "trial_bs_three_years",
            TrialBalanceKind::Pl => "trial_pl",
            TrialBalanceKind::PlTwoYears => "trial_pl_two_years",
            TrialBalanceKind::PlThreeYears => "trial_pl_three_years",
            TrialBalanceKind::Cr => "trial_cr",
            TrialBalanceKind::CrTwoYears => "trial_cr_two_years",
            TrialBalanceKind::CrThreeYears => "trial_cr_three_years",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetReportsOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_month: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_month: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// account_item or group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_item_display_type: Option<String>,
    /// partner, item, section, segment_1_tag, segment_2_tag, segment_3_tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown_display_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<i32>,
    /// only or without
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_allocation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_flow_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub company_id: i32,
    pub fiscal_year: Option<i32>,
    pub start_month: Option<i32>,
    pub end_month: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub account_item_display_type: Option<String>,
    pub breakdown_display_type: Option<String>,
    pub partner_id: Option<i32>,
    pub partner_code: Option<String>,
    pub item_id: Option<i32>,
    pub section_id: Option<i32>,
    pub adjustment: Option<String>,
    pub approval_flow_status: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub balances: Vec<Balance>,
    pub up_to_date: bool,
    pub up_to_date_reasons: Option<Vec<super::journals::UpToDateReason>>,
    pub cost_allocation: Option<String>,
}

/// One row of a report. Multi-year reports fill the prior-year columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balance {
    pub account_item_id: Option<i32>,
    pub account_item_name: Option<String>,
    pub account_group_name: Option<String>,
    pub partners: Option<Vec<BalanceBreakdown>>,
    pub items: Option<Vec<BalanceBreakdown>>,
    pub sections: Option<Vec<BalanceBreakdown>>,
    pub segment_1_tags: Option<Vec<BalanceBreakdown>>,
    pub segment_2_tags: Option<Vec<BalanceBreakdown>>,
    pub segment_3_tags: Option<Vec<BalanceBreakdown>>,
    pub account_category_name: Option<String>,
    pub total_line: Option<bool>,
    pub hierarchy_level: Option<i32>,
    pub parent_account_category_name: Option<String>,
    pub opening_balance: Option<i64>,
    pub debit_amount: Option<i64>,
    pub credit_amount: Option<i64>,
    pub closing_balance: Option<i64>,
    pub composition_ratio: Option<f64>,
    pub last_year_closing_balance: Option<i64>,
    pub year_on_year: Option<f64>,
    pub two_years_before_closing_balance: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceBreakdown {
    pub id: i32,
    pub name: Option<String>,
    pub opening_balance: Option<i64>,
    pub debit_amount: Option<i64>,
    pub credit_amount: Option<i64>,
    pub closing_balance: Option<i64>,
    pub composition_ratio: Option<f64>,
    pub last_year_closing_balance: Option<i64>,
    pub year_on_year: Option<f64>,
    pub two_years_before_closing_balance: Option<i64>,
}

impl Client {
    /// Fetches one trial balance. The report sits under a key named after `kind`.
    #[tracing::instrument(skip(self, token_source))]
    pub async fn get_trial_balance(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        kind: TrialBalanceKind,
        opts: &GetReportsOpts,
    ) -> Result<Report> {
        let mut response: HashMap<String, Report> = self
            .get(
                token_source,
                &format!("{}/{}", PATH, kind.key()),
                &Query::for_company(company_id, opts)?,
            )
            .await?;
        response
            .remove(kind.key())
            .ok_or_else(|| Error::Decode(serde_json::Error::missing_field(kind.key())))
    }

    /// Balance sheet trial balance.
    pub async fn get_trial_bs(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetReportsOpts,
    ) -> Result<Report> {
        self.get_trial_balance(token_source, company_id, TrialBalanceKind::Bs, opts)
            .await
    }

    /// Balance sheet trial balance compared with the previous year.
    pub async fn get_trial_bs_two_years(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetReportsOpts,
    ) -> Result<Report> {
        self.get_trial_balance(token_source, company_id, TrialBalanceKind::BsTwoYears, opts)
            .await
    }

    /// Balance sheet trial balance over three years.
    pub async fn get_trial_bs_three_years(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetReportsOpts,
    ) -> Result<Report> {
        self.get_trial_balance(token_source, company_id, TrialBalanceKind::BsThreeYears, opts)
            .await
    }

    /// Profit and loss trial balance.
    pub async fn get_trial_pl(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetReportsOpts,
    ) -> Result<Report> {
        self.get_trial_balance(token_source, company_id, TrialBalanceKind::Pl, opts)
            .await
    }

    /// Profit and loss trial balance compared with the previous year.
    pub async fn get_trial_pl_two_years(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetReportsOpts,
    ) -> Result<Report> {
        self.get_trial_balance(token_source, company_id, TrialBalanceKind::PlTwoYears, opts)
            .await
    }

    /// Profit and loss trial balance over three years.
    pub async fn get_trial_pl_three_years(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetReportsOpts,
    ) -> Result<Report> {
        self.get_trial_balance(token_source, company_id, TrialBalanceKind::PlThreeYears, opts)
            .await
    }

    /// Cost report trial balance.
    pub async fn get_trial_cr(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetReportsOpts,
    ) -> Result<Report> {
        self.get_trial_balance(token_source, company_id, TrialBalanceKind::Cr, opts)
            .await
    }

    /// Cost report trial balance compared with the previous year.
    pub async fn get_trial_cr_two_years(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetReportsOpts,
    ) -> Result<Report> {
        self.get_trial_balance(token_source, company_id, TrialBalanceKind::CrTwoYears, opts)
            .await
    }

    /// Cost report trial balance over three years.
    pub async fn get_trial_cr_three_years(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetReportsOpts,
    ) -> Result<Report> {
        self.get_trial_balance(token_source, company_id, TrialBalanceKind::CrThreeYears, opts)
            .await
    }
}
