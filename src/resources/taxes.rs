//! Tax codes (税区分).

use serde::{Deserialize, Serialize};

use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "taxes";

/// Rate bucket a company tax code is shown under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxDisplayCategory {
    #[serde(rename = "tax_5")]
    Tax5,
    #[serde(rename = "tax_8")]
    Tax8,
    /// Reduced 8% rate.
    #[serde(rename = "tax_r8")]
    TaxR8,
    #[serde(rename = "tax_10")]
    Tax10,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCodes {
    #[serde(rename = "taxes")]
    pub tax_codes: Vec<TaxCode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCode {
    pub code: i32,
    pub name: String,
    pub name_ja: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCompanies {
    #[serde(rename = "taxes")]
    pub tax_companies: Vec<TaxCompany>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCompany {
    pub code: i32,
    pub name: String,
    pub name_ja: String,
    /// Absent for codes outside the rate buckets, such as 対象外.
    pub display_category: Option<TaxDisplayCategory>,
    pub available: bool,
}

impl Client {
    /// Tax codes shared by every company.
    pub async fn get_tax_codes(&self, token_source: &dyn TokenSource) -> Result<TaxCodes> {
        self.get(token_source, &format!("{}/codes", PATH), &Query::new())
            .await
    }

    /// Tax codes as configured for one company.
    pub async fn get_tax_companies(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
    ) -> Result<TaxCompanies> {
        self.get(
            token_source,
            &format!("{}/companies/{}", PATH, company_id),
            &Query::with_company_id(company_id),
        )
        .await
    }
}
