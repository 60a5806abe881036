//! Typed endpoints, one module per freee resource.
//!
//! Every endpoint is an `async fn` on [`crate::Client`] taking the caller's
//! [`crate::TokenSource`]. List options are plain structs whose `None` fields are
//! left out of the query string.

pub mod account_items;
pub mod approval_flow_routes;
pub mod approval_requests;
pub mod banks;
pub mod deals;
pub mod expense_application_line_templates;
pub mod expense_applications;
pub mod invoices;
pub mod items;
pub mod journals;
pub mod manual_journals;
pub mod payment_requests;
pub mod quotations;
pub mod receipts;
pub mod sections;
pub mod segment_tags;
pub mod selectables;
pub mod tags;
pub mod taxes;
pub mod transfers;
pub mod trial_balance;
pub mod users;
pub mod wallet_txns;
pub mod walletables;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// JSON field names of a record type, in declaration order.
///
/// Lets callers lay out records as table columns without inspecting the type.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

/// Kind of account money moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletableType {
    BankAccount,
    CreditCard,
    Wallet,
    /// Owner's private funds; the id is then an account item id.
    PrivateAccountItem,
}

impl WalletableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletableType::BankAccount => "bank_account",
            WalletableType::CreditCard => "credit_card",
            WalletableType::Wallet => "wallet",
            WalletableType::PrivateAccountItem => "private_account_item",
        }
    }
}

impl std::fmt::Display for WalletableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Debit or credit side of a journal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySide {
    Credit,
    Debit,
}

/// `walletable_type` and `walletable_id` filter together or not at all.
pub(crate) fn check_walletable_pair<T>(
    walletable_type: Option<WalletableType>,
    walletable_id: Option<T>,
) -> Result<()> {
    match (walletable_type, walletable_id) {
        (Some(_), None) => Err(Error::InvalidParams(
            "walletable_id is required when walletable_type is set".to_string(),
        )),
        (None, Some(_)) => Err(Error::InvalidParams(
            "walletable_type is required when walletable_id is set".to_string(),
        )),
        _ => Ok(()),
    }
}
