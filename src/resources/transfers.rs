//! Transfers between walletables (取引（振替）).

use serde::{Deserialize, Serialize};

use super::wallet_txns::TxnEntrySide;
use super::{WalletableType, check_walletable_pair};
use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "transfers";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetTransfersOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walletable_type: Option<WalletableType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walletable_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_side: Option<TxnEntrySide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfers {
    pub transfers: Vec<Transfer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: i32,
    pub company_id: i32,
    pub date: String,
    pub amount: i32,
    pub due_amount: i32,
    pub balance: i32,
    pub entry_side: TxnEntrySide,
    pub walletable_type: WalletableType,
    pub walletable_id: i32,
    pub description: String,
    pub status: u32,
    pub rule_matched: bool,
}

impl Client {
    /// Lists transfers (取引（振替）) between walletables.
    pub async fn get_transfers(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetTransfersOpts,
    ) -> Result<Transfers> {
        check_walletable_pair(opts.walletable_type, opts.walletable_id)?;
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }
}
