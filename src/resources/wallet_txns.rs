//! Wallet transactions (明細).

use serde::{Deserialize, Serialize};

use super::{WalletableType, check_walletable_pair};
use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "wallet_txns";

/// Direction of money on a wallet transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxnEntrySide {
    Income,
    Expense,
}

/// Filters for wallet transactions. `walletable_type` and `walletable_id`
/// go together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetWalletTxnOpts {
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

impl GetWalletTxnOpts {
    fn to_query(&self, company_id: i32) -> Result<Query> {
        check_walletable_pair(self.walletable_type, self.walletable_id)?;
        Query::for_company(company_id, self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletTxns {
    pub wallet_txns: Vec<WalletTxn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct WalletTxnResponse {
    wallet_txn: WalletTxn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletTxn {
    pub id: i32,
    pub company_id: i32,
    pub date: String,
    pub amount: i32,
    /// Amount not yet matched to a deal.
    pub due_amount: i32,
    pub balance: i32,
    pub entry_side: TxnEntrySide,
    pub walletable_type: WalletableType,
    pub walletable_id: i32,
    pub description: String,
    /// Raw reconciliation status, see [`WalletTxn::status_kind`].
    pub status: u32,
    pub rule_matched: bool,
}

/// Reconciliation state (消込状態) of a wallet transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletTxnStatus {
    /// 1: 消込待ち
    Unsettled,
    /// 2: 消込済み
    Settled,
    /// 3: 無視
    Ignored,
    /// 4: 消込中
    Settling,
    /// A code this client does not know about, kept as sent.
    Other(u32),
}

impl From<u32> for WalletTxnStatus {
    fn from(code: u32) -> Self {
        match code {
            1 => WalletTxnStatus::Unsettled,
            2 => WalletTxnStatus::Settled,
            3 => WalletTxnStatus::Ignored,
            4 => WalletTxnStatus::Settling,
            other => WalletTxnStatus::Other(other),
        }
    }
}

impl WalletTxn {
    pub fn status_kind(&self) -> WalletTxnStatus {
        WalletTxnStatus::from(self.status)
    }
}

impl Client {
    /// Lists wallet transactions (明細).
    pub async fn get_wallet_txns(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetWalletTxnOpts,
    ) -> Result<WalletTxns> {
        let query = opts.to_query(company_id)?;
        self.get(token_source, PATH, &query).await
    }

    /// Fetches one wallet transaction.
    pub async fn get_wallet_txn(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        txn_id: i64,
        opts: &GetWalletTxnOpts,
    ) -> Result<WalletTxn> {
        let query = opts.to_query(company_id)?;
        let response: WalletTxnResponse = self
            .get(token_source, &format!("{}/{}", PATH, txn_id), &query)
            .await?;
        Ok(response.wallet_txn)
    }
}
