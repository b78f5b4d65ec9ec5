use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    block::{BlockSummary, TxHash},
    error::{ChainError, WalletError},
};

/// Read access to the recently connected suffix of the active chain.
#[async_trait]
pub trait Chain: Send + Sync {
    /// Returns up to `count` most recently connected blocks in increasing
    /// height order.
    ///
    /// Blocks that cannot be loaded are omitted from the result rather
    /// than failing the whole read.
    async fn recent_blocks(&self, count: usize) -> Result<Vec<BlockSummary>, ChainError>;
}

/// A point-in-time view of the node's mempool.
///
/// The estimator receives one per connect event; it must stay semantically
/// valid for the duration of that call.
pub trait MempoolView {
    /// Whether the mempool currently holds `tx_hash`.
    fn contains(&self, tx_hash: &TxHash) -> bool;
}

/// A payment the wallet should make from an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Address of the receiving party.
    pub recipient: String,

    /// Amount to transfer, in the base monetary unit.
    pub amount: u64,

    /// Free-form note attached to the payment.
    pub memo: String,
}

impl Output {
    /// Creates a new output.
    pub fn new(recipient: impl Into<String>, amount: u64, memo: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            amount,
            memo: memo.into(),
        }
    }
}

/// A draft transaction the wallet built for fee sizing.
///
/// Only the serialized size matters to the estimator; the inputs the
/// wallet selected stay on the wallet's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftTransaction {
    /// Serialized size of the draft in bytes.
    pub size: u64,
}

/// Draft construction against the wallet's coin selection.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Builds a draft paying `outputs` from `account` with exactly `fee`
    /// attached, returning its serialized size.
    ///
    /// Coin selection must be deterministic for a given
    /// `(account, outputs, fee)` under stable UTXO state, so repeated
    /// calls during fee iteration see consistent sizes.
    async fn create_draft(
        &self,
        account: &str,
        outputs: &[Output],
        fee: u64,
    ) -> Result<DraftTransaction, WalletError>;
}
