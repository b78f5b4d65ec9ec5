use serde::{Deserialize, Serialize};
use std::fmt;

use crate::fee_rate::FeeRate;

/// Identifies a block by its 32-byte digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockHash(pub [u8; 32]);

/// Identifies a transaction by its 32-byte digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHash(pub [u8; 32]);

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({self})")
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash({self})")
    }
}

/// A confirmed transaction reduced to what fee estimation reads.
///
/// This struct contains the minimal information needed to sample a
/// transaction: its hash (for the mempool membership check), the fee it
/// paid and its serialized byte length.
///
/// # Example
/// ```
/// use fee_estimator::{FeeRate, TransactionSummary, TxHash};
///
/// let tx = TransactionSummary::new(TxHash([7; 32]), 900, 300);
/// assert_eq!(tx.fee_rate(), Some(FeeRate::from_u64(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSummary {
    /// The transaction digest.
    pub hash: TxHash,

    /// The absolute fee, in the base monetary unit.
    pub fee: u64,

    /// The serialized size in bytes.
    pub size: u64,
}

impl TransactionSummary {
    /// Creates a new transaction summary.
    pub fn new(hash: TxHash, fee: u64, size: u64) -> Self {
        Self { hash, fee, size }
    }

    /// The rate this transaction paid, or `None` for an illegal zero size.
    pub fn fee_rate(&self) -> Option<FeeRate> {
        FeeRate::calculate(self.fee, self.size)
    }
}

/// A connected block reduced to what the estimator reads: its hash and
/// its transactions in block order.
///
/// Index 0 holds the miner's reward transaction, which estimation always
/// skips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummary {
    /// The block digest.
    pub hash: BlockHash,

    /// The block's transactions, reward transaction first.
    pub transactions: Vec<TransactionSummary>,
}

impl BlockSummary {
    /// Creates a new block summary.
    pub fn new(hash: BlockHash, transactions: Vec<TransactionSummary>) -> Self {
        Self { hash, transactions }
    }
}
