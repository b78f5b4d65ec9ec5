#![allow(dead_code)]

//! Shared mock collaborators and builders for the integration tests.

use async_trait::async_trait;
use fee_estimator::{
    BlockHash, BlockSummary, Chain, ChainError, DraftTransaction, MempoolView, Output,
    TransactionSummary, TxHash, Wallet, WalletError,
};
use std::collections::HashSet;

/// Mempool view backed by an explicit set of transaction hashes.
pub struct MockMempool {
    known: HashSet<TxHash>,
}

impl MockMempool {
    /// A mempool that has seen the transactions with the given ids.
    pub fn knowing(ids: &[u8]) -> Self {
        Self {
            known: ids.iter().map(|&id| tx_hash(id)).collect(),
        }
    }

    /// A mempool that has seen nothing.
    pub fn empty() -> Self {
        Self {
            known: HashSet::new(),
        }
    }
}

impl MempoolView for MockMempool {
    fn contains(&self, tx_hash: &TxHash) -> bool {
        self.known.contains(tx_hash)
    }
}

/// Mempool view that claims to have seen every transaction.
pub struct AllMempool;

impl MempoolView for AllMempool {
    fn contains(&self, _tx_hash: &TxHash) -> bool {
        true
    }
}

/// Chain serving a fixed list of recent blocks in height order.
pub struct MockChain {
    blocks: Vec<BlockSummary>,
}

impl MockChain {
    pub fn empty() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn with_blocks(blocks: Vec<BlockSummary>) -> Self {
        Self { blocks }
    }
}

#[async_trait]
impl Chain for MockChain {
    async fn recent_blocks(&self, count: usize) -> Result<Vec<BlockSummary>, ChainError> {
        let skip = self.blocks.len().saturating_sub(count);
        Ok(self.blocks[skip..].to_vec())
    }
}

/// Wallet double for driving the fee solver.
pub enum MockWallet {
    /// Every draft has the same serialized size, regardless of fee.
    FixedSize(u64),
    /// Drafts draw on uniform coins: each input is worth `coin_value`
    /// and adds `input_size` bytes to a draft of `base_size` bytes.
    Coins {
        coin_value: u64,
        coin_count: u64,
        base_size: u64,
        input_size: u64,
    },
    /// Draft construction always fails with insufficient funds.
    Broke,
}

#[async_trait]
impl Wallet for MockWallet {
    async fn create_draft(
        &self,
        _account: &str,
        outputs: &[Output],
        fee: u64,
    ) -> Result<DraftTransaction, WalletError> {
        let required = outputs.iter().map(|output| output.amount).sum::<u64>() + fee;
        match *self {
            MockWallet::FixedSize(size) => Ok(DraftTransaction { size }),
            MockWallet::Coins {
                coin_value,
                coin_count,
                base_size,
                input_size,
            } => {
                let inputs = required.div_ceil(coin_value).max(1);
                if inputs > coin_count {
                    return Err(WalletError::InsufficientFunds {
                        required,
                        available: coin_value * coin_count,
                    });
                }
                Ok(DraftTransaction {
                    size: base_size + inputs * input_size,
                })
            }
            MockWallet::Broke => Err(WalletError::InsufficientFunds {
                required,
                available: 0,
            }),
        }
    }
}

pub fn block_hash(id: u8) -> BlockHash {
    BlockHash([id; 32])
}

pub fn tx_hash(id: u8) -> TxHash {
    TxHash([id; 32])
}

pub fn tx(id: u8, fee: u64, size: u64) -> TransactionSummary {
    TransactionSummary::new(tx_hash(id), fee, size)
}

/// A reward transaction; its hash never matters because estimation skips
/// index 0 by position.
pub fn reward_tx() -> TransactionSummary {
    TransactionSummary::new(tx_hash(0xee), 0, 100)
}

/// Builds a block whose first transaction is the reward.
pub fn block(id: u8, txs: Vec<TransactionSummary>) -> BlockSummary {
    let mut transactions = vec![reward_tx()];
    transactions.extend(txs);
    BlockSummary::new(block_hash(id), transactions)
}

pub fn outputs(amount: u64) -> Vec<Output> {
    vec![Output::new("recipient", amount, "test")]
}
