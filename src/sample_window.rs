use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, warn};

use crate::{
    block::{BlockHash, BlockSummary},
    error::{EstimatorError, Result},
    fee_rate::FeeRate,
    traits::{Chain, MempoolView},
};

/// One fee-rate observation retained by the window.
///
/// Samples carry the hash of the block that contributed them so they can
/// be removed when that block detaches in a reorg. They do not carry the
/// transaction hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// The block that contained the sampled transaction.
    pub block_hash: BlockHash,

    /// The rate the sampled transaction paid.
    pub fee_rate: FeeRate,
}

/// A bounded, ordered window of fee-rate samples over the recently
/// connected suffix of the active chain.
///
/// The window holds samples from at most `recent_blocks_num` distinct
/// blocks, admitting at most `tx_sample_size` samples per block: the
/// cheapest mempool-known transactions of that block. Samples are kept in
/// block-connect order, oldest first; when a new block pushes the window
/// past its block capacity, the oldest represented block's samples are
/// dropped as a contiguous prefix.
///
/// Blocks that contribute zero samples (nothing the mempool had seen) are
/// still processed but do not count toward the block capacity, so an
/// empty block never evicts useful history.
pub struct SampleWindow {
    samples: VecDeque<Sample>,
    recent_blocks_num: usize,
    tx_sample_size: usize,
}

impl SampleWindow {
    /// Creates an empty window.
    ///
    /// # Arguments
    /// * `recent_blocks_num` - Maximum number of distinct blocks
    ///   represented in the window. Must be positive.
    /// * `tx_sample_size` - Maximum samples admitted per block. Must be
    ///   positive.
    pub fn new(recent_blocks_num: usize, tx_sample_size: usize) -> Result<Self> {
        if recent_blocks_num == 0 {
            return Err(EstimatorError::invalid_config(
                "recent_blocks_num must be positive",
            ));
        }
        if tx_sample_size == 0 {
            return Err(EstimatorError::invalid_config(
                "tx_sample_size must be positive",
            ));
        }
        Ok(Self::with_capacity(recent_blocks_num, tx_sample_size))
    }

    pub(crate) fn with_capacity(recent_blocks_num: usize, tx_sample_size: usize) -> Self {
        Self {
            samples: VecDeque::new(),
            recent_blocks_num,
            tx_sample_size,
        }
    }

    /// Rebuilds the window from the chain's recent suffix, replaying
    /// connect events against the current mempool.
    ///
    /// Best effort: a failed chain read leaves the window empty rather
    /// than blocking startup, and blocks the chain could not load are
    /// simply absent from the replay.
    pub async fn setup(&mut self, chain: &dyn Chain, mempool: &dyn MempoolView) {
        let blocks = match chain.recent_blocks(self.recent_blocks_num).await {
            Ok(blocks) => blocks,
            Err(e) => {
                warn!("Window setup skipped, chain read failed: {e}");
                return;
            }
        };
        for block in &blocks {
            self.on_connect(block, mempool);
        }
        debug!(
            "Window rebuilt from {} recent blocks, {} samples",
            blocks.len(),
            self.samples.len()
        );
    }

    /// Folds a newly connected block into the window.
    ///
    /// The reward transaction at index 0 is skipped. Of the remaining
    /// transactions, only those present in `mempool` are considered;
    /// transactions that appeared in a block without passing through the
    /// local mempool carry no market signal. The `tx_sample_size`
    /// cheapest of the survivors are admitted in ascending rate order.
    pub fn on_connect(&mut self, block: &BlockSummary, mempool: &dyn MempoolView) {
        let mut rates: Vec<FeeRate> = Vec::new();
        for tx in block.transactions.iter().skip(1) {
            if !mempool.contains(&tx.hash) {
                continue;
            }
            match tx.fee_rate() {
                Some(rate) => rates.push(rate),
                // Malformed data must not block the chain; drop and log.
                None => warn!(
                    "Skipping zero-size transaction {} in block {}",
                    tx.hash, block.hash
                ),
            }
        }
        rates.sort();
        rates.truncate(self.tx_sample_size);

        if rates.is_empty() {
            debug!("Block {} contributed no samples", block.hash);
            return;
        }

        for fee_rate in rates {
            self.samples.push_back(Sample {
                block_hash: block.hash,
                fee_rate,
            });
        }

        while self.represented_blocks() > self.recent_blocks_num {
            self.evict_oldest_block();
        }
    }

    /// Removes the detaching block's samples from the tail of the window.
    ///
    /// Disconnects must arrive in LIFO order relative to connects; if the
    /// tail belongs to a different block, nothing is removed. Detaching a
    /// block that contributed no samples is a no-op.
    pub fn on_disconnect(&mut self, block: &BlockSummary) {
        let mut removed = 0usize;
        while self
            .samples
            .back()
            .is_some_and(|sample| sample.block_hash == block.hash)
        {
            self.samples.pop_back();
            removed += 1;
        }
        if removed > 0 {
            debug!("Dropped {removed} samples for detached block {}", block.hash);
        }
    }

    /// Current number of samples in the window.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the window holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples currently held, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Number of distinct blocks with at least one sample in the window.
    pub fn represented_blocks(&self) -> usize {
        // A block's samples are contiguous, so counting runs suffices.
        let mut count = 0;
        let mut prev: Option<BlockHash> = None;
        for sample in &self.samples {
            if prev != Some(sample.block_hash) {
                count += 1;
                prev = Some(sample.block_hash);
            }
        }
        count
    }

    /// Fee rates of all samples, sorted ascending.
    pub(crate) fn sorted_rates(&self) -> Vec<FeeRate> {
        let mut rates: Vec<FeeRate> = self.samples.iter().map(|sample| sample.fee_rate).collect();
        rates.sort_unstable();
        rates
    }

    fn evict_oldest_block(&mut self) {
        let Some(oldest) = self.samples.front().map(|sample| sample.block_hash) else {
            return;
        };
        while self
            .samples
            .front()
            .is_some_and(|sample| sample.block_hash == oldest)
        {
            self.samples.pop_front();
        }
    }
}
