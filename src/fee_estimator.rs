use std::sync::Arc;

use crate::{
    block::BlockSummary,
    error::{EstimatorError, Result},
    fee_rate::FeeRate,
    fee_solver,
    priority::{Percentiles, Priority},
    sample_window::SampleWindow,
    traits::{Chain, MempoolView, Output, Wallet},
};

/// The main entry point for fee estimation.
///
/// A `FeeEstimator` owns a [`SampleWindow`] fed by the chain's
/// connect/disconnect events and answers two queries: the fee *rate* a
/// transaction should pay to be confirmed within a target horizon, and
/// the absolute *fee* for a concrete spend, found by iterating against
/// the wallet's draft builder until fee and draft size agree.
///
/// Connect and disconnect handling and rate queries are synchronous and
/// non-blocking; only [`setup`](FeeEstimator::setup) and
/// [`estimate_fee`](FeeEstimator::estimate_fee) suspend, awaiting chain
/// reads and wallet draft construction respectively. Queries never mutate
/// the window.
pub struct FeeEstimator {
    window: SampleWindow,
    chain: Arc<dyn Chain>,
    wallet: Arc<dyn Wallet>,
    percentiles: Percentiles,
}

impl FeeEstimator {
    /// Default capacity of the sliding window in distinct blocks.
    pub const DEFAULT_RECENT_BLOCKS_NUM: usize = 10;

    /// Default number of samples admitted per connected block.
    pub const DEFAULT_TX_SAMPLE_SIZE: usize = 3;

    /// Creates a new estimator with default settings.
    ///
    /// Default settings:
    /// - Window capacity: 10 distinct blocks
    /// - Samples per block: 3
    /// - Percentiles: low 10th, medium 20th, high 30th
    pub fn new(chain: Arc<dyn Chain>, wallet: Arc<dyn Wallet>) -> Self {
        Self {
            window: SampleWindow::with_capacity(
                Self::DEFAULT_RECENT_BLOCKS_NUM,
                Self::DEFAULT_TX_SAMPLE_SIZE,
            ),
            chain,
            wallet,
            percentiles: Percentiles::default(),
        }
    }

    /// Creates a new estimator with custom settings.
    ///
    /// # Arguments
    /// * `recent_blocks_num` - Window capacity in distinct blocks (must
    ///   be positive)
    /// * `tx_sample_size` - Samples admitted per block (must be positive)
    /// * `percentiles` - Percentile per priority bucket
    pub fn with_config(
        chain: Arc<dyn Chain>,
        wallet: Arc<dyn Wallet>,
        recent_blocks_num: usize,
        tx_sample_size: usize,
        percentiles: Percentiles,
    ) -> Result<Self> {
        Ok(Self {
            window: SampleWindow::new(recent_blocks_num, tx_sample_size)?,
            chain,
            wallet,
            percentiles,
        })
    }

    /// Rebuilds the window from the chain's recent suffix using the
    /// current mempool. Best effort; see [`SampleWindow::setup`].
    pub async fn setup(&mut self, mempool: &dyn MempoolView) {
        self.window.setup(self.chain.as_ref(), mempool).await;
    }

    /// Delivers a newly connected block together with a mempool view
    /// valid for the duration of this call.
    pub fn on_connect(&mut self, block: &BlockSummary, mempool: &dyn MempoolView) {
        self.window.on_connect(block, mempool);
    }

    /// Delivers a detaching block. Disconnects arrive in LIFO order
    /// relative to connects.
    pub fn on_disconnect(&mut self, block: &BlockSummary) {
        self.window.on_disconnect(block);
    }

    /// The fee rate to pay for confirmation within `horizon_secs`.
    ///
    /// Over an empty window this returns [`FeeRate::MINIMUM`], a sentinel
    /// meaning "unknown, minimum viable" rather than an estimate.
    pub fn estimate_rate(&self, horizon_secs: u64) -> FeeRate {
        self.estimate_rate_for_priority(Priority::for_horizon(horizon_secs))
    }

    /// The fee rate for an explicit priority bucket.
    ///
    /// Picks the bucket's percentile out of the window's ascending fee
    /// rates, without interpolation: the result is the rate a fraction of
    /// recently included transactions paid less than.
    pub fn estimate_rate_for_priority(&self, priority: Priority) -> FeeRate {
        let rates = self.window.sorted_rates();
        if rates.is_empty() {
            return FeeRate::MINIMUM;
        }
        let percentile = self.percentiles.for_priority(priority) as usize;
        let idx = (percentile * rates.len() / 100).min(rates.len() - 1);
        rates[idx]
    }

    /// The absolute fee a spend of `outputs` from `account` should carry
    /// to be confirmed within `horizon_secs`.
    ///
    /// Runs the fixed-point search of the fee solver at the current rate
    /// estimate. Wallet errors (insufficient funds, locked account)
    /// surface unmodified.
    ///
    /// # Errors
    /// `InvalidParameter` if `outputs` is empty; any [`WalletError`]
    /// from draft construction.
    ///
    /// [`WalletError`]: crate::error::WalletError
    pub async fn estimate_fee(
        &self,
        horizon_secs: u64,
        account: &str,
        outputs: &[Output],
    ) -> Result<u64> {
        if outputs.is_empty() {
            return Err(EstimatorError::invalid_parameter(
                "outputs must not be empty",
            ));
        }
        let rate = self.estimate_rate(horizon_secs);
        fee_solver::solve(self.wallet.as_ref(), account, outputs, rate).await
    }

    /// Current number of samples in the window.
    pub fn sample_count(&self) -> usize {
        self.window.len()
    }

    /// Read-only access to the sample window.
    pub fn window(&self) -> &SampleWindow {
        &self.window
    }
}
