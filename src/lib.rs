//! Fee estimation for a UTXO-style node.
//!
//! This library watches blocks connect to and disconnect from the active
//! chain, samples the fee rates of transactions the local mempool had
//! seen before they were included, and keeps a bounded sliding window of
//! those samples. It answers two queries: the fee *rate* to pay for
//! confirmation within a target horizon, and the absolute *fee* for a
//! concrete spend, found by iterating against the wallet's draft builder
//! until fee and transaction size agree.
//!
//! # Features
//! - Per-block sample caps, so one large block cannot dominate the window
//! - Reorg-safe: disconnecting a block removes exactly its samples
//! - Percentile-based rates per priority bucket (low, medium, high)
//! - Closed-loop absolute-fee estimation against the wallet's coin selection
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use fee_estimator::{
//!     BlockHash, BlockSummary, FeeEstimator, MempoolView, TransactionSummary, TxHash,
//! };
//! # use async_trait::async_trait;
//! # use fee_estimator::{Chain, ChainError, DraftTransaction, Output, Wallet, WalletError};
//! # struct NodeChain;
//! # #[async_trait]
//! # impl Chain for NodeChain {
//! #     async fn recent_blocks(&self, _count: usize) -> Result<Vec<BlockSummary>, ChainError> {
//! #         Ok(Vec::new())
//! #     }
//! # }
//! # struct NodeWallet;
//! # #[async_trait]
//! # impl Wallet for NodeWallet {
//! #     async fn create_draft(&self, _account: &str, _outputs: &[Output], _fee: u64)
//! #         -> Result<DraftTransaction, WalletError>
//! #     {
//! #         Ok(DraftTransaction { size: 200 })
//! #     }
//! # }
//! # struct NodeMempool;
//! # impl MempoolView for NodeMempool {
//! #     fn contains(&self, _tx_hash: &TxHash) -> bool { true }
//! # }
//!
//! let mut estimator = FeeEstimator::new(Arc::new(NodeChain), Arc::new(NodeWallet));
//!
//! // The chain delivers a newly attached block with a mempool view.
//! let block = BlockSummary::new(
//!     BlockHash([1; 32]),
//!     vec![
//!         TransactionSummary::new(TxHash([0; 32]), 0, 120), // reward, skipped
//!         TransactionSummary::new(TxHash([2; 32]), 500, 250),
//!     ],
//! );
//! estimator.on_connect(&block, &NodeMempool);
//!
//! // The rate to pay for confirmation within a minute.
//! let rate = estimator.estimate_rate(60);
//! println!("pay {rate} to confirm within a minute");
//! ```

// Public modules
pub mod error;

// Data structures
mod block;
mod fee_estimator;
mod fee_rate;
mod priority;
mod sample_window;
mod traits;

// Internal implementation modules
mod fee_solver;

// Public exports
pub use block::{BlockHash, BlockSummary, TransactionSummary, TxHash};
pub use error::{ChainError, EstimatorError, Result, WalletError};
pub use fee_estimator::FeeEstimator;
pub use fee_rate::FeeRate;
pub use priority::{Percentiles, Priority};
pub use sample_window::{Sample, SampleWindow};
pub use traits::{Chain, DraftTransaction, MempoolView, Output, Wallet};
