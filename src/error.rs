use thiserror::Error;

/// Main error type for the fee-estimator library.
#[derive(Error, Debug)]
pub enum EstimatorError {
    /// Invalid configuration provided at construction.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid input parameter on a query.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The wallet rejected draft construction; passed through unmodified.
    #[error(transparent)]
    Wallet(#[from] WalletError),
}

/// Type alias for Results in this library.
pub type Result<T> = std::result::Result<T, EstimatorError>;

impl EstimatorError {
    /// Creates an InvalidConfig error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Creates an InvalidParameter error.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

/// Errors surfaced by the wallet collaborator during draft construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// The account cannot cover the requested outputs plus the fee.
    #[error("Insufficient funds: need {required}, have {available}")]
    InsufficientFunds {
        /// Total the draft would have to spend.
        required: u64,
        /// What the account actually holds.
        available: u64,
    },

    /// The account is not in a state that allows spending.
    #[error("Account locked: {0}")]
    Locked(String),

    /// Any other wallet-side failure.
    #[error("Wallet error: {0}")]
    Other(String),
}

/// Error surfaced by the chain collaborator when reading recent blocks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Chain read failed: {0}")]
pub struct ChainError(pub String);
