use serde::{Deserialize, Serialize};
use std::fmt;

/// Fee paid per serialized byte, rounded up.
///
/// A fee rate relates the absolute fee of a transaction (in the base
/// monetary unit) to its serialized size in bytes. Rates computed from
/// observed transactions are never below [`FeeRate::MINIMUM`].
///
/// # Example
/// ```
/// use fee_estimator::FeeRate;
///
/// // 1000 units of fee over 300 bytes rounds up to 4 per byte.
/// let rate = FeeRate::calculate(1000, 300).unwrap();
/// assert_eq!(rate, FeeRate::from_u64(4));
///
/// // The inverse: the fee a 250-byte transaction pays at this rate.
/// assert_eq!(rate.fee(250), 1000);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FeeRate(u64);

impl FeeRate {
    /// The minimum fee rate an observed transaction can carry.
    ///
    /// Also the sentinel returned by rate queries over an empty window:
    /// callers should read it as "unknown, minimum viable", not as an
    /// estimate of a cheap market.
    pub const MINIMUM: FeeRate = FeeRate(1);

    /// Creates a fee rate from a raw per-byte value.
    pub const fn from_u64(rate: u64) -> Self {
        FeeRate(rate)
    }

    /// Returns the raw per-byte value.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Computes the rate a transaction paid: `ceil(fee / size)`, clamped
    /// to at least [`FeeRate::MINIMUM`].
    ///
    /// Returns `None` for a zero-size transaction, which is illegal input.
    pub fn calculate(fee: u64, size: u64) -> Option<Self> {
        if size == 0 {
            return None;
        }
        Some(FeeRate(fee.div_ceil(size).max(1)))
    }

    /// The absolute fee a transaction of `size` bytes pays at this rate.
    pub fn fee(self, size: u64) -> u64 {
        self.0.saturating_mul(size)
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/byte", self.0)
    }
}
