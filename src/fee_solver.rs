use tracing::debug;

use crate::{
    error::Result,
    fee_rate::FeeRate,
    traits::{Output, Wallet},
};

/// Iteration bound for the fixed-point fee search.
///
/// Convergence normally takes two or three rounds; the bound exists so a
/// pathological wallet cannot loop the solver forever.
pub(crate) const MAX_ITERATIONS: usize = 8;

/// Finds a fee consistent with the size of the draft that pays it.
///
/// The fee changes which inputs the wallet selects, which changes the
/// draft's size, which changes the fee. Starting from zero, each round
/// asks the wallet for a draft carrying the current fee and re-prices it
/// at `rate` until the fee stops moving. If the search has not settled
/// after [`MAX_ITERATIONS`] rounds, the last iterate is returned: it can
/// only overpay by one size-delta worth of fee, never underpay.
///
/// Wallet failures (insufficient funds, locked account) propagate
/// unmodified.
pub(crate) async fn solve(
    wallet: &dyn Wallet,
    account: &str,
    outputs: &[Output],
    rate: FeeRate,
) -> Result<u64> {
    let mut fee = 0u64;
    for _ in 0..MAX_ITERATIONS {
        let draft = wallet.create_draft(account, outputs, fee).await?;
        let new_fee = rate.fee(draft.size);
        if new_fee == fee {
            return Ok(fee);
        }
        fee = new_fee;
    }
    debug!("Fee search did not settle after {MAX_ITERATIONS} rounds, keeping {fee}");
    Ok(fee)
}
