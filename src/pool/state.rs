//! Persistent per-pool state.

use crate::domain::{
    read_fee_config, AccountId, AssetId, AssetPair, Amount, FeeConfig, SharedFeeConfig, Timestamp,
};
use crate::error::{AmmError, Result};
use crate::math::uq64x64::{accumulate, fraction};
use crate::math::Uq64x64;

/// Everything a pool remembers between operations.
///
/// The state carries no behavior of its own; the code governing it is a
/// [`PoolImplementation`](crate::traits::PoolImplementation) resolved
/// through a beacon per call.  Upgrading the implementation leaves the
/// state untouched.
///
/// Reserves are the pool's *tracked* balances.  The actual ledger
/// balances of [`account`](Self::account) may temporarily exceed them
/// (donations, mid-operation deposits); `skim` and `sync` reconcile the
/// two.
#[derive(Debug)]
pub struct PoolState {
    pair: AssetPair,
    account: AccountId,
    share_asset: AssetId,
    fee: SharedFeeConfig,
    reserve0: Amount,
    reserve1: Amount,
    price0_cumulative: Uq64x64,
    price1_cumulative: Uq64x64,
    last_update: Timestamp,
    k_last: u128,
    locked: bool,
}

impl PoolState {
    /// Creates empty state for `pair`, reading fee policy through the
    /// registry's shared handle.
    ///
    /// The pool's ledger account and share asset are derived
    /// deterministically from the pair.
    #[must_use]
    pub fn new(pair: AssetPair, fee: SharedFeeConfig) -> Self {
        Self {
            pair,
            account: pair.pool_account(),
            share_asset: pair.share_asset(),
            fee,
            reserve0: Amount::ZERO,
            reserve1: Amount::ZERO,
            price0_cumulative: Uq64x64::ZERO,
            price1_cumulative: Uq64x64::ZERO,
            last_update: Timestamp::ZERO,
            k_last: 0,
            locked: false,
        }
    }

    /// Returns the asset pair this pool trades.
    #[must_use]
    pub const fn pair(&self) -> AssetPair {
        self.pair
    }

    /// Returns the pool's ledger account.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Returns the pool's liquidity-share asset.
    #[must_use]
    pub const fn share_asset(&self) -> AssetId {
        self.share_asset
    }

    /// Returns the tracked reserves and the timestamp of their last
    /// update.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount, Timestamp) {
        (self.reserve0, self.reserve1, self.last_update)
    }

    /// Returns the cumulative time-weighted price of asset0 in asset1.
    #[must_use]
    pub const fn price0_cumulative(&self) -> Uq64x64 {
        self.price0_cumulative
    }

    /// Returns the cumulative time-weighted price of asset1 in asset0.
    #[must_use]
    pub const fn price1_cumulative(&self) -> Uq64x64 {
        self.price1_cumulative
    }

    /// Returns the reserve product recorded at the last liquidity event.
    #[must_use]
    pub const fn k_last(&self) -> u128 {
        self.k_last
    }

    /// Reads the current fee policy from the registry's shared handle.
    #[must_use]
    pub fn fee(&self) -> FeeConfig {
        read_fee_config(&self.fee)
    }

    pub(crate) fn set_k_last(&mut self, k_last: u128) {
        self.k_last = k_last;
    }

    /// Runs `f` under the pool's reentrancy guard.
    ///
    /// The guard is released whether `f` succeeds or fails.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Reentrant`] if the guard is already held.
    pub(crate) fn with_guard<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        if self.locked {
            return Err(AmmError::Reentrant);
        }
        self.locked = true;
        let result = f(self);
        self.locked = false;
        result
    }

    /// Updates the price accumulators and resyncs the tracked reserves to
    /// `balance0`/`balance1`.
    ///
    /// Prices accumulate from the *old* reserves, weighted by the time
    /// elapsed since the last update, and at most once per distinct
    /// timestamp.  Accumulation is skipped while either reserve is zero
    /// (no price exists yet).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if a reserve ratio does not fit the
    /// UQ64.64 encoding.
    pub(crate) fn sync_balances(
        &mut self,
        balance0: Amount,
        balance1: Amount,
        now: Timestamp,
    ) -> Result<()> {
        let elapsed = now.elapsed_since(&self.last_update);
        if elapsed > 0 && !self.reserve0.is_zero() && !self.reserve1.is_zero() {
            let price0 = fraction(self.reserve1, self.reserve0)?;
            let price1 = fraction(self.reserve0, self.reserve1)?;
            self.price0_cumulative = accumulate(self.price0_cumulative, price0, elapsed);
            self.price1_cumulative = accumulate(self.price1_cumulative, price1, elapsed);
        }
        if now > self.last_update {
            self.last_update = now;
        }
        self.reserve0 = balance0;
        self.reserve1 = balance1;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn lock_for_test(&mut self) {
        self.locked = true;
    }
}
