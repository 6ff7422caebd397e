//! A pool instance: state plus its beacon.

use std::sync::Arc;

use crate::domain::{AccountId, Amount, AssetId, AssetPair, SharedFeeConfig, Timestamp};
use crate::error::Result;
use crate::math::Uq64x64;
use crate::pool::PoolState;
use crate::traits::{PoolImplementation, TokenLedger};
use crate::upgrades::Beacon;

/// A live pool: persistent [`PoolState`] bound to the shared pool
/// beacon.
///
/// Every state-changing call resolves the beacon's current
/// implementation first and never caches it, so a beacon upgrade takes
/// effect for this pool on its next operation.  Plain reads
/// (reserves, identities, accumulators) come straight off the state and
/// are not versioned.
#[derive(Debug)]
pub struct Pool {
    state: PoolState,
    beacon: Arc<Beacon<dyn PoolImplementation>>,
}

impl Pool {
    /// Creates an empty pool for `pair`, governed by `beacon` and
    /// reading fee policy through `fee`.
    #[must_use]
    pub fn new(
        pair: AssetPair,
        fee: SharedFeeConfig,
        beacon: Arc<Beacon<dyn PoolImplementation>>,
    ) -> Self {
        Self {
            state: PoolState::new(pair, fee),
            beacon,
        }
    }

    /// Returns the asset pair this pool trades.
    #[must_use]
    pub const fn pair(&self) -> AssetPair {
        self.state.pair()
    }

    /// Returns the lower-ordered asset of the pair.
    #[must_use]
    pub const fn token0(&self) -> AssetId {
        self.state.pair().asset0()
    }

    /// Returns the higher-ordered asset of the pair.
    #[must_use]
    pub const fn token1(&self) -> AssetId {
        self.state.pair().asset1()
    }

    /// Returns the pool's ledger account.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.state.account()
    }

    /// Returns the pool's liquidity-share asset.
    #[must_use]
    pub const fn share_asset(&self) -> AssetId {
        self.state.share_asset()
    }

    /// Returns the tracked reserves and their last-update timestamp.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount, Timestamp) {
        self.state.reserves()
    }

    /// Returns the cumulative time-weighted price of asset0 in asset1.
    #[must_use]
    pub const fn price0_cumulative(&self) -> Uq64x64 {
        self.state.price0_cumulative()
    }

    /// Returns the cumulative time-weighted price of asset1 in asset0.
    #[must_use]
    pub const fn price1_cumulative(&self) -> Uq64x64 {
        self.state.price1_cumulative()
    }

    /// Returns the beacon governing this pool.
    #[must_use]
    pub fn beacon(&self) -> Arc<Beacon<dyn PoolImplementation>> {
        Arc::clone(&self.beacon)
    }

    /// Issues liquidity shares for assets already deposited to the
    /// pool's account.  See
    /// [`PoolImplementation::mint`](crate::traits::PoolImplementation::mint).
    pub fn mint(
        &mut self,
        ledger: &mut dyn TokenLedger,
        recipient: AccountId,
        now: Timestamp,
    ) -> Result<Amount> {
        self.beacon
            .implementation()
            .mint(&mut self.state, ledger, recipient, now)
    }

    /// Redeems liquidity shares held by the pool's account.  See
    /// [`PoolImplementation::burn`](crate::traits::PoolImplementation::burn).
    pub fn burn(
        &mut self,
        ledger: &mut dyn TokenLedger,
        recipient: AccountId,
        now: Timestamp,
    ) -> Result<(Amount, Amount)> {
        self.beacon
            .implementation()
            .burn(&mut self.state, ledger, recipient, now)
    }

    /// Exchanges pre-deposited inputs for the requested outputs.  See
    /// [`PoolImplementation::swap`](crate::traits::PoolImplementation::swap).
    pub fn swap(
        &mut self,
        ledger: &mut dyn TokenLedger,
        amount0_out: Amount,
        amount1_out: Amount,
        recipient: AccountId,
        now: Timestamp,
    ) -> Result<()> {
        self.beacon.implementation().swap(
            &mut self.state,
            ledger,
            amount0_out,
            amount1_out,
            recipient,
            now,
        )
    }

    /// Sweeps any balance in excess of the tracked reserves.
    pub fn skim(&mut self, ledger: &mut dyn TokenLedger, recipient: AccountId) -> Result<()> {
        self.beacon
            .implementation()
            .skim(&mut self.state, ledger, recipient)
    }

    /// Force-resyncs the tracked reserves to the ledger balances.
    pub fn sync(&mut self, ledger: &mut dyn TokenLedger, now: Timestamp) -> Result<()> {
        self.beacon
            .implementation()
            .sync(&mut self.state, ledger, now)
    }
}
