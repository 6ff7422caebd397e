//! Persistent registry state.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::{
    read_fee_config, AccountId, AssetId, AssetPair, BasisPoints, FeeConfig, SharedFeeConfig,
};
use crate::error::Result;
use crate::pool::Pool;
use crate::traits::PoolImplementation;
use crate::upgrades::Beacon;

/// Stable handle to a pool inside a registry.
///
/// Ids are assigned in creation order and never reused; they stay valid
/// across fee changes and beacon upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolId(usize);

impl PoolId {
    /// Returns the zero-based creation index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Everything a registry remembers between operations.
///
/// Like [`PoolState`](crate::pool::PoolState), this carries no behavior:
/// state-changing operations are performed by a
/// [`RegistryImplementation`](crate::traits::RegistryImplementation)
/// resolved through the registry's beacon.  The registry owns the
/// system-wide fee configuration; pools hold clones of the shared handle
/// and see fee changes immediately.
#[derive(Debug)]
pub struct RegistryState {
    account: AccountId,
    owner: AccountId,
    pool_beacon: Arc<Beacon<dyn PoolImplementation>>,
    fee: SharedFeeConfig,
    pairs: BTreeMap<AssetPair, PoolId>,
    pools: Vec<Pool>,
}

impl RegistryState {
    /// Creates empty registry state.
    ///
    /// `account` is the registry's own identity, `owner` the account
    /// allowed to change fee policy.  Every pool this registry creates
    /// is governed by `pool_beacon`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFeeRate`](crate::error::AmmError) if
    /// `fee_rate` exceeds the 1000 bps cap.
    pub fn new(
        account: AccountId,
        owner: AccountId,
        fee_rate: BasisPoints,
        fee_recipient: AccountId,
        pool_beacon: Arc<Beacon<dyn PoolImplementation>>,
    ) -> Result<Self> {
        let fee = FeeConfig::new(fee_rate, fee_recipient)?.into_shared();
        Ok(Self {
            account,
            owner,
            pool_beacon,
            fee,
            pairs: BTreeMap::new(),
            pools: Vec::new(),
        })
    }

    /// Returns the registry's own identity.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Returns the account allowed to change fee policy.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Returns the current swap fee rate.
    #[must_use]
    pub fn fee_rate(&self) -> BasisPoints {
        read_fee_config(&self.fee).rate()
    }

    /// Returns the current protocol fee recipient.
    #[must_use]
    pub fn fee_recipient(&self) -> AccountId {
        read_fee_config(&self.fee).recipient()
    }

    /// Returns the shared fee handle pools read through.
    #[must_use]
    pub(crate) fn fee_handle(&self) -> SharedFeeConfig {
        Arc::clone(&self.fee)
    }

    /// Returns the beacon governing this registry's pools.
    #[must_use]
    pub fn pool_beacon(&self) -> Arc<Beacon<dyn PoolImplementation>> {
        Arc::clone(&self.pool_beacon)
    }

    /// Looks up the pool for an unordered pair.
    ///
    /// Order-independent; returns `None` for an unknown pair or when
    /// both identifiers are equal.
    #[must_use]
    pub fn get_pair(&self, asset_a: AssetId, asset_b: AssetId) -> Option<PoolId> {
        let pair = AssetPair::new(asset_a, asset_b).ok()?;
        self.pairs.get(&pair).copied()
    }

    /// Returns the number of pools created so far.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pools.len()
    }

    /// Returns the pool behind `id`.
    #[must_use]
    pub fn pool(&self, id: PoolId) -> Option<&Pool> {
        self.pools.get(id.0)
    }

    /// Returns the pool behind `id`, mutably.
    #[must_use]
    pub fn pool_mut(&mut self, id: PoolId) -> Option<&mut Pool> {
        self.pools.get_mut(id.0)
    }

    /// Iterates over all pools in creation order.
    pub fn pools(&self) -> impl Iterator<Item = (PoolId, &Pool)> {
        self.pools
            .iter()
            .enumerate()
            .map(|(index, pool)| (PoolId(index), pool))
    }

    pub(crate) fn contains_pair(&self, pair: &AssetPair) -> bool {
        self.pairs.contains_key(pair)
    }

    pub(crate) fn insert_pool(&mut self, pair: AssetPair, pool: Pool) -> PoolId {
        let id = PoolId(self.pools.len());
        self.pools.push(pool);
        self.pairs.insert(pair, id);
        id
    }

    pub(crate) fn write_fee(&self, config: FeeConfig) {
        crate::domain::write_fee_config(&self.fee, config);
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::pool::ConstantProductPool;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    fn account(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 32])
    }

    fn state() -> RegistryState {
        let beacon: Arc<Beacon<dyn PoolImplementation>> =
            Arc::new(Beacon::new(account(1), Arc::new(ConstantProductPool)));
        let Ok(state) = RegistryState::new(
            account(2),
            account(1),
            BasisPoints::new(30),
            AccountId::NULL,
            beacon,
        ) else {
            panic!("expected Ok");
        };
        state
    }

    #[test]
    fn new_state_is_empty() {
        let state = state();
        assert_eq!(state.pair_count(), 0);
        assert_eq!(state.get_pair(asset(1), asset(2)), None);
        assert_eq!(state.fee_rate().get(), 30);
        assert_eq!(state.fee_recipient(), AccountId::NULL);
    }

    #[test]
    fn rejects_fee_rate_above_cap() {
        let beacon: Arc<Beacon<dyn PoolImplementation>> =
            Arc::new(Beacon::new(account(1), Arc::new(ConstantProductPool)));
        assert!(RegistryState::new(
            account(2),
            account(1),
            BasisPoints::new(1_001),
            AccountId::NULL,
            beacon,
        )
        .is_err());
    }

    #[test]
    fn get_pair_with_identical_assets_is_none() {
        let state = state();
        assert_eq!(state.get_pair(asset(1), asset(1)), None);
    }

    #[test]
    fn unknown_pool_id_is_none() {
        let mut state = state();
        let missing = PoolId(7);
        assert!(state.pool(missing).is_none());
        assert!(state.pool_mut(missing).is_none());
    }
}
