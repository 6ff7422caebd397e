//! A registry instance: state plus its beacon.

use std::sync::Arc;

use crate::domain::{AccountId, AssetId, BasisPoints};
use crate::error::Result;
use crate::pool::Pool;
use crate::registry::{PoolId, RegistryState};
use crate::traits::RegistryImplementation;
use crate::upgrades::Beacon;

/// A live registry: persistent [`RegistryState`] bound to the shared
/// registry beacon.
///
/// State-changing calls resolve the beacon's current implementation per
/// call, like [`Pool`](crate::pool::Pool) does; lookups read the state
/// directly.
#[derive(Debug)]
pub struct Registry {
    state: RegistryState,
    beacon: Arc<Beacon<dyn RegistryImplementation>>,
}

impl Registry {
    /// Binds `state` to the registry beacon.
    #[must_use]
    pub fn new(state: RegistryState, beacon: Arc<Beacon<dyn RegistryImplementation>>) -> Self {
        Self { state, beacon }
    }

    /// Returns the registry's own identity.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.state.account()
    }

    /// Returns the account allowed to change fee policy.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.state.owner()
    }

    /// Returns the current swap fee rate.
    #[must_use]
    pub fn fee_rate(&self) -> BasisPoints {
        self.state.fee_rate()
    }

    /// Returns the current protocol fee recipient.
    #[must_use]
    pub fn fee_recipient(&self) -> AccountId {
        self.state.fee_recipient()
    }

    /// Returns the beacon governing this registry.
    #[must_use]
    pub fn beacon(&self) -> Arc<Beacon<dyn RegistryImplementation>> {
        Arc::clone(&self.beacon)
    }

    /// Looks up the pool for an unordered pair.  Order-independent.
    #[must_use]
    pub fn get_pair(&self, asset_a: AssetId, asset_b: AssetId) -> Option<PoolId> {
        self.state.get_pair(asset_a, asset_b)
    }

    /// Returns the number of pools created so far.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.state.pair_count()
    }

    /// Returns the pool behind `id`.
    #[must_use]
    pub fn pool(&self, id: PoolId) -> Option<&Pool> {
        self.state.pool(id)
    }

    /// Returns the pool behind `id`, mutably, for running pool
    /// operations.
    #[must_use]
    pub fn pool_mut(&mut self, id: PoolId) -> Option<&mut Pool> {
        self.state.pool_mut(id)
    }

    /// Iterates over all pools in creation order.
    pub fn pools(&self) -> impl Iterator<Item = (PoolId, &Pool)> {
        self.state.pools()
    }

    /// Creates the unique pool for an unordered pair.  See
    /// [`RegistryImplementation::create_pair`].
    pub fn create_pair(&mut self, asset_a: AssetId, asset_b: AssetId) -> Result<PoolId> {
        self.beacon
            .implementation()
            .create_pair(&mut self.state, asset_a, asset_b)
    }

    /// Sets the swap fee rate.  Owner-only.
    pub fn set_fee_rate(&mut self, caller: AccountId, rate: BasisPoints) -> Result<()> {
        self.beacon
            .implementation()
            .set_fee_rate(&mut self.state, caller, rate)
    }

    /// Sets the protocol fee recipient.  Owner-only.
    pub fn set_fee_recipient(&mut self, caller: AccountId, recipient: AccountId) -> Result<()> {
        self.beacon
            .implementation()
            .set_fee_recipient(&mut self.state, caller, recipient)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::AssetId;
    use crate::error::AmmError;
    use crate::pool::ConstantProductPool;
    use crate::registry::PairRegistry;
    use crate::traits::PoolImplementation;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    fn owner() -> AccountId {
        AccountId::from_bytes([1u8; 32])
    }

    /// Registry implementation that refuses to create anything;
    /// distinctive enough to observe an upgrade.
    struct FrozenRegistry;

    impl RegistryImplementation for FrozenRegistry {
        fn create_pair(
            &self,
            _state: &mut RegistryState,
            _asset_a: AssetId,
            _asset_b: AssetId,
        ) -> Result<PoolId> {
            Err(AmmError::Unauthorized)
        }

        fn set_fee_rate(
            &self,
            _state: &mut RegistryState,
            _caller: AccountId,
            _rate: BasisPoints,
        ) -> Result<()> {
            Err(AmmError::Unauthorized)
        }

        fn set_fee_recipient(
            &self,
            _state: &mut RegistryState,
            _caller: AccountId,
            _recipient: AccountId,
        ) -> Result<()> {
            Err(AmmError::Unauthorized)
        }
    }

    fn registry() -> Registry {
        let pool_beacon: Arc<Beacon<dyn PoolImplementation>> =
            Arc::new(Beacon::new(owner(), Arc::new(ConstantProductPool)));
        let Ok(state) = RegistryState::new(
            AccountId::from_bytes([2u8; 32]),
            owner(),
            BasisPoints::new(30),
            AccountId::NULL,
            pool_beacon,
        ) else {
            panic!("expected Ok");
        };
        let beacon: Arc<Beacon<dyn RegistryImplementation>> =
            Arc::new(Beacon::new(owner(), Arc::new(PairRegistry)));
        Registry::new(state, beacon)
    }

    #[test]
    fn create_and_look_up() {
        let mut registry = registry();
        let Ok(id) = registry.create_pair(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(registry.get_pair(asset(2), asset(1)), Some(id));
        assert_eq!(registry.pair_count(), 1);
        assert!(registry.pool(id).is_some());
        assert!(registry.pool_mut(id).is_some());
    }

    #[test]
    fn fee_setters_route_through_the_beacon() {
        let mut registry = registry();
        let Ok(()) = registry.set_fee_rate(owner(), BasisPoints::new(50)) else {
            panic!("expected Ok");
        };
        assert_eq!(registry.fee_rate().get(), 50);

        let recipient = AccountId::from_bytes([9u8; 32]);
        let Ok(()) = registry.set_fee_recipient(owner(), recipient) else {
            panic!("expected Ok");
        };
        assert_eq!(registry.fee_recipient(), recipient);
    }

    #[test]
    fn beacon_upgrade_changes_behavior_and_preserves_state() {
        let mut registry = registry();
        let Ok(id) = registry.create_pair(asset(1), asset(2)) else {
            panic!("expected Ok");
        };

        let beacon = registry.beacon();
        let Ok(()) = beacon.upgrade_to(owner(), Arc::new(FrozenRegistry)) else {
            panic!("expected Ok");
        };
        assert_eq!(
            registry.create_pair(asset(1), asset(3)),
            Err(AmmError::Unauthorized)
        );
        // Existing pools and lookups survive the upgrade.
        assert_eq!(registry.get_pair(asset(1), asset(2)), Some(id));
        assert_eq!(registry.pair_count(), 1);

        let Ok(()) = beacon.upgrade_to(owner(), Arc::new(PairRegistry)) else {
            panic!("expected Ok");
        };
        let Ok(_) = registry.create_pair(asset(1), asset(3)) else {
            panic!("expected Ok after downgrade");
        };
        assert_eq!(registry.pair_count(), 2);
    }
}
