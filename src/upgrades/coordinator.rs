//! Owner-gated coordination of the two system beacons.

use std::sync::Arc;

use super::Beacon;
use crate::domain::AccountId;
use crate::error::{AmmError, Result};
use crate::traits::{PoolImplementation, RegistryImplementation};

/// Governs the pool beacon and the registry ("factory") beacon, and
/// tracks which registry instance is currently canonical.
///
/// The coordinator separates upgrade *policy* from the beacon
/// *mechanism*: the beacons hold the swappable pointers, the coordinator
/// decides who may flip them.  At bootstrap both beacons transfer their
/// ownership to the coordinator's own [`account`](Self::account), after
/// which every upgrade flows through the coordinator's owner check.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use beacon_amm::domain::AccountId;
/// use beacon_amm::pool::ConstantProductPool;
/// use beacon_amm::registry::PairRegistry;
/// use beacon_amm::traits::{PoolImplementation, RegistryImplementation};
/// use beacon_amm::upgrades::{Beacon, UpgradeCoordinator};
///
/// let admin = AccountId::from_bytes([1u8; 32]);
/// let coordinator_account = AccountId::from_bytes([2u8; 32]);
///
/// let pool_beacon: Arc<Beacon<dyn PoolImplementation>> =
///     Arc::new(Beacon::new(admin, Arc::new(ConstantProductPool)));
/// let factory_beacon: Arc<Beacon<dyn RegistryImplementation>> =
///     Arc::new(Beacon::new(admin, Arc::new(PairRegistry)));
///
/// let mut coordinator = UpgradeCoordinator::new(admin, coordinator_account);
/// coordinator
///     .set_beacons(admin, Arc::clone(&factory_beacon), Arc::clone(&pool_beacon))
///     .expect("configured");
///
/// // Hand the beacons over so only the coordinator can upgrade them.
/// pool_beacon.transfer_ownership(admin, coordinator_account).expect("transferred");
/// factory_beacon.transfer_ownership(admin, coordinator_account).expect("transferred");
///
/// coordinator
///     .upgrade_pool_implementation(admin, Arc::new(ConstantProductPool))
///     .expect("upgraded");
/// ```
#[derive(Debug)]
pub struct UpgradeCoordinator {
    owner: AccountId,
    account: AccountId,
    factory_beacon: Option<Arc<Beacon<dyn RegistryImplementation>>>,
    pair_beacon: Option<Arc<Beacon<dyn PoolImplementation>>>,
    current_registry: Option<AccountId>,
}

impl UpgradeCoordinator {
    /// Creates a coordinator.
    ///
    /// `owner` is the account allowed to invoke it; `account` is the
    /// coordinator's own identity, which the beacons must name as their
    /// owner for upgrades to succeed.
    #[must_use]
    pub fn new(owner: AccountId, account: AccountId) -> Self {
        Self {
            owner,
            account,
            factory_beacon: None,
            pair_beacon: None,
            current_registry: None,
        }
    }

    /// Returns the account allowed to invoke owner-gated operations.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Returns the coordinator's own identity.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Binds the two beacons this coordinator will govern.
    ///
    /// One-time configuration: calling again with the same beacons is a
    /// no-op, calling with different ones fails.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if `caller` is not the owner.
    /// - [`AmmError::BeaconsAlreadySet`] on an attempt to rebind to
    ///   different beacons.
    pub fn set_beacons(
        &mut self,
        caller: AccountId,
        factory_beacon: Arc<Beacon<dyn RegistryImplementation>>,
        pair_beacon: Arc<Beacon<dyn PoolImplementation>>,
    ) -> Result<()> {
        self.check_owner(caller)?;
        match (&self.factory_beacon, &self.pair_beacon) {
            (None, None) => {
                self.factory_beacon = Some(factory_beacon);
                self.pair_beacon = Some(pair_beacon);
                Ok(())
            }
            (Some(factory), Some(pair))
                if Arc::ptr_eq(factory, &factory_beacon) && Arc::ptr_eq(pair, &pair_beacon) =>
            {
                Ok(())
            }
            _ => Err(AmmError::BeaconsAlreadySet),
        }
    }

    /// Records which registry instance is canonical for discovery.
    ///
    /// Does not itself affect beacon-governed code.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Unauthorized`] if `caller` is not the owner.
    pub fn set_current_registry(&mut self, caller: AccountId, registry: AccountId) -> Result<()> {
        self.check_owner(caller)?;
        self.current_registry = Some(registry);
        Ok(())
    }

    /// Returns the canonical registry identity, if one was recorded.
    #[must_use]
    pub const fn current_registry(&self) -> Option<AccountId> {
        self.current_registry
    }

    /// Points the pool beacon at a new implementation.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if `caller` is not the coordinator's
    ///   owner, or if the coordinator's account is not the beacon's
    ///   owner.
    /// - [`AmmError::BeaconsNotSet`] before [`set_beacons`](Self::set_beacons).
    pub fn upgrade_pool_implementation(
        &self,
        caller: AccountId,
        new_implementation: Arc<dyn PoolImplementation>,
    ) -> Result<()> {
        self.check_owner(caller)?;
        let beacon = self.pair_beacon.as_ref().ok_or(AmmError::BeaconsNotSet)?;
        beacon.upgrade_to(self.account, new_implementation)
    }

    /// Points the registry beacon at a new implementation.
    ///
    /// # Errors
    ///
    /// Same conditions as
    /// [`upgrade_pool_implementation`](Self::upgrade_pool_implementation).
    pub fn upgrade_registry_implementation(
        &self,
        caller: AccountId,
        new_implementation: Arc<dyn RegistryImplementation>,
    ) -> Result<()> {
        self.check_owner(caller)?;
        let beacon = self
            .factory_beacon
            .as_ref()
            .ok_or(AmmError::BeaconsNotSet)?;
        beacon.upgrade_to(self.account, new_implementation)
    }

    /// Reads the pool beacon's current implementation.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::BeaconsNotSet`] before
    /// [`set_beacons`](Self::set_beacons).
    pub fn current_pool_implementation(&self) -> Result<Arc<dyn PoolImplementation>> {
        Ok(self
            .pair_beacon
            .as_ref()
            .ok_or(AmmError::BeaconsNotSet)?
            .implementation())
    }

    /// Reads the registry beacon's current implementation.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::BeaconsNotSet`] before
    /// [`set_beacons`](Self::set_beacons).
    pub fn current_registry_implementation(&self) -> Result<Arc<dyn RegistryImplementation>> {
        Ok(self
            .factory_beacon
            .as_ref()
            .ok_or(AmmError::BeaconsNotSet)?
            .implementation())
    }

    fn check_owner(&self, caller: AccountId) -> Result<()> {
        if caller != self.owner {
            return Err(AmmError::Unauthorized);
        }
        Ok(())
    }
}
