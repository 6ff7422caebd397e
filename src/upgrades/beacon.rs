//! Single mutable implementation pointer shared by many instances.

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::AccountId;
use crate::error::{AmmError, Result};

/// An implementation pointer: one atomically-swappable reference to the
/// "current code version" for a whole class of instances.
///
/// Every dependent instance holds an `Arc<Beacon<dyn …>>` and resolves
/// [`implementation`](Self::implementation) on each invocation, never
/// caching the result across calls.  Upgrading the beacon therefore takes
/// effect for all dependents on their very next call, with no
/// per-instance migration; calls already in flight keep the `Arc` they
/// resolved.
///
/// The type parameter is the behavior interface, typically a trait
/// object such as
/// [`dyn PoolImplementation`](crate::traits::PoolImplementation).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use beacon_amm::domain::AccountId;
/// use beacon_amm::pool::ConstantProductPool;
/// use beacon_amm::traits::PoolImplementation;
/// use beacon_amm::upgrades::Beacon;
///
/// let owner = AccountId::from_bytes([1u8; 32]);
/// let beacon: Beacon<dyn PoolImplementation> =
///     Beacon::new(owner, Arc::new(ConstantProductPool));
/// let current = beacon.implementation();
/// # let _ = current;
/// ```
pub struct Beacon<T: ?Sized> {
    owner: RwLock<AccountId>,
    implementation: RwLock<Arc<T>>,
}

// Manual impl: the implementation is a trait object with no Debug bound.
impl<T: ?Sized> core::fmt::Debug for Beacon<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Beacon")
            .field("owner", &self.owner())
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized> Beacon<T> {
    /// Creates a beacon pointing at `implementation`, owned by `owner`.
    pub fn new(owner: AccountId, implementation: Arc<T>) -> Self {
        Self {
            owner: RwLock::new(owner),
            implementation: RwLock::new(implementation),
        }
    }

    /// Returns the current implementation. Never fails.
    #[must_use]
    pub fn implementation(&self) -> Arc<T> {
        // A poisoned lock only means a reader panicked while holding it;
        // the Arc inside is still intact.
        Arc::clone(
            &self
                .implementation
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Returns the account authorized to upgrade this beacon.
    #[must_use]
    pub fn owner(&self) -> AccountId {
        *self.owner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Atomically replaces the implementation pointer.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Unauthorized`] if `caller` is not the owner.
    pub fn upgrade_to(&self, caller: AccountId, new_implementation: Arc<T>) -> Result<()> {
        if caller != self.owner() {
            return Err(AmmError::Unauthorized);
        }
        *self
            .implementation
            .write()
            .unwrap_or_else(PoisonError::into_inner) = new_implementation;
        Ok(())
    }

    /// Hands beacon ownership to `new_owner`.
    ///
    /// Used at bootstrap to place both beacons under the upgrade
    /// coordinator's control.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Unauthorized`] if `caller` is not the current
    /// owner.
    pub fn transfer_ownership(&self, caller: AccountId, new_owner: AccountId) -> Result<()> {
        let mut owner = self.owner.write().unwrap_or_else(PoisonError::into_inner);
        if caller != *owner {
            return Err(AmmError::Unauthorized);
        }
        *owner = new_owner;
        Ok(())
    }
}
