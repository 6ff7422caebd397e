//! Beacon-swappable code version for the pair registry.
//!
//! Mirrors [`PoolImplementation`](crate::traits::PoolImplementation) at
//! the registry level: a [`Registry`](crate::registry::Registry) instance
//! is persistent state plus a beacon-resolved implementation.  Read-only
//! lookups (`get_pair`, enumeration) live on the state and are not
//! versioned; only the state-changing operations go through this seam.

use crate::domain::{AccountId, AssetId, BasisPoints};
use crate::error::Result;
use crate::registry::{PoolId, RegistryState};

/// The executable behavior of a registry, resolved through its beacon on
/// every call.
///
/// The canonical implementation is
/// [`PairRegistry`](crate::registry::PairRegistry).
pub trait RegistryImplementation: Send + Sync {
    /// Creates the unique pool for the unordered pair `(asset_a,
    /// asset_b)` and returns its id.
    ///
    /// Must be atomic: on failure no partial registry state may remain,
    /// and no two pools may ever exist for the same unordered pair.
    fn create_pair(
        &self,
        state: &mut RegistryState,
        asset_a: AssetId,
        asset_b: AssetId,
    ) -> Result<PoolId>;

    /// Sets the swap fee rate. Owner-only; capped at 1000 bps.
    fn set_fee_rate(
        &self,
        state: &mut RegistryState,
        caller: AccountId,
        rate: BasisPoints,
    ) -> Result<()>;

    /// Sets the protocol fee recipient. Owner-only;
    /// [`AccountId::NULL`] disables protocol fee collection.
    fn set_fee_recipient(
        &self,
        state: &mut RegistryState,
        caller: AccountId,
        recipient: AccountId,
    ) -> Result<()>;
}
