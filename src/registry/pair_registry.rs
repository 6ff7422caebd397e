//! Canonical registry implementation.

use crate::domain::{AccountId, AssetId, AssetPair, BasisPoints, FeeConfig};
use crate::error::{AmmError, Result};
use crate::pool::Pool;
use crate::registry::{PoolId, RegistryState};
use crate::traits::RegistryImplementation;

/// The canonical [`RegistryImplementation`]: one pool per unordered
/// pair, owner-gated fee policy.
///
/// Stateless; all persistent data lives in the [`RegistryState`] each
/// call operates on.
#[derive(Debug, Default, Clone, Copy)]
pub struct PairRegistry;

impl PairRegistry {
    fn check_owner(state: &RegistryState, caller: AccountId) -> Result<()> {
        if caller != state.owner() {
            return Err(AmmError::Unauthorized);
        }
        Ok(())
    }
}

impl RegistryImplementation for PairRegistry {
    fn create_pair(
        &self,
        state: &mut RegistryState,
        asset_a: AssetId,
        asset_b: AssetId,
    ) -> Result<PoolId> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        if state.contains_pair(&pair) {
            return Err(AmmError::PairExists);
        }
        let pool = Pool::new(pair, state.fee_handle(), state.pool_beacon());
        Ok(state.insert_pool(pair, pool))
    }

    fn set_fee_rate(
        &self,
        state: &mut RegistryState,
        caller: AccountId,
        rate: BasisPoints,
    ) -> Result<()> {
        // Authorization before validation: a stranger learns nothing
        // about which rates are acceptable.
        Self::check_owner(state, caller)?;
        let config = FeeConfig::new(rate, state.fee_recipient())?;
        state.write_fee(config);
        Ok(())
    }

    fn set_fee_recipient(
        &self,
        state: &mut RegistryState,
        caller: AccountId,
        recipient: AccountId,
    ) -> Result<()> {
        Self::check_owner(state, caller)?;
        let config = FeeConfig::new(state.fee_rate(), recipient)?;
        state.write_fee(config);
        Ok(())
    }
}
