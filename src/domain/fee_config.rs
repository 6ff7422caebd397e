//! Protocol fee configuration shared between registry and pools.

use std::sync::{Arc, PoisonError, RwLock};

use super::{AccountId, BasisPoints};
use crate::error::AmmError;

/// Maximum configurable swap fee rate: 1000 bps = 10%.
pub const MAX_FEE_BPS: u32 = 1_000;

/// The registry's fee configuration.
///
/// - `rate` — the swap fee in basis points, capped at [`MAX_FEE_BPS`].
/// - `recipient` — the account receiving protocol-fee liquidity shares;
///   [`AccountId::NULL`] disables protocol fee collection.
///
/// Pools read the configuration through a [`SharedFeeConfig`] handle at
/// call time, so a registry-level fee change takes effect for every
/// existing pool on its next operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeConfig {
    rate: BasisPoints,
    recipient: AccountId,
}

/// Shared, interior-mutable handle to a [`FeeConfig`].
///
/// The registry holds the writing side; every pool created by that
/// registry holds a clone and reads the current value per call, never
/// caching it.
pub type SharedFeeConfig = Arc<RwLock<FeeConfig>>;

impl FeeConfig {
    /// Creates a fee configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFeeRate`] if `rate` exceeds
    /// [`MAX_FEE_BPS`].
    pub fn new(rate: BasisPoints, recipient: AccountId) -> Result<Self, AmmError> {
        if rate.get() > MAX_FEE_BPS {
            return Err(AmmError::InvalidFeeRate);
        }
        Ok(Self { rate, recipient })
    }

    /// Returns the swap fee rate.
    #[must_use]
    pub const fn rate(&self) -> BasisPoints {
        self.rate
    }

    /// Returns the protocol fee recipient.
    #[must_use]
    pub const fn recipient(&self) -> AccountId {
        self.recipient
    }

    /// Returns `true` if protocol fee collection is enabled.
    #[must_use]
    pub fn protocol_fee_enabled(&self) -> bool {
        !self.recipient.is_null()
    }

    /// Wraps the configuration in a [`SharedFeeConfig`] handle.
    #[must_use]
    pub fn into_shared(self) -> SharedFeeConfig {
        Arc::new(RwLock::new(self))
    }
}

/// Reads the current value out of a shared handle.
///
/// Lock poisoning cannot corrupt a `Copy` value, so a poisoned lock is
/// recovered rather than propagated.
#[must_use]
pub fn read_fee_config(shared: &SharedFeeConfig) -> FeeConfig {
    *shared.read().unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the value behind a shared handle.
pub fn write_fee_config(shared: &SharedFeeConfig, value: FeeConfig) {
    *shared.write().unwrap_or_else(PoisonError::into_inner) = value;
}
