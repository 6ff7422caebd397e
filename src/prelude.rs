//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use beacon_amm::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, BasisPoints, FeeConfig, Rounding, SharedFeeConfig,
    Timestamp,
};

// Re-export core traits
pub use crate::traits::{PoolImplementation, RegistryImplementation, TokenLedger};

// Re-export error types
pub use crate::error::{AmmError, ErrorKind, Result};

// Re-export pool and registry surfaces
pub use crate::pool::{ConstantProductPool, Pool, PoolState, MINIMUM_LIQUIDITY};
pub use crate::registry::{PairRegistry, PoolId, Registry, RegistryState};

// Re-export upgrade machinery
pub use crate::upgrades::{Beacon, UpgradeCoordinator};

// Re-export the in-memory ledger for tests and demos
pub use crate::ledger::InMemoryLedger;
