//! Fundamental domain value types used throughout the AMM library.
//!
//! This module contains the core value types that model the exchange
//! domain: asset and account identifiers, amounts, fee rates, timestamps,
//! and the canonical asset pair.  All types use newtypes with validated
//! constructors to enforce invariants.

mod account_id;
mod amount;
mod asset_id;
mod asset_pair;
mod basis_points;
mod fee_config;
mod rounding;
mod timestamp;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use basis_points::BasisPoints;
pub use fee_config::{read_fee_config, write_fee_config, FeeConfig, SharedFeeConfig, MAX_FEE_BPS};
pub use rounding::Rounding;
pub use timestamp::Timestamp;
