//! Pool state, the constant-product implementation, and the instance
//! wrapper binding the two through a beacon.

mod constant_product;
mod instance;
mod state;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::{ConstantProductPool, MINIMUM_LIQUIDITY};
pub use instance::Pool;
pub use state::PoolState;
