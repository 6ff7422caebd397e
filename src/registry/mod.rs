//! Pair registry: one pool per unordered asset pair, plus system-wide
//! fee policy.

mod instance;
mod pair_registry;
mod state;

pub use instance::Registry;
pub use pair_registry::PairRegistry;
pub use state::{PoolId, RegistryState};
