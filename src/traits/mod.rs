//! Core trait abstractions at the crate's seams.
//!
//! - [`TokenLedger`] — the external collaborator boundary: fungible
//!   balance/transfer/issue semantics.
//! - [`PoolImplementation`] / [`RegistryImplementation`] — the
//!   beacon-swappable code versions governing pool and registry
//!   instances.

mod pool_implementation;
mod registry_implementation;
mod token_ledger;

pub use pool_implementation::PoolImplementation;
pub use registry_implementation::RegistryImplementation;
pub use token_ledger::TokenLedger;
