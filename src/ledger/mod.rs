//! Ledger backends implementing [`TokenLedger`](crate::traits::TokenLedger).

mod memory;

pub use memory::InMemoryLedger;
