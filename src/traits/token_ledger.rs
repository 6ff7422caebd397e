//! Boundary trait for the external fungible-token ledger.
//!
//! The exchange core does not implement balance or allowance bookkeeping
//! itself.  It consumes a [`TokenLedger`]: it reads balances of accounts
//! it controls, moves assets it holds, and issues/destroys the
//! liquidity-share asset of each pool.  Any ledger that satisfies this
//! contract can back the exchange; tests use the in-memory
//! [`InMemoryLedger`](crate::ledger::InMemoryLedger).
//!
//! # Contract
//!
//! - Balance reads never fail; an account that was never credited has a
//!   zero balance.
//! - `transfer` and `burn` fail with
//!   [`AmmError::InsufficientBalance`](crate::error::AmmError) when the
//!   source balance is too low, without any state change.
//! - `mint` increases both the recipient balance and the asset's total
//!   supply; `burn` decreases both.
//! - A failed operation must leave the ledger exactly as it was.

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::Result;

/// Fungible balance/transfer semantics for arbitrary assets, including
/// each pool's liquidity-share asset.
pub trait TokenLedger {
    /// Returns the balance of `asset` held by `account`.
    fn balance_of(&self, account: AccountId, asset: AssetId) -> Amount;

    /// Returns the total issued supply of `asset`.
    fn total_supply(&self, asset: AssetId) -> Amount;

    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientBalance`](crate::error::AmmError) if
    ///   `from` holds less than `amount`.
    /// - [`AmmError::Overflow`](crate::error::AmmError) if the recipient
    ///   balance would overflow.
    fn transfer(&mut self, from: AccountId, to: AccountId, asset: AssetId, amount: Amount)
        -> Result<()>;

    /// Creates `amount` new units of `asset` in `to`'s balance.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`](crate::error::AmmError) if the balance or
    ///   total supply would overflow.
    fn mint(&mut self, to: AccountId, asset: AssetId, amount: Amount) -> Result<()>;

    /// Destroys `amount` units of `asset` from `from`'s balance.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientBalance`](crate::error::AmmError) if
    ///   `from` holds less than `amount`.
    fn burn(&mut self, from: AccountId, asset: AssetId, amount: Amount) -> Result<()>;
}
