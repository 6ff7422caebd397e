//! Beacon-swappable code version for pools.
//!
//! A pool instance is persistent state ([`PoolState`]) plus a pointer to
//! the code currently governing it, held by a shared
//! [`Beacon`](crate::upgrades::Beacon).  [`PoolImplementation`] is the
//! seam between the two: implementations are stateless, operate on any
//! `PoolState` handed to them, and can be hot-swapped for every dependent
//! pool at once by upgrading the beacon.
//!
//! Implementations must uphold the crate-wide pool invariants:
//!
//! - every operation is guarded against reentrancy and atomic
//!   all-or-nothing;
//! - after any swap the fee-adjusted reserve product does not decrease;
//! - reserves are only ever moved by mint/burn/swap/skim/sync.

use crate::domain::{AccountId, Amount, Timestamp};
use crate::error::Result;
use crate::pool::PoolState;
use crate::traits::TokenLedger;

/// The executable behavior of a pool, resolved through its beacon on
/// every call.
///
/// The canonical implementation is
/// [`ConstantProductPool`](crate::pool::ConstantProductPool).
pub trait PoolImplementation: Send + Sync {
    /// Issues liquidity shares for assets already deposited to the
    /// pool's account.
    ///
    /// Returns the number of shares minted to `recipient`.
    fn mint(
        &self,
        state: &mut PoolState,
        ledger: &mut dyn TokenLedger,
        recipient: AccountId,
        now: Timestamp,
    ) -> Result<Amount>;

    /// Redeems liquidity shares already transferred to the pool's
    /// account for a proportional cut of both reserves.
    ///
    /// Returns the amounts of `(asset0, asset1)` paid out to `recipient`.
    fn burn(
        &self,
        state: &mut PoolState,
        ledger: &mut dyn TokenLedger,
        recipient: AccountId,
        now: Timestamp,
    ) -> Result<(Amount, Amount)>;

    /// Exchanges assets: transfers the requested outputs optimistically,
    /// then enforces the constant-product invariant against the inputs
    /// actually received.
    fn swap(
        &self,
        state: &mut PoolState,
        ledger: &mut dyn TokenLedger,
        amount0_out: Amount,
        amount1_out: Amount,
        recipient: AccountId,
        now: Timestamp,
    ) -> Result<()>;

    /// Transfers any balance in excess of the tracked reserves to
    /// `recipient`.
    fn skim(
        &self,
        state: &mut PoolState,
        ledger: &mut dyn TokenLedger,
        recipient: AccountId,
    ) -> Result<()>;

    /// Force-resyncs the tracked reserves to the actual ledger balances.
    fn sync(
        &self,
        state: &mut PoolState,
        ledger: &mut dyn TokenLedger,
        now: Timestamp,
    ) -> Result<()>;
}
