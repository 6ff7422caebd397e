//! Constant-product (x·y = k) pool implementation.

use crate::domain::{AccountId, Amount, BasisPoints, FeeConfig, Timestamp};
use crate::error::{AmmError, Result};
use crate::math::floor_sqrt;
use crate::pool::PoolState;
use crate::traits::{PoolImplementation, TokenLedger};

/// Liquidity shares permanently locked on the first deposit.
///
/// Minted to [`AccountId::NULL`] so the share supply can never return to
/// zero, which pins the minimum share value and blunts first-depositor
/// share-price manipulation.
pub const MINIMUM_LIQUIDITY: u128 = 1_000;

/// The canonical [`PoolImplementation`]: constant-product pricing with a
/// basis-point swap fee and an optional protocol fee on liquidity
/// growth.
///
/// Stateless by construction; all persistent data lives in the
/// [`PoolState`] each call operates on, so a single instance can govern
/// every pool behind a beacon.
///
/// Deposit-then-call convention: `mint`, `burn`, and `swap` read what
/// the caller has already transferred to the pool's account as the
/// operation's input.  The fee-adjusted invariant check at the end of
/// `swap` is what makes the optimistic accounting safe.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstantProductPool;

impl ConstantProductPool {
    fn balances(state: &PoolState, ledger: &dyn TokenLedger) -> (Amount, Amount) {
        let pair = state.pair();
        (
            ledger.balance_of(state.account(), pair.asset0()),
            ledger.balance_of(state.account(), pair.asset1()),
        )
    }

    fn reserve_product(state: &PoolState) -> Result<u128> {
        let (reserve0, reserve1, _) = state.reserves();
        reserve0
            .get()
            .checked_mul(reserve1.get())
            .ok_or(AmmError::Overflow("reserve product"))
    }

    /// Mints the protocol's cut of liquidity growth since the last
    /// liquidity event, equivalent to charging 1/6 of the swap fees.
    ///
    /// Returns whether the protocol fee is currently enabled, so the
    /// caller knows to record a fresh `k_last` afterwards.
    fn mint_protocol_fee(
        state: &mut PoolState,
        ledger: &mut dyn TokenLedger,
        fee: &FeeConfig,
    ) -> Result<bool> {
        let fee_on = fee.protocol_fee_enabled();
        if !fee_on {
            if state.k_last() != 0 {
                state.set_k_last(0);
            }
            return Ok(false);
        }
        if state.k_last() == 0 {
            return Ok(true);
        }
        let root_k = floor_sqrt(Self::reserve_product(state)?);
        let root_k_last = floor_sqrt(state.k_last());
        if root_k > root_k_last {
            let supply = ledger.total_supply(state.share_asset()).get();
            let numerator = supply
                .checked_mul(root_k - root_k_last)
                .ok_or(AmmError::Overflow("protocol fee numerator"))?;
            let denominator = root_k
                .checked_mul(5)
                .and_then(|scaled| scaled.checked_add(root_k_last))
                .ok_or(AmmError::Overflow("protocol fee denominator"))?;
            let shares = numerator / denominator;
            if shares > 0 {
                ledger.mint(fee.recipient(), state.share_asset(), Amount::new(shares))?;
            }
        }
        Ok(true)
    }

    fn record_k_last(state: &mut PoolState) -> Result<()> {
        let k = Self::reserve_product(state)?;
        state.set_k_last(k);
        Ok(())
    }
}

impl PoolImplementation for ConstantProductPool {
    fn mint(
        &self,
        state: &mut PoolState,
        ledger: &mut dyn TokenLedger,
        recipient: AccountId,
        now: Timestamp,
    ) -> Result<Amount> {
        state.with_guard(|state| {
            let (balance0, balance1) = Self::balances(state, ledger);
            let (reserve0, reserve1, _) = state.reserves();
            let amount0 = balance0.saturating_sub(&reserve0);
            let amount1 = balance1.saturating_sub(&reserve1);

            let fee = state.fee();
            let fee_on = Self::mint_protocol_fee(state, ledger, &fee)?;

            let supply = ledger.total_supply(state.share_asset()).get();
            let minted = if supply == 0 {
                let k = amount0
                    .get()
                    .checked_mul(amount1.get())
                    .ok_or(AmmError::Overflow("initial deposit product"))?;
                let shares = floor_sqrt(k)
                    .checked_sub(MINIMUM_LIQUIDITY)
                    .ok_or(AmmError::InsufficientInitialLiquidity)?;
                if shares == 0 {
                    return Err(AmmError::InsufficientInitialLiquidity);
                }
                ledger.mint(
                    AccountId::NULL,
                    state.share_asset(),
                    Amount::new(MINIMUM_LIQUIDITY),
                )?;
                shares
            } else {
                let by0 = amount0
                    .get()
                    .checked_mul(supply)
                    .ok_or(AmmError::Overflow("mint share computation"))?
                    .checked_div(reserve0.get())
                    .ok_or(AmmError::InsufficientLiquidity)?;
                let by1 = amount1
                    .get()
                    .checked_mul(supply)
                    .ok_or(AmmError::Overflow("mint share computation"))?
                    .checked_div(reserve1.get())
                    .ok_or(AmmError::InsufficientLiquidity)?;
                let shares = by0.min(by1);
                if shares == 0 {
                    return Err(AmmError::InsufficientLiquidityMinted);
                }
                shares
            };

            ledger.mint(recipient, state.share_asset(), Amount::new(minted))?;
            state.sync_balances(balance0, balance1, now)?;
            if fee_on {
                Self::record_k_last(state)?;
            }
            Ok(Amount::new(minted))
        })
    }

    fn burn(
        &self,
        state: &mut PoolState,
        ledger: &mut dyn TokenLedger,
        recipient: AccountId,
        now: Timestamp,
    ) -> Result<(Amount, Amount)> {
        state.with_guard(|state| {
            let pair = state.pair();
            let account = state.account();
            let (balance0, balance1) = Self::balances(state, ledger);
            let shares = ledger.balance_of(account, state.share_asset());

            let fee = state.fee();
            let fee_on = Self::mint_protocol_fee(state, ledger, &fee)?;

            let supply = ledger.total_supply(state.share_asset()).get();
            if supply == 0 {
                return Err(AmmError::InsufficientLiquidityBurned);
            }
            // Pro-rata on actual balances, floor rounding in the pool's
            // favor.
            let amount0 = shares
                .get()
                .checked_mul(balance0.get())
                .ok_or(AmmError::Overflow("burn payout computation"))?
                / supply;
            let amount1 = shares
                .get()
                .checked_mul(balance1.get())
                .ok_or(AmmError::Overflow("burn payout computation"))?
                / supply;
            if amount0 == 0 || amount1 == 0 {
                return Err(AmmError::InsufficientLiquidityBurned);
            }

            ledger.burn(account, state.share_asset(), shares)?;
            ledger.transfer(account, recipient, pair.asset0(), Amount::new(amount0))?;
            ledger.transfer(account, recipient, pair.asset1(), Amount::new(amount1))?;

            let (balance0, balance1) = Self::balances(state, ledger);
            state.sync_balances(balance0, balance1, now)?;
            if fee_on {
                Self::record_k_last(state)?;
            }
            Ok((Amount::new(amount0), Amount::new(amount1)))
        })
    }

    fn swap(
        &self,
        state: &mut PoolState,
        ledger: &mut dyn TokenLedger,
        amount0_out: Amount,
        amount1_out: Amount,
        recipient: AccountId,
        now: Timestamp,
    ) -> Result<()> {
        state.with_guard(|state| {
            if amount0_out.is_zero() && amount1_out.is_zero() {
                return Err(AmmError::InsufficientOutputAmount);
            }
            let (reserve0, reserve1, _) = state.reserves();
            if amount0_out >= reserve0 || amount1_out >= reserve1 {
                return Err(AmmError::InsufficientLiquidity);
            }

            let pair = state.pair();
            let account = state.account();
            let (balance0, balance1) = Self::balances(state, ledger);

            // Inputs are whatever the caller pre-deposited in excess of
            // the tracked reserves.
            let amount0_in = balance0.saturating_sub(&reserve0);
            let amount1_in = balance1.saturating_sub(&reserve1);
            if amount0_in.is_zero() && amount1_in.is_zero() {
                return Err(AmmError::InsufficientInputAmount);
            }

            // Validate the invariant against the post-output balances
            // before moving anything, so a failed swap changes nothing.
            let out0 = amount0_out.get();
            let out1 = amount1_out.get();
            let after0 = balance0
                .get()
                .checked_sub(out0)
                .ok_or(AmmError::InsufficientLiquidity)?;
            let after1 = balance1
                .get()
                .checked_sub(out1)
                .ok_or(AmmError::InsufficientLiquidity)?;

            let fee_bps = u128::from(state.fee().rate().get());
            let denominator = u128::from(BasisPoints::DENOMINATOR);
            let adjusted0 = after0
                .checked_mul(denominator)
                .and_then(|scaled| scaled.checked_sub(amount0_in.get().checked_mul(fee_bps)?))
                .ok_or(AmmError::Overflow("swap adjusted balance"))?;
            let adjusted1 = after1
                .checked_mul(denominator)
                .and_then(|scaled| scaled.checked_sub(amount1_in.get().checked_mul(fee_bps)?))
                .ok_or(AmmError::Overflow("swap adjusted balance"))?;

            let lhs = adjusted0
                .checked_mul(adjusted1)
                .ok_or(AmmError::Overflow("swap invariant product"))?;
            let rhs = Self::reserve_product(state)?
                .checked_mul(denominator)
                .and_then(|scaled| scaled.checked_mul(denominator))
                .ok_or(AmmError::Overflow("swap invariant product"))?;
            if lhs < rhs {
                return Err(AmmError::InvariantViolation);
            }

            if out0 > 0 {
                ledger.transfer(account, recipient, pair.asset0(), amount0_out)?;
            }
            if out1 > 0 {
                ledger.transfer(account, recipient, pair.asset1(), amount1_out)?;
            }
            state.sync_balances(Amount::new(after0), Amount::new(after1), now)
        })
    }

    fn skim(
        &self,
        state: &mut PoolState,
        ledger: &mut dyn TokenLedger,
        recipient: AccountId,
    ) -> Result<()> {
        state.with_guard(|state| {
            let pair = state.pair();
            let account = state.account();
            let (balance0, balance1) = Self::balances(state, ledger);
            let (reserve0, reserve1, _) = state.reserves();
            let excess0 = balance0.saturating_sub(&reserve0);
            let excess1 = balance1.saturating_sub(&reserve1);
            if !excess0.is_zero() {
                ledger.transfer(account, recipient, pair.asset0(), excess0)?;
            }
            if !excess1.is_zero() {
                ledger.transfer(account, recipient, pair.asset1(), excess1)?;
            }
            Ok(())
        })
    }

    fn sync(
        &self,
        state: &mut PoolState,
        ledger: &mut dyn TokenLedger,
        now: Timestamp,
    ) -> Result<()> {
        state.with_guard(|state| {
            let (balance0, balance1) = Self::balances(state, ledger);
            state.sync_balances(balance0, balance1, now)
        })
    }
}
