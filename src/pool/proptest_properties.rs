//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers the economic properties the unit tests can only spot-check:
//!
//! 1. **Invariant preservation** — the reserve product never decreases
//!    across a swap at the maximum quoted output.
//! 2. **Swap reversibility** — a round-trip A→B→A never returns more
//!    than the original input.
//! 3. **Quote monotonicity** — a larger input never buys less output.
//! 4. **Liquidity conservation** — mint then burn never pays out more
//!    than was deposited.
//! 5. **First-deposit geometry** — initial shares plus the locked
//!    minimum equal the floor square root of the deposit product.

use proptest::prelude::*;

use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, BasisPoints, FeeConfig, Timestamp,
};
use crate::ledger::InMemoryLedger;
use crate::math::floor_sqrt;
use crate::pool::{ConstantProductPool, PoolState, MINIMUM_LIQUIDITY};
use crate::traits::{PoolImplementation, TokenLedger};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn asset0() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn asset1() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn lp() -> AccountId {
    AccountId::from_bytes([10u8; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([11u8; 32])
}

/// Fresh pool state seeded with `r0`/`r1` through a real first mint.
fn seeded(r0: u128, r1: u128) -> (PoolState, InMemoryLedger) {
    let Ok(pair) = AssetPair::new(asset0(), asset1()) else {
        panic!("valid pair");
    };
    let Ok(fee) = FeeConfig::new(BasisPoints::new(30), AccountId::NULL) else {
        panic!("valid fee config");
    };
    let mut state = PoolState::new(pair, fee.into_shared());
    let mut ledger = InMemoryLedger::new();
    let Ok(()) = ledger.mint(state.account(), asset0(), Amount::new(r0)) else {
        panic!("seed mint");
    };
    let Ok(()) = ledger.mint(state.account(), asset1(), Amount::new(r1)) else {
        panic!("seed mint");
    };
    let Ok(_) = ConstantProductPool.mint(&mut state, &mut ledger, lp(), Timestamp::new(100)) else {
        panic!("seed liquidity");
    };
    (state, ledger)
}

fn reserve_product(state: &PoolState) -> u128 {
    let (r0, r1, _) = state.reserves();
    r0.get() * r1.get()
}

/// Maximum output for `amount_in` under the fee-adjusted product.
fn quote_out(amount_in: u128, reserve_in: u128, reserve_out: u128, fee_bps: u128) -> u128 {
    let denominator = u128::from(BasisPoints::DENOMINATOR);
    let in_after_fee = amount_in * (denominator - fee_bps);
    in_after_fee * reserve_out / (reserve_in * denominator + in_after_fee)
}

/// Deposits `amount_in` of asset0 and swaps it for the quoted maximum of
/// asset1.  Returns the amount received.
fn swap_in0(
    state: &mut PoolState,
    ledger: &mut InMemoryLedger,
    amount_in: u128,
    now: u64,
) -> Option<u128> {
    let (r0, r1, _) = state.reserves();
    let out = quote_out(amount_in, r0.get(), r1.get(), 30);
    if out == 0 {
        return None;
    }
    ledger
        .mint(state.account(), asset0(), Amount::new(amount_in))
        .ok()?;
    ConstantProductPool
        .swap(
            state,
            ledger,
            Amount::ZERO,
            Amount::new(out),
            trader(),
            Timestamp::new(now),
        )
        .ok()?;
    Some(out)
}

fn swap_in1(
    state: &mut PoolState,
    ledger: &mut InMemoryLedger,
    amount_in: u128,
    now: u64,
) -> Option<u128> {
    let (r0, r1, _) = state.reserves();
    let out = quote_out(amount_in, r1.get(), r0.get(), 30);
    if out == 0 {
        return None;
    }
    ledger
        .mint(state.account(), asset1(), Amount::new(amount_in))
        .ok()?;
    ConstantProductPool
        .swap(
            state,
            ledger,
            Amount::new(out),
            Amount::ZERO,
            trader(),
            Timestamp::new(now),
        )
        .ok()?;
    Some(out)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Swap inputs small relative to reserves.
fn input_strategy() -> impl Strategy<Value = u128> {
    1u128..=100_000u128
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // -- Property 1: invariant preservation ---------------------------------

    #[test]
    fn prop_reserve_product_never_decreases(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        amount_in in input_strategy(),
    ) {
        let (mut state, mut ledger) = seeded(r0, r1);
        let k_before = reserve_product(&state);

        if swap_in0(&mut state, &mut ledger, amount_in, 110).is_none() {
            return Ok(());
        }
        let k_after = reserve_product(&state);
        prop_assert!(
            k_after >= k_before,
            "k decreased across a swap: {} -> {}",
            k_before, k_after
        );
    }

    // -- Property 2: swap reversibility -------------------------------------

    #[test]
    fn prop_round_trip_loses_value(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        amount_in in input_strategy(),
    ) {
        let (mut state, mut ledger) = seeded(r0, r1);

        let Some(received) = swap_in0(&mut state, &mut ledger, amount_in, 110) else {
            return Ok(());
        };
        let Some(returned) = swap_in1(&mut state, &mut ledger, received, 120) else {
            return Ok(());
        };
        prop_assert!(
            returned <= amount_in,
            "round-trip should lose value: final={} > original={}",
            returned, amount_in
        );
    }

    // -- Property 3: quote monotonicity -------------------------------------

    #[test]
    fn prop_quote_is_monotone_in_input(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        amount_in in input_strategy(),
        extra in 1u128..=10_000u128,
    ) {
        let small = quote_out(amount_in, r0, r1, 30);
        let large = quote_out(amount_in + extra, r0, r1, 30);
        prop_assert!(
            large >= small,
            "larger input bought less: in={} out={}, in={} out={}",
            amount_in, small, amount_in + extra, large
        );
    }

    // -- Property 4: liquidity conservation ---------------------------------

    #[test]
    fn prop_mint_then_burn_never_profits(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        deposit0 in 1_000u128..=1_000_000u128,
    ) {
        let (mut state, mut ledger) = seeded(r0, r1);
        // Proportional deposit keeps both ratios close.
        let deposit1 = deposit0 * r1 / r0;
        if deposit1 == 0 {
            return Ok(());
        }
        let Ok(()) = ledger.mint(state.account(), asset0(), Amount::new(deposit0)) else {
            return Ok(());
        };
        let Ok(()) = ledger.mint(state.account(), asset1(), Amount::new(deposit1)) else {
            return Ok(());
        };
        let Ok(shares) =
            ConstantProductPool.mint(&mut state, &mut ledger, trader(), Timestamp::new(110))
        else {
            return Ok(());
        };

        let Ok(()) = ledger.transfer(trader(), state.account(), state.share_asset(), shares)
        else {
            return Ok(());
        };
        let Ok((out0, out1)) =
            ConstantProductPool.burn(&mut state, &mut ledger, trader(), Timestamp::new(120))
        else {
            return Ok(());
        };
        prop_assert!(
            out0.get() <= deposit0 && out1.get() <= deposit1,
            "burn paid more than deposited: in=({}, {}) out=({}, {})",
            deposit0, deposit1, out0, out1
        );
    }

    // -- Property 5: first-deposit geometry ---------------------------------

    #[test]
    fn prop_first_mint_matches_sqrt_geometry(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
    ) {
        let (state, ledger) = seeded(r0, r1);
        let root = floor_sqrt(r0 * r1);
        prop_assert_eq!(
            ledger.balance_of(lp(), state.share_asset()).get(),
            root - MINIMUM_LIQUIDITY
        );
        prop_assert_eq!(ledger.total_supply(state.share_asset()).get(), root);
    }
}
