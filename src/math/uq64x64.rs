//! UQ64.64 fixed-point price encoding.
//!
//! Price accumulators store time-weighted sums of reserve ratios.  A
//! ratio is encoded as an unsigned 64.64 fixed-point number
//! ([`fixed::types::U64F64`]): 64 integer bits, 64 fractional bits.
//! Accumulation wraps on overflow; consumers derive average prices from
//! the difference of two observations, which is unaffected by wrapping.

use fixed::types::U64F64;

use crate::domain::Amount;
use crate::error::{AmmError, Result};

/// Unsigned 64.64 fixed-point value used by the price accumulators.
pub type Uq64x64 = U64F64;

/// Encodes `numerator / denominator` as a UQ64.64 fraction.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if `numerator` does not fit in 64 bits; the
///   encoding `(numerator << 64) / denominator` needs the full upper
///   half of the `u128` bit space.
pub fn fraction(numerator: Amount, denominator: Amount) -> Result<Uq64x64> {
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let n = numerator.get();
    if n > u128::from(u64::MAX) {
        return Err(AmmError::Overflow("uq64x64 fraction numerator"));
    }
    Ok(Uq64x64::from_bits((n << 64) / denominator.get()))
}

/// Adds `fraction × elapsed_secs` into `accumulator`, wrapping on
/// overflow.
#[must_use]
pub fn accumulate(accumulator: Uq64x64, fraction: Uq64x64, elapsed_secs: u64) -> Uq64x64 {
    accumulator.wrapping_add(fraction.wrapping_mul(Uq64x64::from_num(elapsed_secs)))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn whole_ratio() {
        let Ok(ratio) = fraction(Amount::new(2), Amount::new(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(ratio, Uq64x64::from_num(2));
    }

    #[test]
    fn fractional_ratio() {
        let Ok(ratio) = fraction(Amount::new(1), Amount::new(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(ratio, Uq64x64::from_num(0.5));
    }

    #[test]
    fn zero_denominator_rejected() {
        assert_eq!(
            fraction(Amount::new(1), Amount::ZERO),
            Err(AmmError::DivisionByZero)
        );
    }

    #[test]
    fn oversized_numerator_rejected() {
        let big = Amount::new(u128::from(u64::MAX) + 1);
        assert!(matches!(
            fraction(big, Amount::new(1)),
            Err(AmmError::Overflow(_))
        ));
    }

    #[test]
    fn accumulate_weights_by_time() {
        let Ok(ratio) = fraction(Amount::new(3), Amount::new(1)) else {
            panic!("expected Ok");
        };
        let acc = accumulate(Uq64x64::ZERO, ratio, 10);
        assert_eq!(acc, Uq64x64::from_num(30));
    }

    #[test]
    fn accumulate_wraps_instead_of_panicking() {
        let acc = accumulate(Uq64x64::MAX, Uq64x64::from_num(1), 1);
        // MAX + 1 wraps past zero; the delta is still exactly one second
        // of unit price.
        assert!(acc < Uq64x64::from_num(1));
    }
}
