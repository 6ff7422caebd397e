//! Basis-point representation for fee rates.

use core::fmt;

/// A fee rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// The type itself accepts any `u32`; policy limits (such as the
/// registry's 1000 bps protocol cap) are enforced where the rate is
/// configured, not here, because swap math also uses the full 10 000
/// denominator.
///
/// # Examples
///
/// ```
/// use beacon_amm::domain::BasisPoints;
///
/// let fee = BasisPoints::new(30); // 0.30%
/// assert_eq!(fee.get(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// The denominator representing 100%.
    pub const DENOMINATOR: u32 = 10_000;

    /// Zero basis points.
    pub const ZERO: Self = Self(0);

    /// Creates a new `BasisPoints` value.
    #[must_use]
    pub const fn new(bps: u32) -> Self {
        Self(bps)
    }

    /// Returns the raw basis-point count.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the rate is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(BasisPoints::new(30).get(), 30);
    }

    #[test]
    fn zero() {
        assert!(BasisPoints::ZERO.is_zero());
        assert!(!BasisPoints::new(1).is_zero());
    }

    #[test]
    fn denominator_is_full_scale() {
        assert_eq!(BasisPoints::DENOMINATOR, 10_000);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", BasisPoints::new(30)), "30 bps");
    }

    #[test]
    fn ordering() {
        assert!(BasisPoints::new(30) < BasisPoints::new(100));
    }
}
