//! Explicit rounding direction for arithmetic operations.

/// Specifies the rounding direction for division operations on domain
/// types.
///
/// All division in the library requires an explicit `Rounding` parameter
/// to prevent silent precision loss.  The convention is to always round
/// in the pool's favour: share issuance rounds down, dues round up.
///
/// # Examples
///
/// ```
/// use beacon_amm::domain::Rounding;
///
/// let r = Rounding::Up;
/// assert!(r.is_up());
/// assert!(!r.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
