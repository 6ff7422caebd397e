//! Seconds-resolution timestamp supplied by the caller.

use core::fmt;

/// A point in time, in whole seconds from an arbitrary epoch.
///
/// The crate has no ambient clock: every state-changing pool operation
/// takes the current `Timestamp` as an argument, which keeps price
/// accumulator behavior deterministic and directly testable.
///
/// # Examples
///
/// ```
/// use beacon_amm::domain::Timestamp;
///
/// let t0 = Timestamp::new(100);
/// let t1 = Timestamp::new(130);
/// assert_eq!(t1.elapsed_since(&t0), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch.
    pub const ZERO: Self = Self(0);

    /// Creates a timestamp from whole seconds.
    #[must_use]
    pub const fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the raw seconds value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns the seconds elapsed since `earlier`, saturating at zero
    /// if `earlier` is in the future.
    #[must_use]
    pub const fn elapsed_since(&self, earlier: &Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
