//! Integer square root.

/// Floor square root via Newton's method.
///
/// Converges for every `u128` input; the loop strictly decreases `x`
/// until it crosses the true root.
///
/// # Examples
///
/// ```
/// use beacon_amm::math::floor_sqrt;
///
/// assert_eq!(floor_sqrt(0), 0);
/// assert_eq!(floor_sqrt(1_000_000), 1_000);
/// assert_eq!(floor_sqrt(999_999), 999);
/// ```
#[must_use]
pub fn floor_sqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
