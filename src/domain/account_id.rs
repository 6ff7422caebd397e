//! Opaque account identifier.

/// An opaque identifier for an account on the token ledger.
///
/// Wraps a fixed-size `[u8; 32]` byte array.  The all-zero identifier is
/// the designated [`NULL`](Self::NULL) account: minting liquidity shares
/// to it locks them forever, and configuring it as the protocol fee
/// recipient disables protocol fee collection.
///
/// # Examples
///
/// ```
/// use beacon_amm::domain::AccountId;
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// assert!(!alice.is_null());
/// assert!(AccountId::NULL.is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// The all-zero account.
    ///
    /// By convention shares minted here are unrecoverable and a fee
    /// recipient of `NULL` means "protocol fee disabled".
    pub const NULL: Self = Self([0u8; 32]);

    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` if this is the designated null account.
    #[must_use]
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_all_zeros() {
        assert_eq!(AccountId::NULL.as_bytes(), [0u8; 32]);
        assert!(AccountId::NULL.is_null());
    }

    #[test]
    fn non_null() {
        assert!(!AccountId::from_bytes([1u8; 32]).is_null());
    }

    #[test]
    fn from_bytes_round_trip() {
        let bytes = [9u8; 32];
        assert_eq!(AccountId::from_bytes(bytes).as_bytes(), bytes);
    }

    #[test]
    fn copy_semantics() {
        let a = AccountId::from_bytes([5u8; 32]);
        let b = a;
        assert_eq!(a, b);
    }
}
