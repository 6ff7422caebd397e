//! Opaque fungible-asset identifier.

/// An opaque identifier for a fungible asset tracked by the token ledger.
///
/// Wraps a fixed-size `[u8; 32]` byte array.  All 32-byte sequences are
/// valid identifiers, so construction is infallible.  The derived
/// lexicographic [`Ord`] is the total order used for canonical pair
/// ordering.
///
/// # Examples
///
/// ```
/// use beacon_amm::domain::AssetId;
///
/// let id = AssetId::from_bytes([1u8; 32]);
/// assert_eq!(id.as_bytes(), [1u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}
