//! Canonically ordered pair of distinct assets.

use sha2::{Digest, Sha256};

use super::{AccountId, AssetId};
use crate::error::AmmError;

/// An unordered pair of distinct assets, stored in canonical order.
///
/// The canonical ordering guarantees `asset0() < asset1()` under the
/// lexicographic order of [`AssetId`], preventing duplicate pairs such
/// as `(A, B)` and `(B, A)`.
///
/// A pair also deterministically derives the identity of the pool that
/// trades it: its ledger account ([`pool_account`](Self::pool_account))
/// and its liquidity-share asset ([`share_asset`](Self::share_asset)).
/// Every pool created for the same unordered pair gets the same identity.
///
/// # Examples
///
/// ```
/// use beacon_amm::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
///
/// // Order is enforced automatically:
/// let pair = AssetPair::new(b, a).expect("distinct assets");
/// assert_eq!(pair.asset0(), a);
/// assert_eq!(pair.asset1(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetPair {
    asset0: AssetId,
    asset1: AssetId,
}

impl AssetPair {
    /// Creates a new canonically-ordered `AssetPair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both identifiers are
    /// equal.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self, AmmError> {
        if asset_a == asset_b {
            return Err(AmmError::IdenticalAssets);
        }

        let (asset0, asset1) = if asset_a < asset_b {
            (asset_a, asset_b)
        } else {
            (asset_b, asset_a)
        };

        Ok(Self { asset0, asset1 })
    }

    /// Returns the first asset (lower identifier).
    #[must_use]
    pub const fn asset0(&self) -> AssetId {
        self.asset0
    }

    /// Returns the second asset (higher identifier).
    #[must_use]
    pub const fn asset1(&self) -> AssetId {
        self.asset1
    }

    /// Returns `true` if the given asset is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset0 == *asset || self.asset1 == *asset
    }

    /// Derives the ledger account owned by the pool trading this pair.
    ///
    /// The derivation is a domain-separated SHA-256 over the canonical
    /// asset identifiers, so equal pairs always map to the same account
    /// and distinct pairs to distinct accounts.
    #[must_use]
    pub fn pool_account(&self) -> AccountId {
        AccountId::from_bytes(self.derive(b"beacon-amm/pool-account/v1"))
    }

    /// Derives the liquidity-share asset issued by the pool trading this
    /// pair.
    #[must_use]
    pub fn share_asset(&self) -> AssetId {
        AssetId::from_bytes(self.derive(b"beacon-amm/share-asset/v1"))
    }

    fn derive(&self, tag: &'static [u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(tag);
        hasher.update(self.asset0.as_bytes());
        hasher.update(self.asset1.as_bytes());
        hasher.finalize().into()
    }
}
