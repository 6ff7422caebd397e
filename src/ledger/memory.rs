//! In-memory ledger used by tests and demos.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::{AmmError, Result};
use crate::traits::TokenLedger;

/// A [`TokenLedger`] backed by in-process maps.
///
/// Faithful to the trait contract: checked arithmetic everywhere, and a
/// failed operation leaves both maps untouched.  Not intended for
/// production bookkeeping.
///
/// # Examples
///
/// ```
/// use beacon_amm::domain::{AccountId, Amount, AssetId};
/// use beacon_amm::ledger::InMemoryLedger;
/// use beacon_amm::traits::TokenLedger;
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let gold = AssetId::from_bytes([9u8; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(alice, gold, Amount::new(100)).expect("minted");
/// assert_eq!(ledger.balance_of(alice, gold), Amount::new(100));
/// assert_eq!(ledger.total_supply(gold), Amount::new(100));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: BTreeMap<(AccountId, AssetId), u128>,
    supplies: BTreeMap<AssetId, u128>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn balance(&self, account: AccountId, asset: AssetId) -> u128 {
        self.balances.get(&(account, asset)).copied().unwrap_or(0)
    }
}

impl TokenLedger for InMemoryLedger {
    fn balance_of(&self, account: AccountId, asset: AssetId) -> Amount {
        Amount::new(self.balance(account, asset))
    }

    fn total_supply(&self, asset: AssetId) -> Amount {
        Amount::new(self.supplies.get(&asset).copied().unwrap_or(0))
    }

    fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<()> {
        let value = amount.get();
        let source = self.balance(from, asset);
        let debited = source
            .checked_sub(value)
            .ok_or(AmmError::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance(to, asset)
            .checked_add(value)
            .ok_or(AmmError::Overflow("ledger transfer credit"))?;
        self.balances.insert((from, asset), debited);
        self.balances.insert((to, asset), credited);
        Ok(())
    }

    fn mint(&mut self, to: AccountId, asset: AssetId, amount: Amount) -> Result<()> {
        let value = amount.get();
        let supply = self
            .supplies
            .get(&asset)
            .copied()
            .unwrap_or(0)
            .checked_add(value)
            .ok_or(AmmError::Overflow("ledger mint supply"))?;
        let credited = self
            .balance(to, asset)
            .checked_add(value)
            .ok_or(AmmError::Overflow("ledger mint credit"))?;
        self.supplies.insert(asset, supply);
        self.balances.insert((to, asset), credited);
        Ok(())
    }

    fn burn(&mut self, from: AccountId, asset: AssetId, amount: Amount) -> Result<()> {
        let value = amount.get();
        let debited = self
            .balance(from, asset)
            .checked_sub(value)
            .ok_or(AmmError::InsufficientBalance)?;
        // Supply below the account balance means mint/burn were bypassed;
        // treat it the same as an insufficient balance.
        let supply = self
            .supplies
            .get(&asset)
            .copied()
            .unwrap_or(0)
            .checked_sub(value)
            .ok_or(AmmError::InsufficientBalance)?;
        self.balances.insert((from, asset), debited);
        self.supplies.insert(asset, supply);
        Ok(())
    }
}
