//! # Share Ledger Entities
//!
//! - [`TotalSupply`]: per-node supply with a one-way lock flag
//! - [`RoyaltyRate`]: what children of a node owe to it
//! - [`ShareBook`]: per-node balances, supply and royalty rate

use super::errors::LedgerError;
use primitive_types::U512;
use royalty_types::{Address, BPS_DENOMINATOR, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Total units minted for a node.
///
/// Created implicitly at first mint. Locked exactly once, never unlocked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalSupply {
    /// Units minted so far.
    pub amount: U256,
    /// Set by `lock_supply`; further mints are rejected.
    pub locked: bool,
}

/// Royalty owed to a node by each of its children, in basis points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoyaltyRate {
    /// Rate in bps, `0..=10_000`.
    pub rate: u16,
    /// Where the parent's cut is credited. `None` disables the cascade.
    pub recipient: Option<Address>,
}

impl RoyaltyRate {
    /// True if children should forward part of their deposits.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.rate > 0 && self.recipient.is_some()
    }
}

/// Share accounting for a single node.
///
/// Invariant: the sum of all balances equals `supply.amount`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareBook {
    balances: BTreeMap<Address, U256>,
    supply: TotalSupply,
    royalty: Option<RoyaltyRate>,
    has_minted: bool,
}

impl ShareBook {
    /// Creates an empty book (no supply entry yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` units to `holder`. Returns the new total supply.
    ///
    /// Zero-amount mints are accepted and create the supply entry.
    pub fn mint(&mut self, holder: Address, amount: U256) -> Result<U256, LedgerError> {
        if self.supply.locked {
            return Err(LedgerError::CannotMintLockedSupply);
        }
        let new_total = self
            .supply
            .amount
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        // Balance <= total, so this cannot overflow once the total fits.
        let balance = self.balances.entry(holder).or_default();
        *balance += amount;
        self.supply.amount = new_total;
        self.has_minted = true;
        Ok(new_total)
    }

    /// Locks the supply. Returns the final total.
    pub fn lock_supply(&mut self) -> Result<U256, LedgerError> {
        if self.supply.locked {
            return Err(LedgerError::SupplyAlreadyLocked);
        }
        self.supply.locked = true;
        Ok(self.supply.amount)
    }

    /// Sets the royalty rate charged to children.
    pub fn set_royalty_rate(
        &mut self,
        rate: u16,
        recipient: Option<Address>,
    ) -> Result<(), LedgerError> {
        if rate > BPS_DENOMINATOR {
            return Err(LedgerError::InvalidRoyaltyRate(rate));
        }
        if self.supply.locked {
            return Err(LedgerError::RoyaltyRateFrozen);
        }
        self.royalty = Some(RoyaltyRate { rate, recipient });
        Ok(())
    }

    /// `balance * 10_000 / total_supply`, floored. 0 when supply is 0.
    #[must_use]
    pub fn share_of(&self, holder: &Address) -> u16 {
        let total = self.supply.amount;
        if total.is_zero() {
            return 0;
        }
        let balance = self.balance_of(holder);
        let scaled = balance.full_mul(U256::from(BPS_DENOMINATOR)) / U512::from(total);
        // balance <= total, so scaled <= 10_000
        scaled.low_u64() as u16
    }

    /// Units held by `holder`.
    #[must_use]
    pub fn balance_of(&self, holder: &Address) -> U256 {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    /// Current supply record.
    #[must_use]
    pub fn supply(&self) -> TotalSupply {
        self.supply
    }

    /// Total units minted.
    #[must_use]
    pub fn total_supply(&self) -> U256 {
        self.supply.amount
    }

    /// True once `lock_supply` has succeeded.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.supply.locked
    }

    /// True once any mint (including zero) has happened.
    #[must_use]
    pub fn has_supply(&self) -> bool {
        self.has_minted
    }

    /// Royalty rate, if one was ever set.
    #[must_use]
    pub fn royalty(&self) -> Option<RoyaltyRate> {
        self.royalty
    }

    /// Iterates holders and balances in address order.
    pub fn holders(&self) -> impl Iterator<Item = (&Address, &U256)> {
        self.balances.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
