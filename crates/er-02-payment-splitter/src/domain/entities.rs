//! # Payment Splitter Entities
//!
//! - [`SplitConfig`]: validated beneficiary list with parallel bps shares
//! - [`ParentRoyalty`]: one-time association with the parent node
//! - [`SplitAccount`]: per-node pending balances and running totals
//! - [`Distribution`]: the credits produced by one deposit

use super::errors::SplitterError;
use crate::algorithms::compute_distribution;
use royalty_types::{Address, Node, BPS_DENOMINATOR, U256};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

// =============================================================================
// SPLIT CONFIG
// =============================================================================

/// Beneficiaries and their shares. Only constructible through
/// [`SplitConfig::new`], so every instance satisfies:
///
/// - equal lengths, at least one entry, at most `max_beneficiaries`
/// - distinct, non-zero addresses
/// - shares sum to exactly 10,000 bps
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    beneficiaries: Vec<Address>,
    shares: Vec<u16>,
}

impl SplitConfig {
    /// Validates and builds a split.
    pub fn new(
        beneficiaries: Vec<Address>,
        shares: Vec<u16>,
        max_beneficiaries: usize,
    ) -> Result<Self, SplitterError> {
        if beneficiaries.len() != shares.len() {
            return Err(SplitterError::LengthMismatch {
                beneficiaries: beneficiaries.len(),
                shares: shares.len(),
            });
        }
        if beneficiaries.len() > max_beneficiaries {
            return Err(SplitterError::TooManyBeneficiaries {
                count: beneficiaries.len(),
                max: max_beneficiaries,
            });
        }

        let mut seen = HashSet::with_capacity(beneficiaries.len());
        for addr in &beneficiaries {
            if addr.is_zero() {
                return Err(SplitterError::ZeroAddress);
            }
            if !seen.insert(*addr) {
                return Err(SplitterError::DuplicateBeneficiary(*addr));
            }
        }

        // u32 so that an oversized list cannot wrap
        let sum: u32 = shares.iter().map(|s| u32::from(*s)).sum();
        if sum != u32::from(BPS_DENOMINATOR) {
            return Err(SplitterError::InvalidShareSum(sum));
        }

        Ok(Self {
            beneficiaries,
            shares,
        })
    }

    /// Beneficiaries in configured order.
    #[must_use]
    pub fn beneficiaries(&self) -> &[Address] {
        &self.beneficiaries
    }

    /// Shares in bps, parallel to [`Self::beneficiaries`].
    #[must_use]
    pub fn shares(&self) -> &[u16] {
        &self.shares
    }

    /// Iterates `(beneficiary, share)` pairs in order.
    pub fn entries(&self) -> impl Iterator<Item = (Address, u16)> + '_ {
        self.beneficiaries
            .iter()
            .copied()
            .zip(self.shares.iter().copied())
    }

    /// Number of beneficiaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.beneficiaries.len()
    }

    /// Always false for a validated split.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beneficiaries.is_empty()
    }
}

// =============================================================================
// PARENT ROYALTY
// =============================================================================

/// Cut of every deposit forwarded to the parent node's recipient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRoyalty {
    /// Parent node.
    pub parent: Node,
    /// Address credited with the parent's cut.
    pub recipient: Address,
    /// Rate in bps, snapshotted when the association was made.
    pub rate: u16,
}

// =============================================================================
// DISTRIBUTION
// =============================================================================

/// Credits produced by a single deposit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Amount deposited.
    pub amount: U256,
    /// Parent cut, if a parent royalty is linked.
    pub parent_credit: Option<(Address, U256)>,
    /// Per-beneficiary credits in configured order.
    pub credits: Vec<(Address, U256)>,
}

impl Distribution {
    /// All credits, parent first.
    pub fn all_credits(&self) -> impl Iterator<Item = (Address, U256)> + '_ {
        self.parent_credit
            .into_iter()
            .chain(self.credits.iter().copied())
    }

    /// Sum of every credit. Equals `amount` for any computed distribution.
    #[must_use]
    pub fn total_credited(&self) -> U256 {
        self.all_credits()
            .fold(U256::zero(), |acc, (_, v)| acc.saturating_add(v))
    }
}

// =============================================================================
// SPLIT ACCOUNT
// =============================================================================

/// Per-node splitter state.
///
/// Conservation: `sum(pending) == total_deposited - total_released`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitAccount {
    config: Option<SplitConfig>,
    parent_royalty: Option<ParentRoyalty>,
    pending: BTreeMap<Address, U256>,
    total_deposited: U256,
    total_released: U256,
}

impl SplitAccount {
    /// Creates an account with no split.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs or replaces the split. Rejected once money has arrived.
    pub fn setup_split(&mut self, config: SplitConfig) -> Result<(), SplitterError> {
        if !self.total_deposited.is_zero() {
            return Err(SplitterError::SplitAlreadyActive);
        }
        self.config = Some(config);
        Ok(())
    }

    /// Records the parent association.
    pub fn setup_parent_royalty(
        &mut self,
        parent: Node,
        recipient: Address,
        rate: u16,
    ) -> Result<(), SplitterError> {
        if self.parent_royalty.is_some() {
            return Err(SplitterError::ParentRoyaltyAlreadySet);
        }
        if rate > BPS_DENOMINATOR {
            return Err(SplitterError::InvalidRoyaltyRate(rate));
        }
        if recipient.is_zero() {
            return Err(SplitterError::ZeroAddress);
        }
        self.parent_royalty = Some(ParentRoyalty {
            parent,
            recipient,
            rate,
        });
        Ok(())
    }

    /// Distributes `amount` into pending balances.
    pub fn deposit(&mut self, amount: U256) -> Result<Distribution, SplitterError> {
        let config = self
            .config
            .as_ref()
            .ok_or(SplitterError::NoSplitConfigured)?;
        let distribution = compute_distribution(amount, config, self.parent_royalty.as_ref())?;

        let total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(SplitterError::Overflow)?;

        // Every pending balance is bounded by total_deposited, so crediting
        // cannot overflow once the new total fits.
        for (addr, value) in distribution.all_credits() {
            *self.pending.entry(addr).or_default() += value;
        }
        self.total_deposited = total_deposited;
        Ok(distribution)
    }

    /// Zeroes the pending balance of `beneficiary` and returns what it was.
    pub fn take_pending(&mut self, beneficiary: Address) -> Result<U256, SplitterError> {
        let amount = self.pending(&beneficiary);
        if amount.is_zero() {
            return Err(SplitterError::NothingToClaim(beneficiary));
        }
        self.pending.remove(&beneficiary);
        self.total_released += amount;
        Ok(amount)
    }

    /// Reverses a [`Self::take_pending`] whose payout failed.
    pub fn restore_pending(&mut self, beneficiary: Address, amount: U256) {
        *self.pending.entry(beneficiary).or_default() += amount;
        self.total_released -= amount;
    }

    /// Accrued, unclaimed amount for `beneficiary`.
    #[must_use]
    pub fn pending(&self, beneficiary: &Address) -> U256 {
        self.pending.get(beneficiary).copied().unwrap_or_default()
    }

    /// Iterates non-zero pending balances.
    pub fn pending_balances(&self) -> impl Iterator<Item = (&Address, &U256)> {
        self.pending.iter().filter(|(_, v)| !v.is_zero())
    }

    /// Installed split, if any.
    #[must_use]
    pub fn config(&self) -> Option<&SplitConfig> {
        self.config.as_ref()
    }

    /// Parent association, if any.
    #[must_use]
    pub fn parent_royalty(&self) -> Option<&ParentRoyalty> {
        self.parent_royalty.as_ref()
    }

    /// Lifetime deposits.
    #[must_use]
    pub fn total_deposited(&self) -> U256 {
        self.total_deposited
    }

    /// Lifetime successful claims.
    #[must_use]
    pub fn total_released(&self) -> U256 {
        self.total_released
    }
}

// =============================================================================
// TESTS
// =============================================================================
