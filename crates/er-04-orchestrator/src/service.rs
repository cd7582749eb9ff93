//! # Royalty Service
//!
//! Single entry point for every royalty operation. Implements the inbound
//! ports of all four subsystems over one per-node lock table.
//!
//! ## Transactions
//!
//! Every mutation locks its node, runs on a clone of the node state and
//! writes the clone back only if every step succeeded. Events collected
//! during the transaction are published after the write-back, before the
//! lock is released. A rejected mutation on a node with no state retires
//! the node's slot, so rejected calls never grow the lock table.
//!
//! ## Lock Order
//!
//! `create_config` holds the parent's read lock while it takes the child's
//! write lock. No operation holds a child's lock while acquiring its
//! parent's, so the order is acyclic. `setup_parent_royalty` reads the
//! parent's rate and releases that lock before locking the child.
//!
//! ## Claims
//!
//! The pending balance is zeroed and committed under the lock, the payout
//! runs with no lock held, and a failed payout re-credits the balance.
//! `PaymentReleased` is published under the node lock once the payout
//! succeeds, so it is sequenced among that node's commits at the moment the
//! transfer was confirmed.

use crate::adapters::{InMemoryEventLog, NodeSlot, NodeTable};
use crate::config::{ConfigError, EngineConfig};
use crate::domain::{
    CreateConfigRequest, NodeOrigin, NodeState, RoyaltyConfigView, RoyaltyError,
};
use crate::events::{EventRecord, RoyaltyEvent};
use crate::ports::{EventSink, RoyaltyApi};
use er_01_share_ledger::{
    invariant_locked_is_frozen, invariant_supply_conservation, LedgerError, RoyaltyRate,
    ShareLedgerApi,
};
use er_02_payment_splitter::{
    invariant_pending_conservation, Distribution, InMemoryPayouts, ParentRoyalty,
    PaymentSplitterApi, PayoutSink, SplitConfig, SplitterError,
};
use er_03_fuse_registry::{
    FuseError, FuseRegistryApi, FuseState, ALL_NAMED_FUSES, CANNOT_CHANGE_ROYALTY,
    PARENT_CANNOT_CONTROL,
};
use parking_lot::RwLock;
use royalty_types::{Address, AdminCapability, Caller, Node, BPS_DENOMINATOR, U256};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Statistics for the Royalty Service.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStats {
    /// Nodes created (locked or not).
    pub configs_created: u64,
    /// Deposits distributed.
    pub deposits: u64,
    /// Successful claims.
    pub claims: u64,
    /// Successful fuse burns.
    pub fuse_burns: u64,
    /// Committed node transactions.
    pub operations_committed: u64,
    /// Rejected operations.
    pub operations_rejected: u64,
    /// Payouts that failed and were restored.
    pub transfer_failures: u64,
    /// Events handed to the sink.
    pub events_published: u64,
}

/// The main Royalty Service.
pub struct RoyaltyService<P: PayoutSink, E: EventSink> {
    /// Engine limits.
    config: EngineConfig,
    /// Id of the capability issued at construction.
    admin_id: u64,
    /// Per-node state.
    nodes: NodeTable<NodeState>,
    /// Value transfer adapter.
    payouts: Arc<P>,
    /// Event publication adapter.
    events: Arc<E>,
    /// Next event sequence number.
    next_sequence: AtomicU64,
    /// Service statistics.
    stats: RwLock<ServiceStats>,
}

fn ledger_err(node: Node) -> impl Fn(LedgerError) -> RoyaltyError {
    move |source| RoyaltyError::Ledger { node, source }
}

fn splitter_err(node: Node) -> impl Fn(SplitterError) -> RoyaltyError {
    move |source| RoyaltyError::Splitter { node, source }
}

fn fuse_err(node: Node) -> impl Fn(FuseError) -> RoyaltyError {
    move |source| RoyaltyError::Fuse { node, source }
}

impl<P: PayoutSink, E: EventSink> RoyaltyService<P, E> {
    /// Create a service. Returns it with its admin capability.
    pub fn new(
        config: EngineConfig,
        payouts: Arc<P>,
        events: Arc<E>,
    ) -> Result<(Self, AdminCapability), ConfigError> {
        config.validate()?;
        Ok(Self::assemble(config, payouts, events))
    }

    fn assemble(config: EngineConfig, payouts: Arc<P>, events: Arc<E>) -> (Self, AdminCapability) {
        let admin = AdminCapability::issue();
        info!(
            "[er-04] Royalty service ready (max_beneficiaries={}, allow_zero_owner={})",
            config.max_beneficiaries, config.allow_zero_address_owner
        );
        let service = Self {
            config,
            admin_id: admin.id(),
            nodes: NodeTable::new(),
            payouts,
            events,
            next_sequence: AtomicU64::new(0),
            stats: RwLock::new(ServiceStats::default()),
        };
        (service, admin)
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Payout adapter.
    #[must_use]
    pub fn payouts(&self) -> &Arc<P> {
        &self.payouts
    }

    /// Event adapter.
    #[must_use]
    pub fn event_sink(&self) -> &Arc<E> {
        &self.events
    }

    /// Get current service statistics.
    pub fn stats(&self) -> ServiceStats {
        self.stats.read().clone()
    }

    /// Number of nodes holding a lock slot.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // =========================================================================
    // TRANSACTION MACHINERY
    // =========================================================================

    /// Runs `op` on a staged copy of `node`'s state; commits on success.
    fn commit<T>(
        &self,
        node: Node,
        op: impl FnOnce(&mut NodeState, &mut Vec<RoyaltyEvent>) -> Result<T, RoyaltyError>,
    ) -> Result<T, RoyaltyError> {
        self.commit_in(node, op).map(|(value, _)| value)
    }

    /// Like [`Self::commit`], also returning the slot that was written.
    ///
    /// A rejected operation on a vacant node retires the slot, so failed
    /// calls leave the table as they found it.
    fn commit_in<T>(
        &self,
        node: Node,
        op: impl FnOnce(&mut NodeState, &mut Vec<RoyaltyEvent>) -> Result<T, RoyaltyError>,
    ) -> Result<(T, NodeSlot<NodeState>), RoyaltyError> {
        loop {
            let slot = self.nodes.slot_or_insert(node);
            let mut guard = slot.write();
            if !self.nodes.is_current(&node, &slot) {
                // Retired while we waited for the lock
                continue;
            }
            let mut staged = guard.clone();
            let mut events = Vec::new();

            let value = match op(&mut staged, &mut events) {
                Ok(value) => value,
                Err(err) => {
                    if guard.is_vacant() {
                        self.nodes.retire(&node, &slot);
                    }
                    return Err(err);
                }
            };

            debug_assert!(invariant_supply_conservation(&staged.shares));
            debug_assert!(invariant_locked_is_frozen(&guard.shares, &staged.shares));
            debug_assert!(invariant_pending_conservation(&staged.splits));

            *guard = staged;
            self.publish(events);
            self.stats.write().operations_committed += 1;
            drop(guard);
            return Ok((value, slot));
        }
    }

    fn publish(&self, events: Vec<RoyaltyEvent>) {
        if events.is_empty() {
            return;
        }
        let op_id = Uuid::new_v4();
        let count = events.len() as u64;
        for event in events {
            let sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst);
            self.events.publish(EventRecord {
                sequence,
                op_id,
                event,
            });
        }
        self.stats.write().events_published += count;
    }

    fn reject(&self, err: &RoyaltyError) {
        warn!("[er-04] Rejected ({:?}): {}", err.kind(), err);
        self.stats.write().operations_rejected += 1;
    }

    fn read<T>(&self, node: Node, f: impl FnOnce(&NodeState) -> T) -> Option<T> {
        self.nodes.slot(&node).map(|slot| f(&slot.read()))
    }

    fn authorize(
        &self,
        caller: Caller<'_>,
        node: Node,
        state: &NodeState,
        action: &'static str,
        owner_allowed: bool,
    ) -> Result<(), RoyaltyError> {
        if caller.is_admin_of(self.admin_id) {
            return Ok(());
        }
        if owner_allowed && state.owner().is_some_and(|owner| caller.is_account(owner)) {
            return Ok(());
        }
        Err(RoyaltyError::Unauthorized { node, action })
    }

    fn ensure_mutable(node: Node, state: &NodeState) -> Result<(), RoyaltyError> {
        if state.fuses.is_burned(CANNOT_CHANGE_ROYALTY) {
            return Err(RoyaltyError::ConfigFrozen { node });
        }
        Ok(())
    }

    /// Burns `bits` on the staged state. Burning `CANNOT_CHANGE_ROYALTY`
    /// also locks the supply.
    fn burn_staged(
        node: Node,
        state: &mut NodeState,
        events: &mut Vec<RoyaltyEvent>,
        bits: u32,
    ) -> Result<u32, RoyaltyError> {
        let newly = state.fuses.burn(bits).map_err(fuse_err(node))?;
        events.push(RoyaltyEvent::FusesBurned { node, fuses: bits });

        if newly & CANNOT_CHANGE_ROYALTY != 0 {
            if !state.shares.is_locked() {
                let total_supply = state.shares.lock_supply().map_err(ledger_err(node))?;
                events.push(RoyaltyEvent::SupplyLocked { node, total_supply });
            }
            events.push(RoyaltyEvent::RoyaltyLocked {
                node,
                locked_amount: state.shares.total_supply(),
            });
        }
        Ok(newly)
    }

    // =========================================================================
    // CREATION
    // =========================================================================

    fn create(&self, request: &CreateConfigRequest, locked: bool) -> Result<Node, RoyaltyError> {
        if request.label.is_empty() {
            return Err(RoyaltyError::EmptyLabel);
        }
        let node = request.node();
        if request.royalty_bps > BPS_DENOMINATOR {
            return Err(RoyaltyError::Ledger {
                node,
                source: LedgerError::InvalidRoyaltyRate(request.royalty_bps),
            });
        }
        if request.owner.is_zero() && !self.config.allow_zero_address_owner {
            return Err(RoyaltyError::ZeroOwner);
        }
        if node == request.parent {
            return Err(RoyaltyError::InvalidParent { node });
        }

        let parent = request.parent;
        let parent_slot = self.nodes.slot(&parent);
        let parent_guard = parent_slot.as_ref().map(|slot| slot.read());
        let parent_state = parent_guard.as_deref();

        if parent_state.is_some_and(|p| p.fuses.is_burned(PARENT_CANNOT_CONTROL)) {
            return Err(RoyaltyError::AlreadyLocked { parent });
        }
        let parent_royalty = parent_state
            .and_then(|p| p.shares.royalty())
            .filter(RoyaltyRate::is_active);

        let max_beneficiaries = self.config.max_beneficiaries;

        self.commit(node, |state, events| {
            if !state.is_vacant() {
                return Err(RoyaltyError::NodeAlreadyExists { node });
            }
            events.push(RoyaltyEvent::ConfigCreated {
                node,
                parent,
                label: request.label.clone(),
                owner: request.owner,
                royalty_bps: request.royalty_bps,
                locked,
            });

            let units = request
                .share_units
                .unwrap_or_else(|| U256::from(request.royalty_bps));
            state
                .shares
                .mint(request.owner, units)
                .map_err(ledger_err(node))?;
            events.push(RoyaltyEvent::RoyaltyMinted {
                node,
                holder: request.owner,
                amount: units,
            });

            state
                .shares
                .set_royalty_rate(request.royalty_bps, Some(request.owner))
                .map_err(ledger_err(node))?;
            events.push(RoyaltyEvent::RoyaltyRateSet {
                node,
                rate: request.royalty_bps,
                recipient: Some(request.owner),
            });

            if !request.beneficiaries.is_empty() || !request.shares.is_empty() {
                let split = SplitConfig::new(
                    request.beneficiaries.clone(),
                    request.shares.clone(),
                    max_beneficiaries,
                )
                .map_err(splitter_err(node))?;
                state
                    .splits
                    .setup_split(split)
                    .map_err(splitter_err(node))?;
                events.push(RoyaltyEvent::SplitConfigured {
                    node,
                    beneficiaries: request.beneficiaries.clone(),
                    shares: request.shares.clone(),
                });
            }

            if let Some(RoyaltyRate {
                rate,
                recipient: Some(recipient),
            }) = parent_royalty
            {
                state
                    .splits
                    .setup_parent_royalty(parent, recipient, rate)
                    .map_err(splitter_err(node))?;
                events.push(RoyaltyEvent::ParentRoyaltyLinked {
                    node,
                    parent,
                    recipient,
                    rate,
                });
            }

            state.origin = Some(NodeOrigin {
                parent,
                label: request.label.clone(),
                owner: request.owner,
                created_locked: locked,
            });

            if locked {
                Self::burn_staged(node, state, events, ALL_NAMED_FUSES)?;
            }
            Ok(node)
        })?;

        self.stats.write().configs_created += 1;
        info!(
            "[er-04] Created {} under {} (royalty {} bps, locked={})",
            node, parent, request.royalty_bps, locked
        );
        Ok(node)
    }
}

// =============================================================================
// ORCHESTRATION API
// =============================================================================

impl<P: PayoutSink, E: EventSink> RoyaltyApi for RoyaltyService<P, E> {
    type Error = RoyaltyError;

    #[instrument(skip_all, fields(parent = %request.parent, label = %request.label))]
    fn create_config(&self, request: CreateConfigRequest) -> Result<Node, RoyaltyError> {
        self.create(&request, false)
            .inspect_err(|e| self.reject(e))
    }

    #[instrument(skip_all, fields(parent = %request.parent, label = %request.label))]
    fn create_locked_config(&self, request: CreateConfigRequest) -> Result<Node, RoyaltyError> {
        self.create(&request, true)
            .inspect_err(|e| self.reject(e))
    }

    fn get_config(&self, node: Node) -> Option<RoyaltyConfigView> {
        let view = self
            .read(node, |state| {
                (!state.is_vacant()).then(|| RoyaltyConfigView::from_state(node, state))
            })
            .flatten();
        debug!("[er-04] get_config {} -> found={}", node, view.is_some());
        view
    }
}

// =============================================================================
// SHARE LEDGER API
// =============================================================================

impl<P: PayoutSink, E: EventSink> ShareLedgerApi for RoyaltyService<P, E> {
    type Error = RoyaltyError;

    #[instrument(skip_all, fields(node = %node, holder = %holder))]
    fn mint(
        &self,
        caller: Caller<'_>,
        node: Node,
        holder: Address,
        amount: U256,
    ) -> Result<U256, RoyaltyError> {
        let total = self
            .commit(node, |state, events| {
                self.authorize(caller, node, state, "mint", false)?;
                let total = state.shares.mint(holder, amount).map_err(ledger_err(node))?;
                events.push(RoyaltyEvent::RoyaltyMinted {
                    node,
                    holder,
                    amount,
                });
                Ok(total)
            })
            .inspect_err(|e| self.reject(e))?;

        info!("[er-04] Minted {} units on {} (supply {})", amount, node, total);
        Ok(total)
    }

    #[instrument(skip_all, fields(node = %node))]
    fn lock_supply(&self, caller: Caller<'_>, node: Node) -> Result<U256, RoyaltyError> {
        let total_supply = self
            .commit(node, |state, events| {
                self.authorize(caller, node, state, "lock_supply", false)?;
                let total_supply = state.shares.lock_supply().map_err(ledger_err(node))?;
                events.push(RoyaltyEvent::SupplyLocked { node, total_supply });
                Ok(total_supply)
            })
            .inspect_err(|e| self.reject(e))?;

        info!("[er-04] Supply of {} locked at {}", node, total_supply);
        Ok(total_supply)
    }

    #[instrument(skip_all, fields(node = %node, rate = rate))]
    fn set_royalty_rate(
        &self,
        caller: Caller<'_>,
        node: Node,
        rate: u16,
        recipient: Option<Address>,
    ) -> Result<(), RoyaltyError> {
        self.commit(node, |state, events| {
            self.authorize(caller, node, state, "set_royalty_rate", true)?;
            Self::ensure_mutable(node, state)?;
            state
                .shares
                .set_royalty_rate(rate, recipient)
                .map_err(ledger_err(node))?;
            events.push(RoyaltyEvent::RoyaltyRateSet {
                node,
                rate,
                recipient,
            });
            Ok(())
        })
        .inspect_err(|e| self.reject(e))?;

        info!("[er-04] Royalty rate of {} set to {} bps", node, rate);
        Ok(())
    }

    fn share_of(&self, node: Node, holder: Address) -> u16 {
        self.read(node, |s| s.shares.share_of(&holder))
            .unwrap_or_default()
    }

    fn is_supply_locked(&self, node: Node) -> bool {
        self.read(node, |s| s.shares.is_locked()).unwrap_or_default()
    }

    fn balance_of(&self, node: Node, holder: Address) -> U256 {
        self.read(node, |s| s.shares.balance_of(&holder))
            .unwrap_or_default()
    }

    fn total_supply(&self, node: Node) -> U256 {
        self.read(node, |s| s.shares.total_supply())
            .unwrap_or_default()
    }

    fn royalty_rate(&self, node: Node) -> Option<RoyaltyRate> {
        self.read(node, |s| s.shares.royalty()).flatten()
    }
}

// =============================================================================
// PAYMENT SPLITTER API
// =============================================================================

impl<P: PayoutSink, E: EventSink> PaymentSplitterApi for RoyaltyService<P, E> {
    type Error = RoyaltyError;

    #[instrument(skip_all, fields(node = %node, beneficiaries = beneficiaries.len()))]
    fn setup_split(
        &self,
        caller: Caller<'_>,
        node: Node,
        beneficiaries: Vec<Address>,
        shares: Vec<u16>,
    ) -> Result<(), RoyaltyError> {
        let max_beneficiaries = self.config.max_beneficiaries;
        self.commit(node, |state, events| {
            self.authorize(caller, node, state, "setup_split", true)?;
            Self::ensure_mutable(node, state)?;
            let split = SplitConfig::new(beneficiaries.clone(), shares.clone(), max_beneficiaries)
                .map_err(splitter_err(node))?;
            state
                .splits
                .setup_split(split)
                .map_err(splitter_err(node))?;
            events.push(RoyaltyEvent::SplitConfigured {
                node,
                beneficiaries,
                shares,
            });
            Ok(())
        })
        .inspect_err(|e| self.reject(e))?;

        info!("[er-04] Split configured on {}", node);
        Ok(())
    }

    #[instrument(skip_all, fields(node = %node, parent = %parent))]
    fn setup_parent_royalty(
        &self,
        caller: Caller<'_>,
        node: Node,
        parent: Node,
        recipient: Address,
    ) -> Result<(), RoyaltyError> {
        if parent == node {
            let err = RoyaltyError::InvalidParent { node };
            self.reject(&err);
            return Err(err);
        }

        // Snapshot, released before the child is locked
        let rate = self
            .read(parent, |p| p.shares.royalty())
            .flatten()
            .map(|r| r.rate)
            .unwrap_or_default();

        self.commit(node, |state, events| {
            self.authorize(caller, node, state, "setup_parent_royalty", true)?;
            Self::ensure_mutable(node, state)?;
            state
                .splits
                .setup_parent_royalty(parent, recipient, rate)
                .map_err(splitter_err(node))?;
            events.push(RoyaltyEvent::ParentRoyaltyLinked {
                node,
                parent,
                recipient,
                rate,
            });
            Ok(())
        })
        .inspect_err(|e| self.reject(e))?;

        info!("[er-04] {} linked to parent {} at {} bps", node, parent, rate);
        Ok(())
    }

    #[instrument(skip_all, fields(node = %node, amount = %amount))]
    fn deposit(&self, node: Node, amount: U256) -> Result<Distribution, RoyaltyError> {
        let result = if self.nodes.slot(&node).is_some() {
            self.commit(node, |state, events| {
                let distribution = state.splits.deposit(amount).map_err(splitter_err(node))?;
                events.push(RoyaltyEvent::PaymentReceived {
                    node,
                    amount,
                    parent_amount: distribution
                        .parent_credit
                        .map(|(_, v)| v)
                        .unwrap_or_default(),
                });
                Ok(distribution)
            })
        } else {
            Err(RoyaltyError::Splitter {
                node,
                source: SplitterError::NoSplitConfigured,
            })
        };
        let distribution = result.inspect_err(|e| self.reject(e))?;

        self.stats.write().deposits += 1;
        for (addr, value) in distribution.all_credits() {
            debug!("[er-04] {} credited {} on {}", addr, value, node);
        }
        info!("[er-04] Deposit of {} distributed on {}", amount, node);
        Ok(distribution)
    }

    #[instrument(skip_all, fields(node = %node, beneficiary = %beneficiary))]
    fn claim(&self, node: Node, beneficiary: Address) -> Result<U256, RoyaltyError> {
        let nothing = || RoyaltyError::Splitter {
            node,
            source: SplitterError::NothingToClaim(beneficiary),
        };
        if self.nodes.slot(&node).is_none() {
            let err = nothing();
            self.reject(&err);
            return Err(err);
        }

        let (amount, slot) = self
            .commit_in(node, |state, _| {
                state
                    .splits
                    .take_pending(beneficiary)
                    .map_err(splitter_err(node))
            })
            .inspect_err(|e| self.reject(e))?;

        // No lock held across the transfer
        if let Err(source) = self.payouts.transfer(beneficiary, amount) {
            slot.write().splits.restore_pending(beneficiary, amount);
            let err = RoyaltyError::TransferFailed {
                node,
                beneficiary,
                amount,
                source,
            };
            {
                // The zeroing was undone, so it no longer counts as a commit
                let mut stats = self.stats.write();
                stats.operations_committed = stats.operations_committed.saturating_sub(1);
                stats.transfer_failures += 1;
            }
            self.reject(&err);
            return Err(err);
        }

        {
            let _guard = slot.write();
            self.publish(vec![RoyaltyEvent::PaymentReleased {
                node,
                beneficiary,
                amount,
            }]);
        }
        self.stats.write().claims += 1;
        info!("[er-04] Released {} to {} from {}", amount, beneficiary, node);
        Ok(amount)
    }

    fn pending(&self, node: Node, beneficiary: Address) -> U256 {
        self.read(node, |s| s.splits.pending(&beneficiary))
            .unwrap_or_default()
    }

    fn split_config(&self, node: Node) -> Option<SplitConfig> {
        self.read(node, |s| s.splits.config().cloned()).flatten()
    }

    fn parent_royalty(&self, node: Node) -> Option<ParentRoyalty> {
        self.read(node, |s| s.splits.parent_royalty().copied())
            .flatten()
    }

    fn total_deposited(&self, node: Node) -> U256 {
        self.read(node, |s| s.splits.total_deposited())
            .unwrap_or_default()
    }

    fn total_released(&self, node: Node) -> U256 {
        self.read(node, |s| s.splits.total_released())
            .unwrap_or_default()
    }
}

// =============================================================================
// FUSE REGISTRY API
// =============================================================================

impl<P: PayoutSink, E: EventSink> FuseRegistryApi for RoyaltyService<P, E> {
    type Error = RoyaltyError;

    #[instrument(skip_all, fields(node = %node, bits = bits))]
    fn burn_fuses(&self, caller: Caller<'_>, node: Node, bits: u32) -> Result<u32, RoyaltyError> {
        let newly = self
            .commit(node, |state, events| {
                self.authorize(caller, node, state, "burn_fuses", true)?;
                Self::burn_staged(node, state, events, bits)
            })
            .inspect_err(|e| self.reject(e))?;

        self.stats.write().fuse_burns += 1;
        info!("[er-04] Burned fuses {:#x} on {} (new {:#x})", bits, node, newly);
        Ok(newly)
    }

    fn is_fuse_burned(&self, node: Node, bit: u32) -> bool {
        self.read(node, |s| s.fuses.is_burned(bit))
            .unwrap_or_default()
    }

    fn is_royalty_locked(&self, node: Node) -> bool {
        self.read(node, |s| s.fuses.is_locked()).unwrap_or_default()
    }

    fn fuses(&self, node: Node) -> u32 {
        self.read(node, |s| s.fuses.bits()).unwrap_or_default()
    }

    fn fuse_state(&self, node: Node) -> FuseState {
        self.read(node, |s| s.fuses.state())
            .unwrap_or(FuseState::Unlocked)
    }
}

/// Service over in-memory adapters with the default configuration.
pub fn create_test_service() -> (
    RoyaltyService<InMemoryPayouts, InMemoryEventLog>,
    AdminCapability,
) {
    RoyaltyService::assemble(
        EngineConfig::default(),
        Arc::new(InMemoryPayouts::new()),
        Arc::new(InMemoryEventLog::new()),
    )
}

// =============================================================================
// TESTS
// =============================================================================
