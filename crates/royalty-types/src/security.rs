//! # Caller Roles
//!
//! Privileged operations (minting share units, locking supply, rewriting a
//! node's configuration) take an explicit [`Caller`] instead of relying on a
//! mutable "owner" field.
//!
//! An [`AdminCapability`] is minted once per service instance. The service
//! remembers the capability id it issued and rejects capabilities from any
//! other instance.

use crate::entities::Address;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CAPABILITY_ID: AtomicU64 = AtomicU64::new(1);

/// Unforgeable admin token. Not `Clone`: whoever holds it is the admin.
#[derive(Debug, PartialEq, Eq)]
pub struct AdminCapability {
    id: u64,
}

impl AdminCapability {
    /// Issues a fresh capability with a process-unique id.
    #[must_use]
    pub fn issue() -> Self {
        Self {
            id: NEXT_CAPABILITY_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Identity used by the issuer to recognise its own capability.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }
}

/// Who is invoking a privileged operation.
#[derive(Debug, Clone, Copy)]
pub enum Caller<'a> {
    /// Holder of the service's admin capability.
    Admin(&'a AdminCapability),
    /// An ordinary account, authorized only for nodes it owns.
    Account(Address),
}

impl Caller<'_> {
    /// Returns true if this caller presents `expected_id`'s capability.
    #[must_use]
    pub fn is_admin_of(&self, expected_id: u64) -> bool {
        matches!(self, Caller::Admin(cap) if cap.id() == expected_id)
    }

    /// Returns true if this caller is the account `owner`.
    #[must_use]
    pub fn is_account(&self, owner: Address) -> bool {
        matches!(self, Caller::Account(addr) if *addr == owner)
    }
}
