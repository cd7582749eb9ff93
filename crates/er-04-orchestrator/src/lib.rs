//! # Royalty Orchestrator
//!
//! Unified service over the share ledger, payment splitter and fuse
//! registry, plus the atomic multi-step node creation.
//!
//! ## Architecture
//!
//! ```text
//!   RoyaltyApi · ShareLedgerApi · PaymentSplitterApi · FuseRegistryApi
//!                              │
//!                 ┌────────────▼────────────┐
//!                 │     RoyaltyService      │
//!                 │  authorize · stage ·    │
//!                 │  commit · publish       │
//!                 └───┬─────────────────┬───┘
//!                     │                 │
//!        NodeTable<NodeState>      PayoutSink / EventSink
//!   (ShareBook, SplitAccount,     (InMemoryPayouts,
//!    Fuses, NodeOrigin)            InMemoryEventLog)
//! ```
//!
//! ## Authorization
//!
//! | Operation | Caller |
//! |-----------|--------|
//! | `mint`, `lock_supply` | admin |
//! | `set_royalty_rate`, `setup_split`, `setup_parent_royalty`, `burn_fuses` | admin or node owner |
//! | `create_config`, `deposit`, `claim`, reads | anyone |
//!
//! ## Usage
//!
//! ```
//! use er_04_orchestrator::prelude::*;
//!
//! let (service, _admin) = create_test_service();
//! let node = service
//!     .create_config(
//!         CreateConfigRequest::new(namehash("eth"), "alice", Address::repeat_byte(1), 500)
//!             .with_split(vec![Address::repeat_byte(2)], vec![10_000]),
//!     )
//!     .unwrap();
//! service.deposit(node, U256::from(1_000)).unwrap();
//! assert_eq!(service.pending(node, Address::repeat_byte(2)), U256::from(1_000));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

pub use adapters::{InMemoryEventLog, NodeTable};
pub use config::{ConfigError, EngineConfig};
pub use domain::*;
pub use events::{EventRecord, RoyaltyEvent};
pub use ports::{EventSink, RoyaltyApi};
pub use service::{create_test_service, RoyaltyService, ServiceStats};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything needed to drive the service.
pub mod prelude {
    pub use crate::{
        create_test_service, ConfigError, CreateConfigRequest, EngineConfig, ErrorKind,
        EventRecord, EventSink, InMemoryEventLog, NodeOrigin, RoyaltyApi, RoyaltyConfigView,
        RoyaltyError, RoyaltyEvent, RoyaltyService, ServiceStats,
    };
    pub use er_01_share_ledger::{LedgerError, RoyaltyRate, ShareLedgerApi};
    pub use er_02_payment_splitter::{
        Distribution, InMemoryPayouts, ParentRoyalty, PaymentSplitterApi, PayoutError,
        PayoutSink, SplitConfig, SplitterError,
    };
    pub use er_03_fuse_registry::{
        FuseError, FuseRegistryApi, FuseState, ALL_NAMED_FUSES, CANNOT_CHANGE_ROYALTY,
        PARENT_CANNOT_CONTROL,
    };
    pub use royalty_types::{
        labelhash, namehash, Address, AdminCapability, Caller, Node, BPS_DENOMINATOR, U256,
    };
}
