//! Cross-subsystem integration tests.

pub mod atomicity;
pub mod concurrency;
pub mod scenarios;

use er_04_orchestrator::prelude::*;

/// Fixture address.
pub fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

/// Creates `label.parent` with a single-beneficiary split.
pub fn create_simple<P: PayoutSink, E: EventSink>(
    service: &RoyaltyService<P, E>,
    parent: Node,
    label: &str,
    owner: Address,
    royalty_bps: u16,
    beneficiary: Address,
) -> Node {
    service
        .create_config(
            CreateConfigRequest::new(parent, label, owner, royalty_bps)
                .with_split(vec![beneficiary], vec![10_000]),
        )
        .expect("fixture node creation")
}
