//! # End-to-End Royalty Flows
//!
//! Share minting, supply locking, cascading parent royalties, fuse-based
//! locking and claims, exercised through the unified service.

#[cfg(test)]
mod tests {
    use super::super::{addr, create_simple};
    use er_04_orchestrator::prelude::*;

    // =========================================================================
    // SHARE LEDGER
    // =========================================================================

    #[test]
    fn test_mint_and_share_of() {
        let (service, admin) = create_test_service();
        let node = namehash("test.eth");

        service
            .mint(Caller::Admin(&admin), node, addr(1), U256::from(600))
            .unwrap();
        service
            .mint(Caller::Admin(&admin), node, addr(2), U256::from(400))
            .unwrap();

        assert_eq!(service.total_supply(node), U256::from(1000));
        assert_eq!(service.share_of(node, addr(1)), 6000);
        assert_eq!(service.share_of(node, addr(2)), 4000);
        assert_eq!(service.share_of(node, addr(3)), 0);
    }

    #[test]
    fn test_lock_supply_emits_final_total() {
        let (service, admin) = create_test_service();
        let node = namehash("test.eth");
        service
            .mint(Caller::Admin(&admin), node, addr(1), U256::from(1000))
            .unwrap();
        service.lock_supply(Caller::Admin(&admin), node).unwrap();

        let last = service.event_sink().events().pop().unwrap();
        assert_eq!(
            last,
            RoyaltyEvent::SupplyLocked {
                node,
                total_supply: U256::from(1000)
            }
        );
    }

    #[test]
    fn test_every_mint_fails_after_lock() {
        let (service, admin) = create_test_service();
        let node = namehash("test.eth");
        service
            .mint(Caller::Admin(&admin), node, addr(1), U256::from(1000))
            .unwrap();
        service.lock_supply(Caller::Admin(&admin), node).unwrap();

        for amount in [0u64, 1, 1_000_000] {
            let err = service
                .mint(Caller::Admin(&admin), node, addr(2), U256::from(amount))
                .unwrap_err();
            assert_eq!(
                err,
                RoyaltyError::Ledger {
                    node,
                    source: LedgerError::CannotMintLockedSupply
                }
            );
        }
        assert_eq!(
            service.lock_supply(Caller::Admin(&admin), node).unwrap_err(),
            RoyaltyError::Ledger {
                node,
                source: LedgerError::SupplyAlreadyLocked
            }
        );
        assert_eq!(service.total_supply(node), U256::from(1000));
    }

    // =========================================================================
    // PAYMENT SPLITTER
    // =========================================================================

    /// Shares [7000, 3000], deposit 1,000,000.
    #[test]
    fn test_seventy_thirty_split() {
        let (service, admin) = create_test_service();
        let node = namehash("split.eth");
        service
            .setup_split(
                Caller::Admin(&admin),
                node,
                vec![addr(1), addr(2)],
                vec![7000, 3000],
            )
            .unwrap();

        service.deposit(node, U256::from(1_000_000)).unwrap();

        assert_eq!(service.pending(node, addr(1)), U256::from(700_000));
        assert_eq!(service.pending(node, addr(2)), U256::from(300_000));
    }

    /// Parent rate 2000, child shares [6000, 4000], deposit 10,000,000.
    #[test]
    fn test_cascading_parent_royalty() {
        let (service, admin) = create_test_service();
        let parent = namehash("parent.eth");
        let child = namehash("child.parent.eth");
        let parent_recipient = addr(0xaa);

        service
            .set_royalty_rate(Caller::Admin(&admin), parent, 2000, Some(parent_recipient))
            .unwrap();
        service
            .setup_split(
                Caller::Admin(&admin),
                child,
                vec![addr(1), addr(2)],
                vec![6000, 4000],
            )
            .unwrap();
        service
            .setup_parent_royalty(Caller::Admin(&admin), child, parent, parent_recipient)
            .unwrap();

        let distribution = service.deposit(child, U256::from(10_000_000)).unwrap();

        assert_eq!(
            distribution.parent_credit,
            Some((parent_recipient, U256::from(2_000_000)))
        );
        assert_eq!(service.pending(child, parent_recipient), U256::from(2_000_000));
        assert_eq!(service.pending(child, addr(1)), U256::from(4_800_000));
        assert_eq!(service.pending(child, addr(2)), U256::from(3_200_000));
    }

    /// Parent rate set without a recipient, child linked by hand to one of
    /// its own beneficiaries.
    #[test]
    fn test_parent_recipient_among_beneficiaries() {
        let (service, admin) = create_test_service();
        let parent = namehash("parent.eth");
        let owner = addr(0xbb);

        service
            .set_royalty_rate(Caller::Admin(&admin), parent, 2000, None)
            .unwrap();
        let child = service
            .create_config(
                CreateConfigRequest::new(parent, "child", owner, 0)
                    .with_split(vec![addr(1), addr(2)], vec![6000, 4000]),
            )
            .unwrap();
        // No recipient on the parent rate, so nothing was linked
        assert_eq!(service.parent_royalty(child), None);

        service
            .setup_parent_royalty(Caller::Account(owner), child, parent, addr(2))
            .unwrap();
        assert_eq!(
            service.parent_royalty(child),
            Some(ParentRoyalty {
                parent,
                recipient: addr(2),
                rate: 2000
            })
        );

        service.deposit(child, U256::from(10_000_000)).unwrap();
        assert_eq!(service.pending(child, addr(1)), U256::from(4_800_000));
        assert_eq!(service.pending(child, addr(2)), U256::from(5_200_000));
        assert_eq!(service.total_deposited(child), U256::from(10_000_000));
    }

    #[test]
    fn test_cascade_through_created_nodes() {
        let (service, _admin) = create_test_service();
        let eth = namehash("eth");
        let parent_owner = addr(0xaa);

        let parent = create_simple(&service, eth, "parent", parent_owner, 2000, addr(0xa1));
        let child = service
            .create_config(
                CreateConfigRequest::new(parent, "child", addr(0xbb), 1000)
                    .with_split(vec![addr(1), addr(2)], vec![6000, 4000]),
            )
            .unwrap();

        service.deposit(child, U256::from(10_000_000)).unwrap();
        assert_eq!(service.pending(child, parent_owner), U256::from(2_000_000));
        assert_eq!(service.pending(child, addr(1)), U256::from(4_800_000));

        // One level only: the grandparent link is the child's own parent
        let grandchild = create_simple(&service, child, "leaf", addr(0xcc), 0, addr(3));
        service.deposit(grandchild, U256::from(1_000)).unwrap();
        assert_eq!(service.pending(grandchild, addr(0xbb)), U256::from(100));
        assert_eq!(service.pending(grandchild, addr(3)), U256::from(900));
        assert_eq!(service.pending(grandchild, parent_owner), U256::zero());
    }

    #[test]
    fn test_claim_zeroes_and_second_claim_fails() {
        let (service, _admin) = create_test_service();
        let node = create_simple(&service, namehash("eth"), "pay", addr(1), 0, addr(2));
        service.deposit(node, U256::from(12_345)).unwrap();

        assert_eq!(service.claim(node, addr(2)).unwrap(), U256::from(12_345));
        assert_eq!(service.pending(node, addr(2)), U256::zero());
        assert_eq!(service.payouts().balance_of(&addr(2)), U256::from(12_345));

        let err = service.claim(node, addr(2)).unwrap_err();
        assert_eq!(
            err,
            RoyaltyError::Splitter {
                node,
                source: SplitterError::NothingToClaim(addr(2))
            }
        );
        assert_eq!(err.kind(), ErrorKind::Resource);
    }

    #[test]
    fn test_claim_emits_payment_released() {
        let (service, _admin) = create_test_service();
        let node = create_simple(&service, namehash("eth"), "pay", addr(1), 0, addr(2));
        service.deposit(node, U256::from(99)).unwrap();
        service.claim(node, addr(2)).unwrap();

        let names: Vec<_> = service
            .event_sink()
            .events_for(node)
            .iter()
            .map(|e| e.name())
            .collect();
        assert_eq!(names.last(), Some(&"PaymentReleased"));
        assert!(names.contains(&"PaymentReceived"));
    }

    // =========================================================================
    // FUSES
    // =========================================================================

    #[test]
    fn test_created_node_has_no_fuses() {
        let (service, _admin) = create_test_service();
        let node = create_simple(&service, namehash("eth"), "open", addr(1), 500, addr(2));
        let view = service.get_config(node).unwrap();
        assert_eq!(view.fuses, 0);
        assert_eq!(view.fuse_state, FuseState::Unlocked);
        assert!(!view.locked);
        assert!(view.has_royalty);
        assert_eq!(view.locked_amount, U256::zero());
    }

    /// Locked parent with shares [10000]; children are refused.
    #[test]
    fn test_locked_parent_refuses_children() {
        let (service, _admin) = create_test_service();
        let parent = service
            .create_locked_config(
                CreateConfigRequest::new(namehash("eth"), "vault", addr(1), 1000)
                    .with_split(vec![addr(2)], vec![10_000]),
            )
            .unwrap();

        let view = service.get_config(parent).unwrap();
        assert_eq!(view.fuses, CANNOT_CHANGE_ROYALTY | PARENT_CANNOT_CONTROL);
        assert_eq!(view.fuse_state, FuseState::FullyLocked);
        assert!(view.locked);
        assert!(view.supply_locked);
        assert_eq!(view.locked_amount, U256::from(1000));

        for label in ["a", "b", "c"] {
            let err = service
                .create_config(CreateConfigRequest::new(parent, label, addr(3), 0))
                .unwrap_err();
            assert_eq!(err, RoyaltyError::AlreadyLocked { parent });
        }
        assert_eq!(service.total_supply(parent), U256::from(1000));
    }

    #[test]
    fn test_locked_config_events() {
        let (service, _admin) = create_test_service();
        let node = service
            .create_locked_config(CreateConfigRequest::new(namehash("eth"), "l", addr(1), 1000))
            .unwrap();

        let events = service.event_sink().events_for(node);
        assert!(events.contains(&RoyaltyEvent::FusesBurned {
            node,
            fuses: ALL_NAMED_FUSES
        }));
        assert!(events.contains(&RoyaltyEvent::RoyaltyLocked {
            node,
            locked_amount: U256::from(1000)
        }));
    }

    #[test]
    fn test_manual_fuse_burning() {
        let (service, _admin) = create_test_service();
        let owner = addr(1);
        let node = create_simple(&service, namehash("eth"), "manual", owner, 500, addr(2));

        assert!(!service.is_royalty_locked(node));
        service
            .burn_fuses(Caller::Account(owner), node, CANNOT_CHANGE_ROYALTY)
            .unwrap();
        assert!(service.is_fuse_burned(node, CANNOT_CHANGE_ROYALTY));
        assert!(!service.is_fuse_burned(node, PARENT_CANNOT_CONTROL));
        assert!(!service.is_fuse_burned(node, 16));
        assert!(service.is_royalty_locked(node));
        assert_eq!(service.fuse_state(node), FuseState::PartiallyBurned);

        let err = service
            .burn_fuses(Caller::Account(owner), node, CANNOT_CHANGE_ROYALTY)
            .unwrap_err();
        assert_eq!(
            err,
            RoyaltyError::Fuse {
                node,
                source: FuseError::FuseAlreadyBurned(CANNOT_CHANGE_ROYALTY)
            }
        );

        // Only the royalty fuse is burned, so children are still allowed
        service
            .create_config(CreateConfigRequest::new(node, "kid", addr(3), 0))
            .unwrap();

        service
            .burn_fuses(Caller::Account(owner), node, ALL_NAMED_FUSES)
            .unwrap();
        assert_eq!(service.fuse_state(node), FuseState::FullyLocked);
    }

    #[test]
    fn test_deposits_still_flow_to_locked_nodes() {
        let (service, _admin) = create_test_service();
        let node = service
            .create_locked_config(
                CreateConfigRequest::new(namehash("eth"), "frozen", addr(1), 0)
                    .with_split(vec![addr(2), addr(3)], vec![5000, 5000]),
            )
            .unwrap();

        service.deposit(node, U256::from(1001)).unwrap();
        assert_eq!(service.pending(node, addr(2)), U256::from(500));
        assert_eq!(service.pending(node, addr(3)), U256::from(501));
        assert_eq!(service.claim(node, addr(3)).unwrap(), U256::from(501));
    }
}
