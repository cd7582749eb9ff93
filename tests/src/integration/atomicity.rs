//! # All-or-Nothing Operations
//!
//! A rejected operation must leave no partial node, no supply and no events.

#[cfg(test)]
mod tests {
    use super::super::{addr, create_simple};
    use er_04_orchestrator::prelude::*;
    use proptest::prelude::*;

    fn assert_untouched<P: PayoutSink>(service: &RoyaltyService<P, InMemoryEventLog>, node: Node) {
        assert!(service.get_config(node).is_none());
        assert_eq!(service.total_supply(node), U256::zero());
        assert!(service.split_config(node).is_none());
        assert!(service.royalty_rate(node).is_none());
        assert_eq!(service.fuses(node), 0);
        assert!(service.event_sink().events_for(node).is_empty());
    }

    #[test]
    fn test_bad_shares_leave_no_node() {
        let (service, _admin) = create_test_service();
        let request = CreateConfigRequest::new(namehash("eth"), "bad", addr(1), 500)
            .with_split(vec![addr(2), addr(3)], vec![6000, 3000]);
        let node = request.node();

        let err = service.create_config(request).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_untouched(&service, node);
        assert!(service.event_sink().is_empty());
    }

    #[test]
    fn test_each_validation_failure_is_atomic() {
        let (service, _admin) = create_test_service();
        let eth = namehash("eth");
        let bad_requests = [
            CreateConfigRequest::new(eth, "len", addr(1), 0)
                .with_split(vec![addr(2)], vec![5000, 5000]),
            CreateConfigRequest::new(eth, "dup", addr(1), 0)
                .with_split(vec![addr(2), addr(2)], vec![5000, 5000]),
            CreateConfigRequest::new(eth, "zero", addr(1), 0)
                .with_split(vec![Address::ZERO], vec![10_000]),
            CreateConfigRequest::new(eth, "rate", addr(1), 10_001),
            CreateConfigRequest::new(eth, "shares-only", addr(1), 0).with_split(vec![], vec![10_000]),
        ];

        for request in bad_requests {
            let node = request.node();
            assert!(service.create_config(request).is_err());
            assert_untouched(&service, node);
        }
        assert_eq!(service.stats().operations_rejected, 5);
        assert_eq!(service.stats().configs_created, 0);
    }

    #[test]
    fn test_failed_locked_create_burns_nothing() {
        let (service, _admin) = create_test_service();
        let request = CreateConfigRequest::new(namehash("eth"), "v", addr(1), 1000)
            .with_split(vec![addr(2)], vec![9999]);
        let node = request.node();

        assert!(service.create_locked_config(request).is_err());
        assert_untouched(&service, node);
        assert!(!service.is_supply_locked(node));
    }

    #[test]
    fn test_failed_create_can_be_retried() {
        let (service, _admin) = create_test_service();
        let bad = CreateConfigRequest::new(namehash("eth"), "retry", addr(1), 0)
            .with_split(vec![addr(2)], vec![1]);
        let node = bad.node();
        assert!(service.create_config(bad).is_err());

        let good = CreateConfigRequest::new(namehash("eth"), "retry", addr(1), 0)
            .with_split(vec![addr(2)], vec![10_000]);
        assert_eq!(service.create_config(good).unwrap(), node);
    }

    #[test]
    fn test_too_many_beneficiaries() {
        let (service, _admin) = create_test_service();
        let max = service.config().max_beneficiaries;
        let beneficiaries: Vec<_> = (1..=max + 1)
            .map(|i| {
                let mut bytes = [0u8; 20];
                bytes[..8].copy_from_slice(&(i as u64).to_be_bytes());
                Address::new(bytes)
            })
            .collect();
        let mut shares = vec![0u16; max + 1];
        shares[0] = 10_000;

        let request = CreateConfigRequest::new(namehash("eth"), "crowd", addr(1), 0)
            .with_split(beneficiaries, shares);
        let node = request.node();
        let err = service.create_config(request).unwrap_err();
        assert!(matches!(
            err,
            RoyaltyError::Splitter {
                source: SplitterError::TooManyBeneficiaries { .. },
                ..
            }
        ));
        assert_untouched(&service, node);
    }

    #[test]
    fn test_rejected_deposit_changes_nothing() {
        let (service, _admin) = create_test_service();
        let node = create_simple(&service, namehash("eth"), "d", addr(1), 0, addr(2));
        let before = service.get_config(node).unwrap();
        let events_before = service.event_sink().len();

        assert!(service.deposit(node, U256::zero()).is_err());
        assert!(service.deposit(node, U256::MAX).is_err());

        assert_eq!(service.get_config(node).unwrap(), before);
        assert_eq!(service.event_sink().len(), events_before);
    }

    #[test]
    fn test_failed_payout_keeps_balance_claimable() {
        let (service, _admin) = create_test_service();
        let node = create_simple(&service, namehash("eth"), "p", addr(1), 0, addr(2));
        service.deposit(node, U256::from(777)).unwrap();
        service.payouts().reject_transfers_to(addr(2));

        for _ in 0..3 {
            let err = service.claim(node, addr(2)).unwrap_err();
            assert!(matches!(err, RoyaltyError::TransferFailed { .. }));
            assert_eq!(service.pending(node, addr(2)), U256::from(777));
        }
        assert_eq!(service.payouts().transfer_count(), 0);

        let released = service
            .event_sink()
            .events_for(node)
            .into_iter()
            .filter(|e| e.name() == "PaymentReleased")
            .count();
        assert_eq!(released, 0);
    }

    proptest! {
        #[test]
        fn prop_deposit_sequence_conserves_value(
            shares in prop::sample::select(vec![
                vec![10_000u16],
                vec![7000, 3000],
                vec![3333, 3333, 3334],
                vec![1, 9999],
                vec![2500, 2500, 2500, 2500],
            ]),
            parent_rate in 0u16..=10_000,
            deposits in prop::collection::vec(1u64.., 1..20),
        ) {
            let (service, admin) = create_test_service();
            let parent = namehash("p.eth");
            let child = namehash("c.p.eth");
            let beneficiaries: Vec<_> = (1..=shares.len() as u8).map(addr).collect();

            service
                .set_royalty_rate(Caller::Admin(&admin), parent, parent_rate, Some(addr(0xee)))
                .unwrap();
            service
                .setup_split(Caller::Admin(&admin), child, beneficiaries.clone(), shares)
                .unwrap();
            service
                .setup_parent_royalty(Caller::Admin(&admin), child, parent, addr(0xee))
                .unwrap();

            let mut total = U256::zero();
            for amount in deposits {
                service.deposit(child, U256::from(amount)).unwrap();
                total += U256::from(amount);
            }

            let pending: U256 = beneficiaries
                .iter()
                .chain(std::iter::once(&addr(0xee)))
                .map(|b| service.pending(child, *b))
                .fold(U256::zero(), |acc, v| acc + v);
            prop_assert_eq!(pending, total);
            prop_assert_eq!(service.total_deposited(child), total);
        }
    }
}
