//! # Concurrency
//!
//! Parallel operations through `spawn_blocking` on a multi-threaded runtime.
//! Covers double-claim prevention, value conservation under parallel
//! deposits, creation races, and payout sinks that call back into the
//! service.

#[cfg(test)]
mod tests {
    use super::super::{addr, create_simple};
    use er_04_orchestrator::prelude::*;
    use parking_lot::Mutex;
    use std::sync::{Arc, OnceLock, Weak};

    type TestService = RoyaltyService<InMemoryPayouts, InMemoryEventLog>;

    fn shared_service() -> (Arc<TestService>, AdminCapability) {
        let (service, admin) = create_test_service();
        (Arc::new(service), admin)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_parallel_claims_pay_once() {
        let (service, _admin) = shared_service();
        let node = create_simple(&service, namehash("eth"), "race", addr(1), 0, addr(2));
        service.deposit(node, U256::from(1_000_000)).unwrap();

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::task::spawn_blocking(move || service.claim(node, addr(2)))
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(amount) => {
                    assert_eq!(amount, U256::from(1_000_000));
                    successes += 1;
                }
                Err(err) => assert_eq!(err.kind(), ErrorKind::Resource),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(service.payouts().balance_of(&addr(2)), U256::from(1_000_000));
        assert_eq!(service.payouts().transfer_count(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_parallel_deposits_conserve_value() {
        let (service, _admin) = shared_service();
        let node = service
            .create_config(
                CreateConfigRequest::new(namehash("eth"), "busy", addr(1), 0)
                    .with_split(vec![addr(2), addr(3), addr(4)], vec![3333, 3333, 3334]),
            )
            .unwrap();

        let handles: Vec<_> = (1..=64u64)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::task::spawn_blocking(move || {
                    for j in 0..10 {
                        service.deposit(node, U256::from(i * 1_000 + j)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let expected: u64 = (1..=64u64)
            .flat_map(|i| (0..10).map(move |j| i * 1_000 + j))
            .sum();
        let pending = [addr(2), addr(3), addr(4)]
            .iter()
            .map(|b| service.pending(node, *b))
            .fold(U256::zero(), |acc, v| acc + v);

        assert_eq!(pending, U256::from(expected));
        assert_eq!(service.total_deposited(node), U256::from(expected));
        assert_eq!(service.stats().deposits, 640);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_deposits_and_claims_interleave() {
        let (service, _admin) = shared_service();
        let node = create_simple(&service, namehash("eth"), "mix", addr(1), 0, addr(2));

        let depositors: Vec<_> = (0..8)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::task::spawn_blocking(move || {
                    for _ in 0..50 {
                        service.deposit(node, U256::from(10)).unwrap();
                    }
                })
            })
            .collect();
        let claimers: Vec<_> = (0..4)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::task::spawn_blocking(move || {
                    for _ in 0..50 {
                        let _ = service.claim(node, addr(2));
                    }
                })
            })
            .collect();
        for handle in depositors.into_iter().chain(claimers) {
            handle.await.unwrap();
        }

        let paid = service.payouts().balance_of(&addr(2));
        let left = service.pending(node, addr(2));
        assert_eq!(paid + left, U256::from(8 * 50 * 10));
        assert_eq!(service.total_released(node), paid);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_same_label_created_once() {
        let (service, _admin) = shared_service();
        let handles: Vec<_> = (0..16u8)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::task::spawn_blocking(move || {
                    service.create_config(CreateConfigRequest::new(
                        namehash("eth"),
                        "contested",
                        addr(i + 1),
                        100,
                    ))
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(err) => assert!(matches!(err, RoyaltyError::NodeAlreadyExists { .. })),
            }
        }
        assert_eq!(created, 1);
        assert_eq!(
            service.total_supply(namehash("contested.eth")),
            U256::from(100)
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_siblings_created_in_parallel() {
        let (service, _admin) = shared_service();
        let parent = create_simple(&service, namehash("eth"), "hub", addr(0xaa), 500, addr(1));

        let handles: Vec<_> = (0..32u8)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::task::spawn_blocking(move || {
                    create_simple(&service, parent, &format!("child{i}"), addr(2), 0, addr(3))
                })
            })
            .collect();

        for handle in handles {
            let child = handle.await.unwrap();
            let link = service.parent_royalty(child).unwrap();
            assert_eq!(link.rate, 500);
            assert_eq!(link.recipient, addr(0xaa));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_lock_races_child_creation() {
        let (service, _admin) = shared_service();
        let owner = addr(0xaa);
        let parent = create_simple(&service, namehash("eth"), "gate", owner, 0, addr(1));

        let burner = {
            let service = Arc::clone(&service);
            tokio::task::spawn_blocking(move || {
                service.burn_fuses(Caller::Account(owner), parent, PARENT_CANNOT_CONTROL)
            })
        };
        let creators: Vec<_> = (0..16u8)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::task::spawn_blocking(move || {
                    service.create_config(CreateConfigRequest::new(
                        parent,
                        format!("late{i}"),
                        addr(2),
                        0,
                    ))
                })
            })
            .collect();

        burner.await.unwrap().unwrap();
        for handle in creators {
            if let Err(err) = handle.await.unwrap() {
                assert_eq!(err, RoyaltyError::AlreadyLocked { parent });
            }
        }

        // After the burn every attempt is refused
        let err = service
            .create_config(CreateConfigRequest::new(parent, "after", addr(2), 0))
            .unwrap_err();
        assert_eq!(err, RoyaltyError::AlreadyLocked { parent });
    }

    // =========================================================================
    // RE-ENTRANT PAYOUT SINK
    // =========================================================================

    /// Payout sink that tries to claim again from inside the transfer.
    struct ReentrantSink {
        service: OnceLock<Weak<RoyaltyService<ReentrantSink, InMemoryEventLog>>>,
        node: Node,
        observed: Mutex<Vec<(U256, Result<U256, RoyaltyError>)>>,
        inner: InMemoryPayouts,
    }

    impl PayoutSink for ReentrantSink {
        fn transfer(&self, recipient: Address, amount: U256) -> Result<(), PayoutError> {
            if let Some(service) = self.service.get().and_then(Weak::upgrade) {
                let pending = service.pending(self.node, recipient);
                let second = service.claim(self.node, recipient);
                self.observed.lock().push((pending, second));
            }
            self.inner.transfer(recipient, amount)
        }
    }

    #[test]
    fn test_reentrant_claim_sees_zero() {
        let node = namehash("reentrant.eth");
        let sink = Arc::new(ReentrantSink {
            service: OnceLock::new(),
            node,
            observed: Mutex::new(Vec::new()),
            inner: InMemoryPayouts::new(),
        });
        let (service, admin) = RoyaltyService::new(
            EngineConfig::default(),
            Arc::clone(&sink),
            Arc::new(InMemoryEventLog::new()),
        )
        .unwrap();
        let service = Arc::new(service);
        assert!(sink.service.set(Arc::downgrade(&service)).is_ok());

        service
            .setup_split(Caller::Admin(&admin), node, vec![addr(2)], vec![10_000])
            .unwrap();
        service.deposit(node, U256::from(500)).unwrap();

        assert_eq!(service.claim(node, addr(2)).unwrap(), U256::from(500));

        let observed = sink.observed.lock();
        assert_eq!(observed.len(), 1);
        let (pending_inside, second_claim) = &observed[0];
        assert_eq!(*pending_inside, U256::zero());
        assert!(matches!(
            second_claim,
            Err(RoyaltyError::Splitter {
                source: SplitterError::NothingToClaim(_),
                ..
            })
        ));
        assert_eq!(sink.inner.balance_of(&addr(2)), U256::from(500));
    }
}
