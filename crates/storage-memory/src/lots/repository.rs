use std::sync::RwLock;

use async_trait::async_trait;
use log::debug;

use lotfolio_core::lots::{Lot, PurchaseLotRepositoryTrait};
use lotfolio_core::Result;

use crate::errors::StorageError;

/// Append-only, process-local purchase lot ledger.
///
/// Writes append under a short-lived write lock and reads copy the ledger
/// out, so any number of tasks can share one instance behind an `Arc`. Lots
/// come back in exactly the order they were written.
#[derive(Debug, Default)]
pub struct InMemoryPurchaseLotRepository {
    purchase_lots: RwLock<Vec<Lot>>,
}

impl InMemoryPurchaseLotRepository {
    pub fn new() -> Self {
        InMemoryPurchaseLotRepository {
            purchase_lots: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PurchaseLotRepositoryTrait for InMemoryPurchaseLotRepository {
    async fn append_purchase_lot(&self, lot: Lot) -> Result<()> {
        let mut purchase_lots = self
            .purchase_lots
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        purchase_lots.push(lot);
        debug!(
            "Appended purchase lot; the ledger now holds {} lots.",
            purchase_lots.len()
        );
        Ok(())
    }

    async fn load_ordered_purchase_lots(&self) -> Result<Vec<Lot>> {
        let purchase_lots = self
            .purchase_lots
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        Ok(purchase_lots.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Month;
    use rust_decimal_macros::dec;

    use crate::Error;

    use super::*;

    fn lot(count: u32, month: Month) -> Lot {
        Lot::new(count, dec!(20), month).unwrap()
    }

    #[tokio::test]
    async fn read_returns_lots_in_write_order() {
        let repository = InMemoryPurchaseLotRepository::new();
        repository
            .append_purchase_lot(lot(1, Month::January))
            .await
            .unwrap();
        repository
            .append_purchase_lot(lot(2, Month::February))
            .await
            .unwrap();
        repository
            .append_purchase_lot(lot(3, Month::March))
            .await
            .unwrap();

        let lots = repository.load_ordered_purchase_lots().await.unwrap();
        let counts: Vec<u32> = lots.iter().map(Lot::count).collect();
        assert_eq!(counts, vec![1, 2, 3], "lots must come back in write order");
    }

    #[tokio::test]
    async fn every_read_observes_all_prior_writes() {
        let repository = InMemoryPurchaseLotRepository::new();
        for round in 1..=5u32 {
            repository
                .append_purchase_lot(lot(round, Month::January))
                .await
                .unwrap();
            let lots = repository.load_ordered_purchase_lots().await.unwrap();
            assert_eq!(lots.len() as u32, round);
        }
    }

    #[tokio::test]
    async fn concurrent_writers_each_land_exactly_once() {
        let repository = Arc::new(InMemoryPurchaseLotRepository::new());
        let mut handles = Vec::new();
        for i in 1..=16u32 {
            let repository = Arc::clone(&repository);
            handles.push(tokio::spawn(async move {
                repository.append_purchase_lot(lot(i, Month::January)).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mut counts: Vec<u32> = repository
            .load_ordered_purchase_lots()
            .await
            .unwrap()
            .iter()
            .map(Lot::count)
            .collect();
        counts.sort_unstable();
        assert_eq!(counts, (1..=16).collect::<Vec<u32>>());
    }

    #[tokio::test]
    async fn a_poisoned_ledger_lock_surfaces_as_a_repository_error() {
        let repository = Arc::new(InMemoryPurchaseLotRepository::new());
        let poisoner = Arc::clone(&repository);
        std::thread::spawn(move || {
            let _guard = poisoner.purchase_lots.write().unwrap();
            panic!("poisoning the ledger lock");
        })
        .join()
        .expect_err("the poisoning thread must panic");

        let loaded = repository.load_ordered_purchase_lots().await;
        assert!(
            matches!(loaded, Err(Error::Repository(_))),
            "a poisoned read must fail with a repository error, got {:?}",
            loaded
        );

        let appended = repository.append_purchase_lot(lot(1, Month::January)).await;
        assert!(
            matches!(appended, Err(Error::Repository(_))),
            "a poisoned write must fail with a repository error, got {:?}",
            appended
        );
    }
}
