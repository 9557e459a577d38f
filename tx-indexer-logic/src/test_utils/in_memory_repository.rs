use async_trait::async_trait;
use parking_lot::RwLock;
use std::{collections::BTreeMap, sync::Arc};
use tx_indexer_entity::sea_orm_active_enums::TxStatus;

use crate::{
    repository::{TxRepository, TxResultUpdate},
    types::TxRecord,
};

#[derive(Clone, Default)]
pub struct InMemoryTxRepository {
    records: Arc<RwLock<BTreeMap<String, TxRecord>>>,
    find_calls: Arc<RwLock<Vec<(u64, u64)>>>,
    updates: Arc<RwLock<usize>>,
    fail_find: Arc<RwLock<bool>>,
}

impl InMemoryTxRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tx_hash: &str) -> Option<TxRecord> {
        self.records.read().get(tx_hash).cloned()
    }

    pub fn count_with_status(&self, status: TxStatus) -> usize {
        self.records
            .read()
            .values()
            .filter(|record| record.status == status)
            .count()
    }

    /// `(skip, limit)` of every `find_unknown` call.
    pub fn find_calls(&self) -> Vec<(u64, u64)> {
        self.find_calls.read().clone()
    }

    /// Number of updates that changed a record.
    pub fn updates(&self) -> usize {
        *self.updates.read()
    }

    pub fn set_fail_find(&self, fail: bool) {
        *self.fail_find.write() = fail;
    }
}

#[async_trait]
impl TxRepository for InMemoryTxRepository {
    async fn insert(&self, record: &TxRecord) -> anyhow::Result<bool> {
        let mut records = self.records.write();
        if records.contains_key(&record.tx_hash) {
            return Ok(false);
        }
        records.insert(record.tx_hash.clone(), record.clone());
        Ok(true)
    }

    async fn find_unknown(&self, skip: u64, limit: u64) -> anyhow::Result<Vec<TxRecord>> {
        self.find_calls.write().push((skip, limit));
        if *self.fail_find.read() {
            anyhow::bail!("mock store unavailable");
        }
        let mut unknown: Vec<_> = self
            .records
            .read()
            .values()
            .filter(|record| record.status == TxStatus::Unknown)
            .cloned()
            .collect();
        unknown.sort_by(|a, b| {
            b.height
                .cmp(&a.height)
                .then_with(|| a.tx_hash.cmp(&b.tx_hash))
        });
        Ok(unknown
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn apply_result(&self, update: &TxResultUpdate) -> anyhow::Result<bool> {
        let mut records = self.records.write();
        match records.get_mut(&update.tx_hash) {
            Some(record) if record.status == TxStatus::Unknown => {
                update.apply_to(record);
                *self.updates.write() += 1;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn find_by_hash(&self, tx_hash: &str) -> anyhow::Result<Option<TxRecord>> {
        Ok(self.get(tx_hash))
    }
}
