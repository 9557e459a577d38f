use async_trait::async_trait;
use std::collections::BTreeMap;
use tx_indexer_entity::sea_orm_active_enums::TxStatus;

use crate::types::{ActualFee, DocTxMsg, TxRecord};

mod txs;

pub use txs::PostgresTxRepository;

/// Fields rewritten when a previously unknown transaction gets resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TxResultUpdate {
    pub tx_hash: String,
    pub actual_fee: ActualFee,
    pub status: TxStatus,
    pub tags: BTreeMap<String, String>,
    pub messages: Vec<DocTxMsg>,
    pub code: u32,
    pub log: String,
    pub gas_wanted: i64,
}

impl From<&TxRecord> for TxResultUpdate {
    fn from(record: &TxRecord) -> Self {
        Self {
            tx_hash: record.tx_hash.clone(),
            actual_fee: record.actual_fee.clone(),
            status: record.status,
            tags: record.tags.clone(),
            messages: record.messages.clone(),
            code: record.code,
            log: record.log.clone(),
            gas_wanted: record.gas_wanted,
        }
    }
}

impl TxResultUpdate {
    /// Writes the update onto a full record.
    pub fn apply_to(&self, record: &mut TxRecord) {
        record.actual_fee = self.actual_fee.clone();
        record.status = self.status;
        record.tags = self.tags.clone();
        record.messages = self.messages.clone();
        record.code = self.code;
        record.log = self.log.clone();
        record.gas_wanted = self.gas_wanted;
    }
}

/// Storage of transaction records keyed by `tx_hash`.
#[async_trait]
pub trait TxRepository: Send + Sync {
    /// Inserts the record unless one with the same hash exists.
    /// Returns whether a row was written.
    async fn insert(&self, record: &TxRecord) -> anyhow::Result<bool>;

    /// Unresolved records ordered by height descending, then by hash.
    async fn find_unknown(&self, skip: u64, limit: u64) -> anyhow::Result<Vec<TxRecord>>;

    /// Applies the update to the record if it is still unresolved.
    /// Returns whether a row was changed.
    async fn apply_result(&self, update: &TxResultUpdate) -> anyhow::Result<bool>;

    async fn find_by_hash(&self, tx_hash: &str) -> anyhow::Result<Option<TxRecord>>;
}
