use std::collections::BTreeMap;
use tx_indexer_entity::sea_orm_active_enums::TxStatus;

use crate::node::{Attribute, ChainNode};

/// Tag holding the id of a freshly submitted governance proposal.
pub const TAG_PROPOSAL_ID: &str = "proposal-id";
/// Tag holding the coins paid out by a reward withdrawal.
pub const TAG_REWARD_TOTAL: &str = "withdraw-reward-total";

/// Execution outcome of a transaction as far as it could be determined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedResult {
    pub status: TxStatus,
    pub code: u32,
    pub log: String,
    pub gas_used: i64,
    pub gas_wanted: i64,
    pub attributes: Vec<Attribute>,
}

impl ResolvedResult {
    pub fn tags(&self) -> BTreeMap<String, String> {
        tags(&self.attributes)
    }

    pub fn find_tag(&self, key: &str) -> Option<&str> {
        find_tag(&self.attributes, key)
    }
}

/// Queries the execution result of a transaction.
///
/// Never fails: a node error is logged and reported as [`TxStatus::Unknown`]
/// with zero values, since the result may simply not be available yet.
pub async fn resolve(node: &dyn ChainNode, hash: &[u8], tx_hash: &str) -> ResolvedResult {
    match node.tx_result(hash).await {
        Ok(result) => ResolvedResult {
            status: if result.code != 0 {
                TxStatus::Fail
            } else {
                TxStatus::Success
            },
            code: result.code,
            log: result.log,
            gas_used: result.gas_used,
            gas_wanted: result.gas_wanted,
            attributes: result.attributes,
        },
        Err(err) => {
            tracing::error!(tx_hash, error = %err, "failed to query tx result");
            ResolvedResult::default()
        }
    }
}

/// Repeated keys keep the last value.
pub fn tags(attributes: &[Attribute]) -> BTreeMap<String, String> {
    attributes
        .iter()
        .map(|attr| (attr.key.clone(), attr.value.clone()))
        .collect()
}

/// Value of the first attribute with the given key.
pub fn find_tag<'a>(attributes: &'a [Attribute], key: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.as_str())
}
