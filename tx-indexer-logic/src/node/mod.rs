use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::NodeError;

mod http_client;
mod models;

pub use http_client::{HttpNode, HttpNodeProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub height: i64,
    pub time: DateTime<Utc>,
    /// Raw transaction bytes in block order.
    pub txs: Vec<Vec<u8>>,
}

/// Key/value pair emitted by transaction execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxResult {
    pub code: u32,
    pub log: String,
    pub gas_wanted: i64,
    pub gas_used: i64,
    pub attributes: Vec<Attribute>,
}

/// A session with the chain node.
#[async_trait]
pub trait ChainNode: Send + Sync {
    async fn block(&self, height: i64) -> Result<Block, NodeError>;

    /// Execution result of the transaction with the given raw hash.
    async fn tx_result(&self, hash: &[u8]) -> Result<TxResult, NodeError>;
}

/// Hands out independent [`ChainNode`] sessions. Each call must return a
/// session that shares no connection state with previously returned ones.
pub trait NodeProvider: Send + Sync {
    fn connect(&self) -> Result<Box<dyn ChainNode>, NodeError>;
}
