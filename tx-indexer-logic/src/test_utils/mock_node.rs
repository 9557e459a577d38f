use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    codec,
    error::NodeError,
    node::{Block, ChainNode, NodeProvider, TxResult},
};

#[derive(Default)]
struct NodeState {
    blocks: HashMap<i64, Block>,
    results: HashMap<String, TxResult>,
    failing_block_sessions: HashSet<usize>,
    blocks_fail: bool,
    results_fail: bool,
    panic_on_block: Option<i64>,
    connections: usize,
    block_calls: usize,
    result_calls: usize,
}

/// In-memory chain node. Every [`NodeProvider::connect`] call opens a new
/// numbered session; sessions share the canned blocks and results.
#[derive(Clone, Default)]
pub struct MockNodeProvider {
    state: Arc<RwLock<NodeState>>,
}

impl MockNodeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_block(&self, height: i64, time: DateTime<Utc>, txs: Vec<Vec<u8>>) {
        self.state
            .write()
            .blocks
            .insert(height, Block { height, time, txs });
    }

    /// Registers the execution result of the given raw transaction.
    pub fn set_result(&self, raw: &[u8], result: TxResult) {
        let hash = hex::encode_upper(codec::tx_hash(raw));
        self.state.write().results.insert(hash, result);
    }

    /// Block queries made through the session with this number fail.
    pub fn fail_blocks_on_session(&self, session: usize) {
        self.state.write().failing_block_sessions.insert(session);
    }

    pub fn set_blocks_fail(&self, fail: bool) {
        self.state.write().blocks_fail = fail;
    }

    pub fn set_results_fail(&self, fail: bool) {
        self.state.write().results_fail = fail;
    }

    pub fn panic_on_block(&self, height: i64) {
        self.state.write().panic_on_block = Some(height);
    }

    pub fn connections(&self) -> usize {
        self.state.read().connections
    }

    pub fn block_calls(&self) -> usize {
        self.state.read().block_calls
    }

    pub fn result_calls(&self) -> usize {
        self.state.read().result_calls
    }

    /// A session that is not counted as a connection.
    pub fn session(&self) -> MockChainNode {
        MockChainNode {
            session: usize::MAX,
            state: self.state.clone(),
        }
    }
}

impl NodeProvider for MockNodeProvider {
    fn connect(&self) -> Result<Box<dyn ChainNode>, NodeError> {
        let mut state = self.state.write();
        let session = state.connections;
        state.connections += 1;
        Ok(Box::new(MockChainNode {
            session,
            state: self.state.clone(),
        }))
    }
}

pub struct MockChainNode {
    session: usize,
    state: Arc<RwLock<NodeState>>,
}

#[async_trait]
impl ChainNode for MockChainNode {
    async fn block(&self, height: i64) -> Result<Block, NodeError> {
        let mut state = self.state.write();
        state.block_calls += 1;
        if state.panic_on_block == Some(height) {
            drop(state);
            panic!("mock node exploded at height {height}");
        }
        if state.blocks_fail || state.failing_block_sessions.contains(&self.session) {
            return Err(NodeError::Status {
                status: 503,
                body: "mock node unavailable".to_string(),
            });
        }
        state
            .blocks
            .get(&height)
            .cloned()
            .ok_or_else(|| NodeError::Rpc {
                code: -32603,
                message: format!("height {height} is not available"),
                data: None,
            })
    }

    async fn tx_result(&self, hash: &[u8]) -> Result<TxResult, NodeError> {
        let mut state = self.state.write();
        state.result_calls += 1;
        if state.results_fail {
            return Err(NodeError::Status {
                status: 503,
                body: "mock node unavailable".to_string(),
            });
        }
        let hash = hex::encode_upper(hash);
        state
            .results
            .get(&hash)
            .cloned()
            .ok_or_else(|| NodeError::Rpc {
                code: -32603,
                message: format!("tx ({hash}) not found"),
                data: None,
            })
    }
}
