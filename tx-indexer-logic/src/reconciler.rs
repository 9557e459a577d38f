use futures::FutureExt;
use std::{any::Any, collections::HashSet, panic::AssertUnwindSafe, sync::Arc};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::{
    codec,
    error::{NodeError, ReconcileError},
    node::{Block, ChainNode, NodeProvider},
    parser::TxParser,
    repository::{TxRepository, TxResultUpdate},
    settings::IndexerSettings,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub pages: u64,
    pub records: u64,
    pub updated: u64,
}

#[derive(Debug, Clone, Copy, Default)]
struct PageSummary {
    records: u64,
    updated: u64,
}

/// Periodically re-resolves transactions stored with unknown status.
pub struct Reconciler {
    parser: TxParser,
    nodes: Arc<dyn NodeProvider>,
    repo: Arc<dyn TxRepository>,
    settings: IndexerSettings,
}

impl Reconciler {
    pub fn new(
        parser: TxParser,
        nodes: Arc<dyn NodeProvider>,
        repo: Arc<dyn TxRepository>,
        settings: IndexerSettings,
    ) -> Self {
        Self {
            parser,
            nodes,
            repo,
            settings,
        }
    }

    /// Scans immediately and then once per `reconcile_interval` until `shutdown`
    /// is cancelled. A running scan is never interrupted.
    #[instrument(name = "reconciler", skip_all, level = "info")]
    pub async fn run(&self, shutdown: CancellationToken) {
        tracing::info!(
            interval = ?self.settings.reconcile_interval,
            page_size = self.settings.page_size,
            "starting reconciler"
        );
        let mut interval = tokio::time::interval(self.settings.reconcile_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    tracing::info!("reconciler stopped");
                    return;
                }
                _ = interval.tick() => {
                    match self.scan().await {
                        Ok(summary) => tracing::info!(?summary, "finished reconciling unknown txs"),
                        Err(err) => tracing::error!(error = %err, "reconcile scan aborted, waiting for next tick"),
                    }
                }
            }
        }
    }

    /// Pages through unknown transactions until a page comes back short.
    #[instrument(name = "reconcile_scan", skip_all, level = "info")]
    pub async fn scan(&self) -> Result<ScanSummary, ReconcileError> {
        let limit = self.settings.page_size;
        let mut summary = ScanSummary::default();
        let mut skip = 0;

        loop {
            let page = AssertUnwindSafe(self.process_page(skip, limit))
                .catch_unwind()
                .await
                .map_err(|panic| ReconcileError::Panic(panic_message(panic.as_ref())))
                .and_then(|result| result)
                .inspect_err(|err| {
                    tracing::error!(skip, limit, error = %err, "failed to process page")
                })?;

            summary.pages += 1;
            summary.records += page.records;
            summary.updated += page.updated;

            if page.records < limit {
                tracing::info!(total = page.records, "finished scanning unknown txs");
                return Ok(summary);
            }
            skip += page.records;
            tracing::info!(skip, "continue scanning unknown txs");
        }
    }

    #[instrument(name = "reconcile_page", skip(self), level = "info")]
    async fn process_page(&self, skip: u64, limit: u64) -> Result<PageSummary, ReconcileError> {
        let records = self.repo.find_unknown(skip, limit).await?;
        let mut summary = PageSummary {
            records: records.len() as u64,
            updated: 0,
        };
        if records.is_empty() {
            return Ok(summary);
        }

        let node = self.nodes.connect()?;
        let pending: HashSet<&str> = records.iter().map(|r| r.tx_hash.as_str()).collect();
        let mut seen = HashSet::new();
        let heights = records
            .iter()
            .map(|r| r.height)
            .filter(|height| seen.insert(*height));

        for height in heights {
            let block = match self.fetch_block(node.as_ref(), height).await {
                Ok(block) => block,
                Err(err) => {
                    tracing::error!(height, error = %err, "failed to fetch block, skipping");
                    continue;
                }
            };
            summary.updated += self.reconcile_block(node.as_ref(), &block, &pending).await;
        }
        Ok(summary)
    }

    /// Re-parses the pending transactions of the block and stores the resolved
    /// ones. Returns the number of updated records.
    async fn reconcile_block(
        &self,
        node: &dyn ChainNode,
        block: &Block,
        pending: &HashSet<&str>,
    ) -> u64 {
        let mut updated = 0;
        for raw in &block.txs {
            let tx_hash = hex::encode_upper(codec::tx_hash(raw));
            if !pending.contains(tx_hash.as_str()) {
                continue;
            }
            let Some(record) = self
                .parser
                .parse_tx(node, raw, block.height, block.time)
                .await
            else {
                continue;
            };
            if !record.status.is_resolved() {
                tracing::debug!(
                    tx_hash = %tx_hash,
                    height = block.height,
                    "tx result is still unknown"
                );
                continue;
            }
            match self.repo.apply_result(&TxResultUpdate::from(&record)).await {
                Ok(true) => {
                    tracing::debug!(
                        tx_hash = %tx_hash,
                        status = ?record.status,
                        "tx result updated"
                    );
                    updated += 1;
                }
                Ok(false) => tracing::debug!(tx_hash = %tx_hash, "tx is already resolved"),
                Err(err) => {
                    tracing::warn!(tx_hash = %tx_hash, error = %err, "failed to update tx result")
                }
            }
        }
        updated
    }

    /// Fetches the block, retrying once through a fresh node session.
    async fn fetch_block(&self, node: &dyn ChainNode, height: i64) -> Result<Block, NodeError> {
        match node.block(height).await {
            Ok(block) => Ok(block),
            Err(err) => {
                tracing::warn!(
                    height,
                    error = %err,
                    "failed to fetch block, retrying with a new session"
                );
                let retry = self.nodes.connect()?;
                retry.block(height).await
            }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
