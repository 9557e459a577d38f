use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::{
    codec::{AddressCodec, Bech32Codec, Envelope},
    error::{AddressError, DecodeError},
    msgs::{MsgContext, MsgRegistry},
    node::{Block, ChainNode},
    resolver,
    settings::AddressSettings,
    types::{Fee, TxRecord},
};

/// Turns raw transaction bytes into [`TxRecord`]s.
#[derive(Clone)]
pub struct TxParser {
    registry: Arc<MsgRegistry>,
    codec: Arc<dyn AddressCodec>,
}

impl TxParser {
    pub fn new(settings: &AddressSettings) -> Result<Self, AddressError> {
        Ok(Self::with_parts(
            MsgRegistry::default(),
            Arc::new(Bech32Codec::new(settings)?),
        ))
    }

    pub fn with_parts(registry: MsgRegistry, codec: Arc<dyn AddressCodec>) -> Self {
        Self {
            registry: Arc::new(registry),
            codec,
        }
    }

    /// Decodes, resolves and classifies a single transaction.
    ///
    /// Returns `None` when there is nothing to persist: the envelope could not
    /// be decoded or carries no messages.
    pub async fn parse_tx(
        &self,
        node: &dyn ChainNode,
        raw: &[u8],
        height: i64,
        time: DateTime<Utc>,
    ) -> Option<TxRecord> {
        let envelope = match Envelope::decode(raw) {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::error!(height, error = %err, "failed to decode tx");
                return None;
            }
        };
        if envelope.tx.msgs.is_empty() {
            tracing::error!(
                height,
                tx_hash = %envelope.tx_hash,
                error = %DecodeError::EmptyMessages,
                "can't get msgs"
            );
            return None;
        }

        let signers = envelope.signers(self.codec.as_ref());
        let fee = Fee::from_proto(envelope.tx.fee.as_ref());
        let result = resolver::resolve(node, &envelope.hash, &envelope.tx_hash).await;

        let gas_wanted = if result.gas_wanted > 0 {
            result.gas_wanted
        } else {
            fee.gas
        };
        let gas_used = result.gas_used.min(gas_wanted);
        let (gas_price, actual_fee) = fee.gas_price_and_actual_fee(gas_wanted, gas_used);

        let mut record = TxRecord {
            tx_hash: envelope.tx_hash.clone(),
            height,
            time,
            fee,
            memo: envelope.tx.memo.clone(),
            signers,
            status: result.status,
            code: result.code,
            log: result.log.clone(),
            gas_used,
            gas_wanted,
            gas_price,
            actual_fee,
            tags: result.tags(),
            ..Default::default()
        };

        let ctx = MsgContext {
            tx_hash: &envelope.tx_hash,
            attributes: &result.attributes,
            codec: self.codec.as_ref(),
        };
        for (index, msg) in envelope.tx.msgs.iter().enumerate() {
            if let Some(classified) = self.registry.classify(msg, &ctx) {
                classified.apply(index, &mut record);
            }
        }

        tracing::debug!(
            height,
            tx_hash = %record.tx_hash,
            status = ?record.status,
            messages = record.messages.len(),
            "parsed tx"
        );
        Some(record)
    }

    /// Parses every transaction of the block, skipping the ones that can't be decoded.
    pub async fn parse_block(&self, node: &dyn ChainNode, block: &Block) -> Vec<TxRecord> {
        let mut records = Vec::with_capacity(block.txs.len());
        for raw in &block.txs {
            if let Some(record) = self.parse_tx(node, raw, block.height, block.time).await {
                records.push(record);
            }
        }
        records
    }
}

impl std::fmt::Debug for TxParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TxParser")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
