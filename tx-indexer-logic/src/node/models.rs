use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

use super::{Attribute, Block, TxResult};
use crate::error::NodeError;

#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct RpcErrorBody {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<String>,
}

impl From<RpcErrorBody> for NodeError {
    fn from(error: RpcErrorBody) -> Self {
        NodeError::Rpc {
            code: error.code,
            message: error.message,
            data: error.data,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BlockResponse {
    pub block: BlockBody,
}

#[derive(Debug, Deserialize)]
pub struct BlockBody {
    pub header: Header,
    pub data: BlockData,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct Header {
    #[serde_as(as = "DisplayFromStr")]
    pub height: i64,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct BlockData {
    #[serde(default)]
    pub txs: Option<Vec<String>>,
}

impl TryFrom<BlockResponse> for Block {
    type Error = NodeError;

    fn try_from(response: BlockResponse) -> Result<Self, Self::Error> {
        let txs = response
            .block
            .data
            .txs
            .unwrap_or_default()
            .iter()
            .map(|tx| decode_base64(tx))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Block {
            height: response.block.header.height,
            time: response.block.header.time,
            txs,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct TxResponse {
    pub tx_result: DeliverTx,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct DeliverTx {
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub log: String,
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default)]
    pub gas_wanted: i64,
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default)]
    pub gas_used: i64,
    #[serde(default)]
    pub tags: Option<Vec<KvPair>>,
}

/// Base64 encoded tag.
#[derive(Debug, Deserialize)]
pub struct KvPair {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl TryFrom<TxResponse> for TxResult {
    type Error = NodeError;

    fn try_from(response: TxResponse) -> Result<Self, Self::Error> {
        let deliver = response.tx_result;
        let attributes = deliver
            .tags
            .unwrap_or_default()
            .into_iter()
            .map(|tag| {
                let key = decode_utf8(&tag.key)?;
                let value = match tag.value {
                    Some(value) => decode_utf8(&value)?,
                    None => String::new(),
                };
                Ok(Attribute { key, value })
            })
            .collect::<Result<Vec<_>, NodeError>>()?;
        Ok(TxResult {
            code: deliver.code,
            log: deliver.log,
            gas_wanted: deliver.gas_wanted,
            gas_used: deliver.gas_used,
            attributes,
        })
    }
}

fn decode_base64(value: &str) -> Result<Vec<u8>, NodeError> {
    STANDARD
        .decode(value)
        .map_err(|err| NodeError::InvalidPayload(format!("invalid base64 '{value}': {err}")))
}

/// Tags are free-form bytes; invalid utf-8 is replaced rather than rejected.
fn decode_utf8(value: &str) -> Result<String, NodeError> {
    let bytes = decode_base64(value)?;
    match String::from_utf8(bytes) {
        Ok(decoded) => Ok(decoded),
        Err(err) => {
            tracing::warn!(value, error = %err, "tag is not valid utf-8, replacing invalid bytes");
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}
