use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use url::Url;

use super::{
    models::{BlockResponse, RpcResponse, TxResponse},
    Block, ChainNode, NodeProvider, TxResult,
};
use crate::{error::NodeError, settings::NodeSettings};

/// Tendermint RPC session over the URI interface.
#[derive(Debug, Clone)]
pub struct HttpNode {
    base: String,
    http: HttpClient,
}

impl HttpNode {
    pub fn new(settings: &NodeSettings) -> Result<Self, NodeError> {
        Url::parse(&settings.url)?;
        let http = HttpClient::builder()
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self {
            base: settings.url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, String)],
    ) -> Result<T, NodeError> {
        let url = Url::parse(&format!("{}/{}", self.base, method))?;
        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // tendermint reports rpc errors with a non-2xx status and a json body
        let parsed = serde_json::from_str::<RpcResponse<T>>(&body);
        match parsed {
            Ok(RpcResponse {
                error: Some(error), ..
            }) => Err(error.into()),
            Ok(RpcResponse {
                result: Some(result),
                ..
            }) if status.is_success() => Ok(result),
            _ if !status.is_success() => Err(NodeError::Status {
                status: status.as_u16(),
                body,
            }),
            Ok(_) => Err(NodeError::MissingResult),
            Err(err) => {
                tracing::error!(method, err = ?err, "failed to parse node response");
                Err(NodeError::InvalidPayload(err.to_string()))
            }
        }
    }
}

#[async_trait]
impl ChainNode for HttpNode {
    async fn block(&self, height: i64) -> Result<Block, NodeError> {
        let response: BlockResponse = self
            .call("block", &[("height", height.to_string())])
            .await?;
        response.try_into()
    }

    async fn tx_result(&self, hash: &[u8]) -> Result<TxResult, NodeError> {
        let response: TxResponse = self
            .call("tx", &[("hash", format!("0x{}", hex::encode_upper(hash)))])
            .await?;
        response.try_into()
    }
}

#[derive(Debug, Clone)]
pub struct HttpNodeProvider {
    settings: NodeSettings,
}

impl HttpNodeProvider {
    pub fn new(settings: NodeSettings) -> Self {
        Self { settings }
    }
}

impl NodeProvider for HttpNodeProvider {
    fn connect(&self) -> Result<Box<dyn ChainNode>, NodeError> {
        Ok(Box::new(HttpNode::new(&self.settings)?))
    }
}
