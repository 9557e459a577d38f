use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::time;

#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IndexerSettings {
    #[serde(default = "default_reconcile_interval")]
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    pub reconcile_interval: time::Duration,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    #[serde(default)]
    pub node: NodeSettings,
    #[serde(default)]
    pub address: AddressSettings,
}

impl IndexerSettings {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("indexer.page_size must be positive");
        }
        if self.reconcile_interval.is_zero() {
            anyhow::bail!("indexer.reconcile_interval must be positive");
        }
        Ok(())
    }
}

fn default_reconcile_interval() -> time::Duration {
    time::Duration::from_secs(24 * 60 * 60)
}

fn default_page_size() -> u64 {
    20
}

impl Default for IndexerSettings {
    fn default() -> Self {
        Self {
            reconcile_interval: default_reconcile_interval(),
            page_size: default_page_size(),
            node: Default::default(),
            address: Default::default(),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NodeSettings {
    pub url: String,
    #[serde(default = "default_request_timeout")]
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    pub request_timeout: time::Duration,
}

fn default_request_timeout() -> time::Duration {
    time::Duration::from_secs(10)
}

impl Default for NodeSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:26657".to_string(),
            request_timeout: default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AddressSettings {
    pub account_prefix: String,
    pub validator_pubkey_prefix: String,
}

impl Default for AddressSettings {
    fn default() -> Self {
        Self {
            account_prefix: "iaa".to_string(),
            validator_pubkey_prefix: "fvp".to_string(),
        }
    }
}
