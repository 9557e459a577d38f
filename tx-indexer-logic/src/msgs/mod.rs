//! Classification of inner messages.
//!
//! Every supported message type implements [`InnerMsg`] and is registered in
//! the [`MsgRegistry`] under its `type_url`. Supporting a new message type
//! means adding an implementation and registering it; the envelope decoder
//! and the record synthesis are not affected.

use serde::Serialize;
use std::collections::HashMap;

use crate::{
    codec::AddressCodec,
    node::Attribute,
    types::{Coin, DocTxMsg, StakeCreateValidator, StakeEditValidator, TxRecord, TxType},
};

mod asset;
mod bank;
mod distribution;
mod evidence;
mod gov;
mod nft;
mod stake;

pub use asset::{
    MsgCreateGateway, MsgEditGateway, MsgEditToken, MsgIssueToken, MsgMintToken,
    MsgTransferGatewayOwner, MsgTransferTokenOwner,
};
pub use bank::{Input, MsgBurn, MsgSend, Output};
pub use distribution::{
    MsgSetWithdrawAddress, MsgWithdrawDelegatorReward, MsgWithdrawDelegatorRewardsAll,
    MsgWithdrawValidatorRewardsAll,
};
pub use evidence::MsgSubmitEvidence;
pub use gov::{
    MsgDeposit, MsgSubmitProposal, MsgSubmitSoftwareUpgradeProposal, MsgSubmitTaxUsageProposal,
    MsgVote,
};
pub use nft::{MsgEditNft, MsgTransferNft};
pub use stake::{
    MsgBeginRedelegate, MsgBeginUnbonding, MsgCreateValidator, MsgDelegate, MsgEditValidator,
    MsgUnjail,
};

/// What a handler may look at besides the message itself.
pub struct MsgContext<'a> {
    pub tx_hash: &'a str,
    /// Attributes of the resolved execution result, empty when unresolved.
    pub attributes: &'a [Attribute],
    pub codec: &'a dyn AddressCodec,
}

/// A decodable inner message with its classification.
pub trait InnerMsg: prost::Message + Default + Sized {
    const TYPE_URL: &'static str;

    fn classify(self, ctx: &MsgContext<'_>) -> ClassifiedMsg;
}

/// Record mutation derived from a single inner message.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedMsg {
    pub tx_type: TxType,
    pub from: String,
    pub to: String,
    pub amount: Vec<Coin>,
    pub addrs: Vec<String>,
    pub payload: serde_json::Value,
    pub proposal_id: Option<u64>,
    pub stake_create_validator: Option<StakeCreateValidator>,
    pub stake_edit_validator: Option<StakeEditValidator>,
}

impl ClassifiedMsg {
    pub fn new(tx_type: TxType, payload: &impl Serialize) -> Self {
        let payload = serde_json::to_value(payload).unwrap_or_else(|err| {
            tracing::error!(%tx_type, error = %err, "failed to serialize message payload");
            serde_json::Value::Null
        });
        Self {
            tx_type,
            from: String::new(),
            to: String::new(),
            amount: Vec::new(),
            addrs: Vec::new(),
            payload,
            proposal_id: None,
            stake_create_validator: None,
            stake_edit_validator: None,
        }
    }

    /// Sets `from` and records it as a referenced address.
    pub fn from(mut self, address: impl Into<String>) -> Self {
        self.from = address.into();
        self.addrs.push(self.from.clone());
        self
    }

    /// Sets `to` and records it as a referenced address.
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to = address.into();
        self.addrs.push(self.to.clone());
        self
    }

    pub fn amount(mut self, amount: Vec<Coin>) -> Self {
        self.amount = amount;
        self
    }

    /// Records additional referenced addresses that are neither `from` nor `to`.
    pub fn addrs<I, S>(mut self, addrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.addrs.extend(addrs.into_iter().map(Into::into));
        self
    }

    pub fn proposal_id(mut self, proposal_id: u64) -> Self {
        self.proposal_id = Some(proposal_id);
        self
    }

    pub fn stake_create_validator(mut self, doc: StakeCreateValidator) -> Self {
        self.stake_create_validator = Some(doc);
        self
    }

    pub fn stake_edit_validator(mut self, doc: StakeEditValidator) -> Self {
        self.stake_edit_validator = Some(doc);
        self
    }

    /// Applies the message at position `index` of its transaction.
    ///
    /// All messages are appended to `messages`, `types` and `addrs`. Only the
    /// message at index 0 sets the summary fields.
    pub fn apply(self, index: usize, record: &mut TxRecord) {
        let tx_type = self.tx_type.to_string();
        record.messages.push(DocTxMsg {
            msg_type: tx_type.clone(),
            msg: self.payload,
        });
        record.types.push(tx_type.clone());
        record.addrs.extend(self.addrs);

        if index != 0 {
            return;
        }
        record.tx_type = tx_type;
        record.from = self.from;
        record.to = self.to;
        record.amount = self.amount;
        if let Some(proposal_id) = self.proposal_id {
            record.proposal_id = proposal_id;
        }
        if let Some(doc) = self.stake_create_validator {
            record.stake_create_validator = doc;
        }
        if let Some(doc) = self.stake_edit_validator {
            record.stake_edit_validator = doc;
        }
    }
}

type Handler = fn(&[u8], &MsgContext<'_>) -> Result<ClassifiedMsg, prost::DecodeError>;

fn handle<M: InnerMsg>(
    bytes: &[u8],
    ctx: &MsgContext<'_>,
) -> Result<ClassifiedMsg, prost::DecodeError> {
    Ok(M::decode(bytes)?.classify(ctx))
}

/// Lookup table from `type_url` to message handler.
#[derive(Clone)]
pub struct MsgRegistry {
    handlers: HashMap<&'static str, Handler>,
}

impl MsgRegistry {
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register<M: InnerMsg>(&mut self) -> &mut Self {
        self.handlers.insert(M::TYPE_URL, handle::<M>);
        self
    }

    pub fn contains(&self, type_url: &str) -> bool {
        self.handlers.contains_key(type_url)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Classifies one inner message. Unknown types and undecodable payloads
    /// are logged and yield `None`.
    pub fn classify(&self, msg: &prost_types::Any, ctx: &MsgContext<'_>) -> Option<ClassifiedMsg> {
        let Some(handler) = self.handlers.get(msg.type_url.as_str()) else {
            tracing::warn!(
                tx_hash = ctx.tx_hash,
                type_url = %msg.type_url,
                "unknown message type, skipping"
            );
            return None;
        };
        match handler(&msg.value, ctx) {
            Ok(classified) => Some(classified),
            Err(err) => {
                tracing::warn!(
                    tx_hash = ctx.tx_hash,
                    type_url = %msg.type_url,
                    error = %err,
                    "failed to decode message, skipping"
                );
                None
            }
        }
    }
}

impl Default for MsgRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        bank::register(&mut registry);
        stake::register(&mut registry);
        distribution::register(&mut registry);
        gov::register(&mut registry);
        asset::register(&mut registry);
        nft::register(&mut registry);
        evidence::register(&mut registry);
        registry
    }
}

impl std::fmt::Debug for MsgRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut type_urls: Vec<_> = self.handlers.keys().collect();
        type_urls.sort();
        f.debug_struct("MsgRegistry")
            .field("type_urls", &type_urls)
            .finish()
    }
}
