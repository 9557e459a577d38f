use serde::{Deserialize, Serialize};

use super::{ClassifiedMsg, InnerMsg, MsgContext, MsgRegistry};
use crate::{
    codec::proto,
    types::{
        parse_amount, Coin, StakeCreateValidator, StakeEditValidator, TxType, ValDescription,
    },
};

pub(super) fn register(registry: &mut MsgRegistry) {
    registry
        .register::<MsgCreateValidator>()
        .register::<MsgEditValidator>()
        .register::<MsgDelegate>()
        .register::<MsgBeginUnbonding>()
        .register::<MsgBeginRedelegate>()
        .register::<MsgUnjail>();
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgCreateValidator {
    #[prost(message, optional, tag = "1")]
    pub description: ::core::option::Option<proto::Description>,
    #[prost(string, tag = "2")]
    pub commission_rate: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub delegator_address: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub validator_address: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "5")]
    pub pub_key: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "6")]
    pub delegation: ::core::option::Option<proto::Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgEditValidator {
    #[prost(message, optional, tag = "1")]
    pub description: ::core::option::Option<proto::Description>,
    #[prost(string, tag = "2")]
    pub validator_address: ::prost::alloc::string::String,
    #[prost(string, optional, tag = "3")]
    pub commission_rate: ::core::option::Option<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgDelegate {
    #[prost(string, tag = "1")]
    pub delegator_address: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub validator_address: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub delegation: ::core::option::Option<proto::Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgBeginUnbonding {
    #[prost(string, tag = "1")]
    pub delegator_address: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub validator_address: ::prost::alloc::string::String,
    /// Decimal string.
    #[prost(string, tag = "3")]
    pub shares_amount: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgBeginRedelegate {
    #[prost(string, tag = "1")]
    pub delegator_address: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub validator_src_address: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub validator_dst_address: ::prost::alloc::string::String,
    /// Decimal string.
    #[prost(string, tag = "4")]
    pub shares_amount: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgUnjail {
    #[prost(string, tag = "1")]
    pub validator_address: ::prost::alloc::string::String,
}

impl From<proto::Description> for ValDescription {
    fn from(description: proto::Description) -> Self {
        Self {
            moniker: description.moniker,
            identity: description.identity,
            website: description.website,
            details: description.details,
        }
    }
}

fn description(description: Option<proto::Description>) -> ValDescription {
    description.map(ValDescription::from).unwrap_or_default()
}

fn delegation(coin: Option<&proto::Coin>) -> Vec<Coin> {
    coin.map(Coin::from_proto).into_iter().collect()
}

/// Shares are reported without a denomination.
fn shares(amount: f64) -> Vec<Coin> {
    vec![Coin {
        denom: String::new(),
        amount,
    }]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgCreateValidator {
    pub description: ValDescription,
    pub commission_rate: String,
    pub delegator_address: String,
    pub validator_address: String,
    pub pub_key: String,
    pub delegation: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgEditValidator {
    pub description: ValDescription,
    pub validator_address: String,
    pub commission_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgDelegate {
    pub delegator_address: String,
    pub validator_address: String,
    pub delegation: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgBeginUnbonding {
    pub delegator_address: String,
    pub validator_address: String,
    pub shares_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgBeginRedelegate {
    pub delegator_address: String,
    pub validator_src_address: String,
    pub validator_dst_address: String,
    pub shares_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgUnjail {
    pub validator_address: String,
}

impl InnerMsg for MsgCreateValidator {
    const TYPE_URL: &'static str = "/irishub.stake.MsgCreateValidator";

    fn classify(self, ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let pub_key = ctx.codec.validator_pubkey(&self.pub_key).unwrap_or_else(|err| {
            tracing::warn!(
                tx_hash = ctx.tx_hash,
                error = %err,
                "failed to convert validator pubkey to bech32"
            );
            String::new()
        });
        let doc = DocMsgCreateValidator {
            description: description(self.description),
            commission_rate: self.commission_rate,
            delegator_address: self.delegator_address,
            validator_address: self.validator_address,
            pub_key,
            delegation: delegation(self.delegation.as_ref()),
        };
        let stake_doc = StakeCreateValidator {
            pub_key: doc.pub_key.clone(),
            description: doc.description.clone(),
        };
        ClassifiedMsg::new(TxType::CreateValidator, &doc)
            .from(doc.delegator_address)
            .to(doc.validator_address)
            .amount(doc.delegation)
            .stake_create_validator(stake_doc)
    }
}

impl InnerMsg for MsgEditValidator {
    const TYPE_URL: &'static str = "/irishub.stake.MsgEditValidator";

    fn classify(self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgEditValidator {
            description: description(self.description),
            validator_address: self.validator_address,
            commission_rate: self.commission_rate.unwrap_or_default(),
        };
        let stake_doc = StakeEditValidator {
            commission_rate: doc.commission_rate.clone(),
            description: doc.description.clone(),
        };
        ClassifiedMsg::new(TxType::EditValidator, &doc)
            .from(doc.validator_address)
            .stake_edit_validator(stake_doc)
    }
}

impl InnerMsg for MsgDelegate {
    const TYPE_URL: &'static str = "/irishub.stake.MsgDelegate";

    fn classify(self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgDelegate {
            delegator_address: self.delegator_address,
            validator_address: self.validator_address,
            delegation: delegation(self.delegation.as_ref()),
        };
        ClassifiedMsg::new(TxType::Delegate, &doc)
            .from(doc.delegator_address)
            .to(doc.validator_address)
            .amount(doc.delegation)
    }
}

impl InnerMsg for MsgBeginUnbonding {
    const TYPE_URL: &'static str = "/irishub.stake.MsgBeginUnbonding";

    fn classify(self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgBeginUnbonding {
            delegator_address: self.delegator_address,
            validator_address: self.validator_address,
            shares_amount: parse_amount(&self.shares_amount),
        };
        ClassifiedMsg::new(TxType::BeginUnbonding, &doc)
            .from(doc.delegator_address)
            .to(doc.validator_address)
            .amount(shares(doc.shares_amount))
    }
}

impl InnerMsg for MsgBeginRedelegate {
    const TYPE_URL: &'static str = "/irishub.stake.MsgBeginRedelegate";

    fn classify(self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgBeginRedelegate {
            delegator_address: self.delegator_address,
            validator_src_address: self.validator_src_address,
            validator_dst_address: self.validator_dst_address,
            shares_amount: parse_amount(&self.shares_amount),
        };
        ClassifiedMsg::new(TxType::BeginRedelegate, &doc)
            .from(doc.delegator_address)
            .addrs([doc.validator_src_address])
            .to(doc.validator_dst_address)
            .amount(shares(doc.shares_amount))
    }
}

impl InnerMsg for MsgUnjail {
    const TYPE_URL: &'static str = "/irishub.slashing.MsgUnjail";

    fn classify(self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgUnjail {
            validator_address: self.validator_address,
        };
        ClassifiedMsg::new(TxType::Unjail, &doc).from(doc.validator_address)
    }
}
