use serde::{Deserialize, Serialize};

use super::{ClassifiedMsg, InnerMsg, MsgContext, MsgRegistry};
use crate::{
    codec::proto,
    resolver::{find_tag, TAG_PROPOSAL_ID},
    types::{coins_from_proto, Coin, TxType},
};

pub(super) fn register(registry: &mut MsgRegistry) {
    registry
        .register::<MsgSubmitProposal>()
        .register::<MsgSubmitSoftwareUpgradeProposal>()
        .register::<MsgSubmitTaxUsageProposal>()
        .register::<MsgDeposit>()
        .register::<MsgVote>();
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Param {
    #[prost(string, tag = "1")]
    pub subspace: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub key: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub value: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgSubmitProposal {
    #[prost(string, tag = "1")]
    pub title: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub proposal_type: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub proposer: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "5")]
    pub initial_deposit: ::prost::alloc::vec::Vec<proto::Coin>,
    #[prost(message, repeated, tag = "6")]
    pub params: ::prost::alloc::vec::Vec<Param>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgSubmitSoftwareUpgradeProposal {
    #[prost(string, tag = "1")]
    pub title: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub proposer: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "4")]
    pub initial_deposit: ::prost::alloc::vec::Vec<proto::Coin>,
    #[prost(uint64, tag = "5")]
    pub version: u64,
    #[prost(string, tag = "6")]
    pub software: ::prost::alloc::string::String,
    #[prost(uint64, tag = "7")]
    pub switch_height: u64,
    #[prost(string, tag = "8")]
    pub threshold: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgSubmitTaxUsageProposal {
    #[prost(string, tag = "1")]
    pub title: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub proposer: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "4")]
    pub initial_deposit: ::prost::alloc::vec::Vec<proto::Coin>,
    #[prost(string, tag = "5")]
    pub usage: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub dest_address: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub percent: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgDeposit {
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
    #[prost(string, tag = "2")]
    pub depositor: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub amount: ::prost::alloc::vec::Vec<proto::Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgVote {
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
    #[prost(string, tag = "2")]
    pub voter: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub option: ::prost::alloc::string::String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocParam {
    pub subspace: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgSubmitProposal {
    pub title: String,
    pub description: String,
    pub proposal_type: String,
    pub proposer: String,
    pub initial_deposit: Vec<Coin>,
    pub params: Vec<DocParam>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgSubmitSoftwareUpgradeProposal {
    pub title: String,
    pub description: String,
    pub proposer: String,
    pub initial_deposit: Vec<Coin>,
    pub version: u64,
    pub software: String,
    pub switch_height: u64,
    pub threshold: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgSubmitTaxUsageProposal {
    pub title: String,
    pub description: String,
    pub proposer: String,
    pub initial_deposit: Vec<Coin>,
    pub usage: String,
    pub dest_address: String,
    pub percent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgDeposit {
    pub proposal_id: u64,
    pub depositor: String,
    pub amount: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgVote {
    pub proposal_id: u64,
    pub voter: String,
    pub option: String,
}

/// Id assigned to a new proposal, taken from the execution result. Zero when
/// the tag is missing or malformed.
fn submitted_proposal_id(ctx: &MsgContext<'_>) -> u64 {
    let Some(value) = find_tag(ctx.attributes, TAG_PROPOSAL_ID) else {
        return 0;
    };
    value.trim().parse().unwrap_or_else(|err| {
        tracing::warn!(
            tx_hash = ctx.tx_hash,
            value,
            error = %err,
            "can't parse proposal id from tags"
        );
        0
    })
}

fn submitted(
    tx_type: TxType,
    doc: &impl Serialize,
    proposer: &str,
    deposit: Vec<Coin>,
    ctx: &MsgContext<'_>,
) -> ClassifiedMsg {
    ClassifiedMsg::new(tx_type, doc)
        .from(proposer)
        .amount(deposit)
        .proposal_id(submitted_proposal_id(ctx))
}

impl InnerMsg for MsgSubmitProposal {
    const TYPE_URL: &'static str = "/irishub.gov.MsgSubmitProposal";

    fn classify(self, ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgSubmitProposal {
            title: self.title,
            description: self.description,
            proposal_type: self.proposal_type,
            proposer: self.proposer,
            initial_deposit: coins_from_proto(&self.initial_deposit),
            params: self
                .params
                .into_iter()
                .map(|param| DocParam {
                    subspace: param.subspace,
                    key: param.key,
                    value: param.value,
                })
                .collect(),
        };
        submitted(
            TxType::SubmitProposal,
            &doc,
            &doc.proposer,
            doc.initial_deposit.clone(),
            ctx,
        )
    }
}

impl InnerMsg for MsgSubmitSoftwareUpgradeProposal {
    const TYPE_URL: &'static str = "/irishub.gov.MsgSubmitSoftwareUpgradeProposal";

    fn classify(self, ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgSubmitSoftwareUpgradeProposal {
            title: self.title,
            description: self.description,
            proposer: self.proposer,
            initial_deposit: coins_from_proto(&self.initial_deposit),
            version: self.version,
            software: self.software,
            switch_height: self.switch_height,
            threshold: self.threshold,
        };
        submitted(
            TxType::SubmitProposal,
            &doc,
            &doc.proposer,
            doc.initial_deposit.clone(),
            ctx,
        )
    }
}

impl InnerMsg for MsgSubmitTaxUsageProposal {
    const TYPE_URL: &'static str = "/irishub.gov.MsgSubmitTaxUsageProposal";

    fn classify(self, ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgSubmitTaxUsageProposal {
            title: self.title,
            description: self.description,
            proposer: self.proposer,
            initial_deposit: coins_from_proto(&self.initial_deposit),
            usage: self.usage,
            dest_address: self.dest_address,
            percent: self.percent,
        };
        submitted(
            TxType::SubmitProposal,
            &doc,
            &doc.proposer,
            doc.initial_deposit.clone(),
            ctx,
        )
    }
}

impl InnerMsg for MsgDeposit {
    const TYPE_URL: &'static str = "/irishub.gov.MsgDeposit";

    fn classify(self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgDeposit {
            proposal_id: self.proposal_id,
            depositor: self.depositor,
            amount: coins_from_proto(&self.amount),
        };
        ClassifiedMsg::new(TxType::Deposit, &doc)
            .from(doc.depositor)
            .amount(doc.amount)
            .proposal_id(doc.proposal_id)
    }
}

impl InnerMsg for MsgVote {
    const TYPE_URL: &'static str = "/irishub.gov.MsgVote";

    fn classify(self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgVote {
            proposal_id: self.proposal_id,
            voter: self.voter,
            option: self.option,
        };
        ClassifiedMsg::new(TxType::Vote, &doc)
            .from(doc.voter)
            .proposal_id(doc.proposal_id)
    }
}
