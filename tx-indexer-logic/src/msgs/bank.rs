use serde::{Deserialize, Serialize};

use super::{ClassifiedMsg, InnerMsg, MsgContext, MsgRegistry};
use crate::{
    codec::proto,
    types::{coins_from_proto, Coin, TxType},
};

pub(super) fn register(registry: &mut MsgRegistry) {
    registry.register::<MsgSend>().register::<MsgBurn>();
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Input {
    #[prost(string, tag = "1")]
    pub address: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub coins: ::prost::alloc::vec::Vec<proto::Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Output {
    #[prost(string, tag = "1")]
    pub address: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub coins: ::prost::alloc::vec::Vec<proto::Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgSend {
    #[prost(message, repeated, tag = "1")]
    pub inputs: ::prost::alloc::vec::Vec<Input>,
    #[prost(message, repeated, tag = "2")]
    pub outputs: ::prost::alloc::vec::Vec<Output>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgBurn {
    #[prost(string, tag = "1")]
    pub owner: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub coins: ::prost::alloc::vec::Vec<proto::Coin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocAccountCoins {
    pub address: String,
    pub coins: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgSend {
    pub inputs: Vec<DocAccountCoins>,
    pub outputs: Vec<DocAccountCoins>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgBurn {
    pub owner: String,
    pub coins: Vec<Coin>,
}

impl InnerMsg for MsgSend {
    const TYPE_URL: &'static str = "/irishub.bank.MsgSend";

    fn classify(self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgSend {
            inputs: self
                .inputs
                .iter()
                .map(|input| DocAccountCoins {
                    address: input.address.clone(),
                    coins: coins_from_proto(&input.coins),
                })
                .collect(),
            outputs: self
                .outputs
                .iter()
                .map(|output| DocAccountCoins {
                    address: output.address.clone(),
                    coins: coins_from_proto(&output.coins),
                })
                .collect(),
        };

        let mut classified = ClassifiedMsg::new(TxType::Transfer, &doc);
        classified.from = doc
            .inputs
            .first()
            .map(|input| input.address.clone())
            .unwrap_or_default();
        classified.to = doc
            .outputs
            .first()
            .map(|output| output.address.clone())
            .unwrap_or_default();
        classified.amount = doc
            .inputs
            .first()
            .map(|input| input.coins.clone())
            .unwrap_or_default();
        classified.addrs(
            doc.inputs
                .into_iter()
                .map(|input| input.address)
                .chain(doc.outputs.into_iter().map(|output| output.address)),
        )
    }
}

impl InnerMsg for MsgBurn {
    const TYPE_URL: &'static str = "/irishub.bank.MsgBurn";

    fn classify(self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgBurn {
            owner: self.owner,
            coins: coins_from_proto(&self.coins),
        };
        ClassifiedMsg::new(TxType::Burn, &doc)
            .from(doc.owner)
            .amount(doc.coins)
    }
}
