use serde::{Deserialize, Serialize};

use super::{ClassifiedMsg, InnerMsg, MsgContext, MsgRegistry};
use crate::types::TxType;

pub(super) fn register(registry: &mut MsgRegistry) {
    registry
        .register::<MsgEditNft>()
        .register::<MsgTransferNft>();
}

#[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
pub struct MsgEditNft {
    #[prost(string, tag = "1")]
    pub sender: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub denom: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub uri: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub data: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
pub struct MsgTransferNft {
    #[prost(string, tag = "1")]
    pub sender: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub recipient: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub uri: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub denom: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub data: ::prost::alloc::string::String,
}

impl InnerMsg for MsgEditNft {
    const TYPE_URL: &'static str = "/irishub.nft.MsgEditNFT";

    fn classify(mut self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        self.id = self.id.to_lowercase();
        self.denom = self.denom.to_lowercase();
        ClassifiedMsg::new(TxType::EditNft, &self).from(self.sender)
    }
}

impl InnerMsg for MsgTransferNft {
    const TYPE_URL: &'static str = "/irishub.nft.MsgTransferNFT";

    fn classify(mut self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        self.id = self.id.to_lowercase();
        self.denom = self.denom.to_lowercase();
        ClassifiedMsg::new(TxType::TransferNft, &self)
            .from(self.sender)
            .to(self.recipient)
    }
}
