use serde::{Deserialize, Serialize};

use super::{ClassifiedMsg, InnerMsg, MsgContext, MsgRegistry};
use crate::types::TxType;

pub(super) fn register(registry: &mut MsgRegistry) {
    registry
        .register::<MsgIssueToken>()
        .register::<MsgEditToken>()
        .register::<MsgMintToken>()
        .register::<MsgTransferTokenOwner>()
        .register::<MsgCreateGateway>()
        .register::<MsgEditGateway>()
        .register::<MsgTransferGatewayOwner>();
}

#[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
pub struct MsgIssueToken {
    #[prost(string, tag = "1")]
    pub family: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub source: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub gateway: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub symbol: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub canonical_symbol: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub name: ::prost::alloc::string::String,
    #[prost(uint32, tag = "7")]
    pub decimal: u32,
    #[prost(string, tag = "8")]
    pub min_unit_alias: ::prost::alloc::string::String,
    #[prost(uint64, tag = "9")]
    pub initial_supply: u64,
    #[prost(uint64, tag = "10")]
    pub max_supply: u64,
    #[prost(bool, tag = "11")]
    pub mintable: bool,
    #[prost(string, tag = "12")]
    pub owner: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
pub struct MsgEditToken {
    #[prost(string, tag = "1")]
    pub token_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub owner: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub canonical_symbol: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub min_unit_alias: ::prost::alloc::string::String,
    #[prost(uint64, tag = "5")]
    pub max_supply: u64,
    /// `"true"`, `"false"` or empty when unchanged.
    #[prost(string, tag = "6")]
    pub mintable: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
pub struct MsgMintToken {
    #[prost(string, tag = "1")]
    pub token_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub owner: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub to: ::prost::alloc::string::String,
    #[prost(uint64, tag = "4")]
    pub amount: u64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
pub struct MsgTransferTokenOwner {
    #[prost(string, tag = "1")]
    pub src_owner: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub dst_owner: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub token_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
pub struct MsgCreateGateway {
    #[prost(string, tag = "1")]
    pub owner: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub moniker: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub identity: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub details: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub website: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
pub struct MsgEditGateway {
    #[prost(string, tag = "1")]
    pub owner: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub moniker: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub identity: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub details: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub website: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
pub struct MsgTransferGatewayOwner {
    #[prost(string, tag = "1")]
    pub owner: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub moniker: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub to: ::prost::alloc::string::String,
}

// Asset messages carry no coins, so the wire structs double as stored payloads.

impl InnerMsg for MsgIssueToken {
    const TYPE_URL: &'static str = "/irishub.asset.MsgIssueToken";

    fn classify(mut self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        self.gateway = self.gateway.to_lowercase();
        self.symbol = self.symbol.to_lowercase();
        ClassifiedMsg::new(TxType::IssueToken, &self).from(self.owner)
    }
}

impl InnerMsg for MsgEditToken {
    const TYPE_URL: &'static str = "/irishub.asset.MsgEditToken";

    fn classify(mut self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        self.token_id = self.token_id.to_lowercase();
        ClassifiedMsg::new(TxType::EditToken, &self).from(self.owner)
    }
}

impl InnerMsg for MsgMintToken {
    const TYPE_URL: &'static str = "/irishub.asset.MsgMintToken";

    fn classify(mut self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        self.token_id = self.token_id.to_lowercase();
        ClassifiedMsg::new(TxType::MintToken, &self)
            .from(self.owner)
            .to(self.to)
    }
}

impl InnerMsg for MsgTransferTokenOwner {
    const TYPE_URL: &'static str = "/irishub.asset.MsgTransferTokenOwner";

    fn classify(mut self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        self.token_id = self.token_id.to_lowercase();
        ClassifiedMsg::new(TxType::TransferTokenOwner, &self)
            .from(self.src_owner)
            .to(self.dst_owner)
    }
}

impl InnerMsg for MsgCreateGateway {
    const TYPE_URL: &'static str = "/irishub.asset.MsgCreateGateway";

    fn classify(self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        ClassifiedMsg::new(TxType::CreateGateway, &self).from(self.owner)
    }
}

impl InnerMsg for MsgEditGateway {
    const TYPE_URL: &'static str = "/irishub.asset.MsgEditGateway";

    fn classify(self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        ClassifiedMsg::new(TxType::EditGateway, &self).from(self.owner)
    }
}

impl InnerMsg for MsgTransferGatewayOwner {
    const TYPE_URL: &'static str = "/irishub.asset.MsgTransferGatewayOwner";

    fn classify(self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        ClassifiedMsg::new(TxType::TransferGatewayOwner, &self)
            .from(self.owner)
            .to(self.to)
    }
}
