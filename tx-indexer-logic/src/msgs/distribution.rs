use serde::{Deserialize, Serialize};

use super::{ClassifiedMsg, InnerMsg, MsgContext, MsgRegistry};
use crate::{
    resolver::{find_tag, TAG_REWARD_TOTAL},
    types::{parse_coins, Coin, TxType},
};

pub(super) fn register(registry: &mut MsgRegistry) {
    registry
        .register::<MsgSetWithdrawAddress>()
        .register::<MsgWithdrawDelegatorReward>()
        .register::<MsgWithdrawDelegatorRewardsAll>()
        .register::<MsgWithdrawValidatorRewardsAll>();
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgSetWithdrawAddress {
    #[prost(string, tag = "1")]
    pub delegator_address: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub withdraw_address: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgWithdrawDelegatorReward {
    #[prost(string, tag = "1")]
    pub delegator_address: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub validator_address: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgWithdrawDelegatorRewardsAll {
    #[prost(string, tag = "1")]
    pub delegator_address: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgWithdrawValidatorRewardsAll {
    #[prost(string, tag = "1")]
    pub validator_address: ::prost::alloc::string::String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgSetWithdrawAddress {
    pub delegator_address: String,
    pub withdraw_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgWithdrawDelegatorReward {
    pub delegator_address: String,
    pub validator_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgWithdrawDelegatorRewardsAll {
    pub delegator_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgWithdrawValidatorRewardsAll {
    pub validator_address: String,
}

/// Paid out rewards as reported by the execution result. Empty while the
/// result is unknown.
fn reward(ctx: &MsgContext<'_>) -> Vec<Coin> {
    find_tag(ctx.attributes, TAG_REWARD_TOTAL)
        .map(parse_coins)
        .unwrap_or_default()
}

impl InnerMsg for MsgSetWithdrawAddress {
    const TYPE_URL: &'static str = "/irishub.distr.MsgSetWithdrawAddress";

    fn classify(self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgSetWithdrawAddress {
            delegator_address: self.delegator_address,
            withdraw_address: self.withdraw_address,
        };
        ClassifiedMsg::new(TxType::SetWithdrawAddress, &doc)
            .from(doc.delegator_address)
            .to(doc.withdraw_address)
    }
}

impl InnerMsg for MsgWithdrawDelegatorReward {
    const TYPE_URL: &'static str = "/irishub.distr.MsgWithdrawDelegatorReward";

    fn classify(self, ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgWithdrawDelegatorReward {
            delegator_address: self.delegator_address,
            validator_address: self.validator_address,
        };
        ClassifiedMsg::new(TxType::WithdrawDelegatorReward, &doc)
            .from(doc.delegator_address)
            .to(doc.validator_address)
            .amount(reward(ctx))
    }
}

impl InnerMsg for MsgWithdrawDelegatorRewardsAll {
    const TYPE_URL: &'static str = "/irishub.distr.MsgWithdrawDelegatorRewardsAll";

    fn classify(self, ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgWithdrawDelegatorRewardsAll {
            delegator_address: self.delegator_address,
        };
        ClassifiedMsg::new(TxType::WithdrawDelegatorRewardsAll, &doc)
            .from(doc.delegator_address)
            .amount(reward(ctx))
    }
}

impl InnerMsg for MsgWithdrawValidatorRewardsAll {
    const TYPE_URL: &'static str = "/irishub.distr.MsgWithdrawValidatorRewardsAll";

    fn classify(self, ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let doc = DocMsgWithdrawValidatorRewardsAll {
            validator_address: self.validator_address,
        };
        ClassifiedMsg::new(TxType::WithdrawValidatorRewardsAll, &doc)
            .from(doc.validator_address)
            .amount(reward(ctx))
    }
}
