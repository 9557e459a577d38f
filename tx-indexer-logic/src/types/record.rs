use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::Display;
use tx_indexer_entity::sea_orm_active_enums::TxStatus;

use super::{ActualFee, Coin, Fee};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TxType {
    Transfer,
    Burn,
    CreateValidator,
    EditValidator,
    Delegate,
    BeginUnbonding,
    BeginRedelegate,
    Unjail,
    SetWithdrawAddress,
    WithdrawDelegatorReward,
    WithdrawDelegatorRewardsAll,
    WithdrawValidatorRewardsAll,
    SubmitProposal,
    Deposit,
    Vote,
    IssueToken,
    EditToken,
    MintToken,
    TransferTokenOwner,
    CreateGateway,
    EditGateway,
    TransferGatewayOwner,
    #[strum(serialize = "EditNFT")]
    EditNft,
    #[strum(serialize = "TransferNFT")]
    TransferNft,
    SubmitEvidence,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    pub addr_hex: String,
    pub addr_bech32: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValDescription {
    pub moniker: String,
    pub identity: String,
    pub website: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeCreateValidator {
    pub pub_key: String,
    pub description: ValDescription,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeEditValidator {
    pub commission_rate: String,
    pub description: ValDescription,
}

/// One entry of the record's `messages` list. The payload shape depends on `type`
/// and is only checked when read back through [`DocTxMsg::payload`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocTxMsg {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub msg: serde_json::Value,
}

impl DocTxMsg {
    pub fn payload<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(&self.msg)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxRecord {
    pub tx_hash: String,
    pub height: i64,
    pub time: DateTime<Utc>,

    pub fee: Fee,
    pub memo: String,
    pub signers: Vec<Signer>,

    pub status: TxStatus,
    pub code: u32,
    pub log: String,
    pub gas_used: i64,
    pub gas_wanted: i64,
    pub gas_price: f64,
    pub actual_fee: ActualFee,
    pub tags: BTreeMap<String, String>,
    pub messages: Vec<DocTxMsg>,

    #[serde(rename = "type")]
    pub tx_type: String,
    pub from: String,
    pub to: String,
    pub amount: Vec<Coin>,

    pub types: Vec<String>,
    pub addrs: Vec<String>,

    pub proposal_id: u64,
    pub stake_create_validator: StakeCreateValidator,
    pub stake_edit_validator: StakeEditValidator,
}
