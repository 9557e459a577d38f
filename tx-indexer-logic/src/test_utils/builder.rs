use chrono::{DateTime, TimeZone, Utc};
use prost::Message;

use crate::{
    codec::proto,
    msgs::{Input, InnerMsg, MsgSend, Output},
    node::{Attribute, TxResult},
};

/// Assembles raw, length prefixed transaction bytes.
#[derive(Debug, Clone, Default)]
pub struct TxBuilder {
    tx: proto::StdTx,
}

impl TxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn msg<M: InnerMsg>(self, msg: M) -> Self {
        self.raw_msg(M::TYPE_URL, msg.encode_to_vec())
    }

    pub fn raw_msg(mut self, type_url: &str, value: Vec<u8>) -> Self {
        self.tx.msgs.push(prost_types::Any {
            type_url: type_url.to_string(),
            value,
        });
        self
    }

    pub fn fee(mut self, denom: &str, amount: &str, gas: u64) -> Self {
        self.tx.fee = Some(proto::Fee {
            amount: vec![coin(denom, amount)],
            gas,
        });
        self
    }

    pub fn gas(mut self, gas: u64) -> Self {
        self.tx.fee = Some(proto::Fee {
            amount: vec![],
            gas,
        });
        self
    }

    pub fn signer(mut self, pub_key: Vec<u8>) -> Self {
        self.tx.signatures.push(proto::StdSignature {
            pub_key,
            signature: vec![7; 64],
        });
        self
    }

    pub fn memo(mut self, memo: &str) -> Self {
        self.tx.memo = memo.to_string();
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.tx.encode_length_delimited_to_vec()
    }
}

pub fn coin(denom: &str, amount: &str) -> proto::Coin {
    proto::Coin {
        denom: denom.to_string(),
        amount: amount.to_string(),
    }
}

pub fn send(from: &str, to: &str, coins: Vec<proto::Coin>) -> MsgSend {
    MsgSend {
        inputs: vec![Input {
            address: from.to_string(),
            coins: coins.clone(),
        }],
        outputs: vec![Output {
            address: to.to_string(),
            coins,
        }],
    }
}

/// Unique transfer transaction, distinguished by its memo.
pub fn transfer_tx(n: usize) -> Vec<u8> {
    TxBuilder::new()
        .msg(send("iaa1from", "iaa1to", vec![coin("iris", "1")]))
        .fee("iris", "10", 100)
        .memo(&format!("tx #{n}"))
        .build()
}

pub fn tx_result(code: u32, gas_wanted: i64, gas_used: i64) -> TxResult {
    TxResult {
        code,
        log: if code == 0 {
            String::new()
        } else {
            "insufficient funds".to_string()
        },
        gas_wanted,
        gas_used,
        attributes: vec![Attribute::new("action", "send")],
    }
}

pub fn block_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 5, 14, 12, 0, 0).unwrap()
}
