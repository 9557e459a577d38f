mod coin;
mod record;

pub(crate) use coin::parse_amount;
pub use coin::{coins_from_proto, parse_coins, ActualFee, Coin, Fee};
pub use record::{
    DocTxMsg, Signer, StakeCreateValidator, StakeEditValidator, TxRecord, TxType, ValDescription,
};
