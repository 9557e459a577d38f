mod address;
mod envelope;
pub mod proto;

pub use address::{AddressCodec, Bech32Codec};
pub use envelope::{decode_envelope, signer_address, tx_hash, Envelope};
