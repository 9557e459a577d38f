use prost::Message;
use sha2::{Digest, Sha256};

use super::{proto, AddressCodec};
use crate::{error::DecodeError, types::Signer};

/// Decoded transaction envelope together with its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Raw sha256 of the transaction bytes, used to query the execution result.
    pub hash: Vec<u8>,
    /// Uppercase hex of `hash`.
    pub tx_hash: String,
    pub tx: proto::StdTx,
}

impl Envelope {
    pub fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        let tx = decode_envelope(raw)?;
        let hash = tx_hash(raw);
        Ok(Self {
            tx_hash: hex::encode_upper(&hash),
            hash,
            tx,
        })
    }

    /// Signers in signature order. A failed bech32 conversion leaves only
    /// `addr_bech32` empty.
    pub fn signers(&self, codec: &dyn AddressCodec) -> Vec<Signer> {
        self.tx
            .signatures
            .iter()
            .map(|signature| {
                let address = signer_address(&signature.pub_key);
                let addr_hex = hex::encode_upper(address);
                let addr_bech32 = codec.account_address(&address).unwrap_or_else(|err| {
                    tracing::warn!(
                        tx_hash = %self.tx_hash,
                        addr_hex = %addr_hex,
                        error = %err,
                        "failed to convert signer address to bech32"
                    );
                    String::new()
                });
                Signer {
                    addr_hex,
                    addr_bech32,
                }
            })
            .collect()
    }
}

/// Decodes a varint length prefixed [`proto::StdTx`]. The prefix must cover
/// exactly the remaining bytes.
pub fn decode_envelope(raw: &[u8]) -> Result<proto::StdTx, DecodeError> {
    let mut buf = raw;
    let declared = prost::encoding::decode_varint(&mut buf).map_err(DecodeError::LengthPrefix)?;
    if declared != buf.len() as u64 {
        return Err(DecodeError::LengthMismatch {
            declared,
            actual: buf.len(),
        });
    }
    Ok(proto::StdTx::decode(buf)?)
}

pub fn tx_hash(raw: &[u8]) -> Vec<u8> {
    Sha256::digest(raw).to_vec()
}

/// Account address of a signer: the first 20 bytes of sha256 over its public key.
pub fn signer_address(pub_key: &[u8]) -> [u8; 20] {
    let digest = Sha256::digest(pub_key);
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[..20]);
    address
}
