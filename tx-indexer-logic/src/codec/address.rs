use bech32::{Bech32, Hrp};

use crate::{error::AddressError, settings::AddressSettings};

/// Converts raw bytes into their human readable bech32 forms.
pub trait AddressCodec: Send + Sync {
    fn account_address(&self, raw: &[u8]) -> Result<String, AddressError>;

    fn validator_pubkey(&self, pub_key: &[u8]) -> Result<String, AddressError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bech32Codec {
    account_hrp: Hrp,
    validator_pubkey_hrp: Hrp,
}

impl Bech32Codec {
    pub fn new(settings: &AddressSettings) -> Result<Self, AddressError> {
        Ok(Self {
            account_hrp: parse_hrp(&settings.account_prefix)?,
            validator_pubkey_hrp: parse_hrp(&settings.validator_pubkey_prefix)?,
        })
    }

    fn encode(hrp: Hrp, data: &[u8]) -> Result<String, AddressError> {
        if data.is_empty() {
            return Err(AddressError::Empty);
        }
        bech32::encode::<Bech32>(hrp, data).map_err(|err| AddressError::Encode(err.to_string()))
    }
}

fn parse_hrp(prefix: &str) -> Result<Hrp, AddressError> {
    Hrp::parse(prefix).map_err(|err| AddressError::InvalidPrefix(format!("{prefix}: {err}")))
}

impl AddressCodec for Bech32Codec {
    fn account_address(&self, raw: &[u8]) -> Result<String, AddressError> {
        Self::encode(self.account_hrp, raw)
    }

    fn validator_pubkey(&self, pub_key: &[u8]) -> Result<String, AddressError> {
        Self::encode(self.validator_pubkey_hrp, pub_key)
    }
}
