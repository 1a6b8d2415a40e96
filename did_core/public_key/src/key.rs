use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::KeyType;
use crate::error::PublicKeyError;

/// Raw public key bytes tagged with the algorithm they belong to. Construction checks the
/// byte length against the algorithm, so a `Key` is always well formed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    key_type: KeyType,
    key: Vec<u8>,
}

impl Key {
    pub fn new(key: Vec<u8>, key_type: KeyType) -> Result<Self, PublicKeyError> {
        let expected = key_type.key_length();
        match key.len() {
            actual if actual == expected => Ok(Self { key_type, key }),
            actual => Err(PublicKeyError::InvalidKeyLength {
                key_type,
                expected,
                actual,
            }),
        }
    }

    pub fn key_type(&self) -> &KeyType {
        &self.key_type
    }

    /// Returns the key back if it is of `required` type.
    pub fn validate_key_type(&self, required: KeyType) -> Result<&Self, PublicKeyError> {
        if self.key_type == required {
            Ok(self)
        } else {
            Err(PublicKeyError::InvalidKeyType(self.key_type, required))
        }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Key bytes preceded by the unsigned varint multicodec code of the key type.
    pub fn multicodec_prefixed_key(&self) -> Vec<u8> {
        let mut varint = unsigned_varint::encode::u64_buffer();
        let prefix = unsigned_varint::encode::u64(self.key_type.multicodec(), &mut varint);
        [prefix, self.key.as_slice()].concat()
    }

    /// Inverse of [`Key::multicodec_prefixed_key`].
    pub fn from_multicodec(prefixed_key: &[u8]) -> Result<Self, PublicKeyError> {
        let (code, key) = unsigned_varint::decode::u64(prefixed_key)?;
        let key_type = KeyType::try_from(code)?;
        Self::new(key.to_vec(), key_type)
    }

    /// Multibase base58btc rendering of the multicodec prefixed key, `z6Mk...` for Ed25519
    /// and `z6LS...` for X25519.
    pub fn fingerprint(&self) -> String {
        multibase::encode(multibase::Base::Base58Btc, self.multicodec_prefixed_key())
    }

    /// The fingerprint without its leading multibase character.
    pub fn prefixless_fingerprint(&self) -> String {
        bs58::encode(self.multicodec_prefixed_key()).into_string()
    }

    pub fn from_fingerprint(fingerprint: &str) -> Result<Self, PublicKeyError> {
        match multibase::decode(fingerprint)? {
            (multibase::Base::Base58Btc, prefixed_key) => Self::from_multicodec(&prefixed_key),
            (base, _) => Err(PublicKeyError::UnsupportedMultibase(base.code())),
        }
    }

    pub fn base58(&self) -> String {
        bs58::encode(&self.key).into_string()
    }

    pub fn from_base58(base58: &str, key_type: KeyType) -> Result<Self, PublicKeyError> {
        Self::new(bs58::decode(base58).into_vec()?, key_type)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.base58())
    }
}
