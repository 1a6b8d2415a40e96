use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::PublicKeyError;

/// Key algorithms a peer DID can carry. Ed25519 keys sign, X25519 keys are used for key
/// agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    Ed25519,
    X25519,
}

/// Multicodec table entries for the supported key algorithms.
const MULTICODEC_X25519_PUB: u64 = 0xec;
const MULTICODEC_ED25519_PUB: u64 = 0xed;

impl KeyType {
    /// Length in bytes of a raw public key of this type.
    pub fn key_length(&self) -> usize {
        match self {
            KeyType::Ed25519 | KeyType::X25519 => 32,
        }
    }

    pub fn multicodec(&self) -> u64 {
        match self {
            KeyType::X25519 => MULTICODEC_X25519_PUB,
            KeyType::Ed25519 => MULTICODEC_ED25519_PUB,
        }
    }
}

impl From<&KeyType> for u64 {
    fn from(key_type: &KeyType) -> Self {
        key_type.multicodec()
    }
}

impl TryFrom<u64> for KeyType {
    type Error = PublicKeyError;

    fn try_from(code: u64) -> Result<Self, Self::Error> {
        [KeyType::Ed25519, KeyType::X25519]
            .into_iter()
            .find(|key_type| key_type.multicodec() == code)
            .ok_or(PublicKeyError::UnsupportedMulticodecDescriptor(code))
    }
}

impl Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            KeyType::X25519 => "X25519",
            KeyType::Ed25519 => "Ed25519",
        };
        f.write_str(name)
    }
}
