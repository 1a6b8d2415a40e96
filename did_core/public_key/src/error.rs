use thiserror::Error;

use crate::KeyType;

#[derive(Debug, Error)]
pub enum PublicKeyError {
    #[error("Key is not valid base58: {0}")]
    Base58DecodingError(#[from] bs58::decode::Error),
    #[error("Key fingerprint is not valid multibase: {0}")]
    MultibaseDecodingError(#[from] multibase::Error),
    #[error(transparent)]
    VarintDecodingError(#[from] VarintDecodingError),
    #[error("Multicodec code {0:#x} does not name a supported key type")]
    UnsupportedMulticodecDescriptor(u64),
    #[error("Key fingerprint uses multibase '{0}', only base58btc ('z') is accepted")]
    UnsupportedMultibase(char),
    #[error("{key_type} key must be {expected} bytes long, got {actual}")]
    InvalidKeyLength {
        key_type: KeyType,
        expected: usize,
        actual: usize,
    },
    #[error("Key type {0} found where {1} was required")]
    InvalidKeyType(KeyType, KeyType),
}

/// Failure to read the multicodec varint in front of a key.
#[derive(Debug, Error)]
#[error("Malformed multicodec varint: {0}")]
pub struct VarintDecodingError(unsigned_varint::decode::Error);

impl From<unsigned_varint::decode::Error> for VarintDecodingError {
    fn from(error: unsigned_varint::decode::Error) -> Self {
        Self(error)
    }
}

impl From<unsigned_varint::decode::Error> for PublicKeyError {
    fn from(error: unsigned_varint::decode::Error) -> Self {
        VarintDecodingError::from(error).into()
    }
}
