use did_doc::{error::ErrorKind, schema::verification_method::VerificationPurpose};
use public_key::KeyType;

#[derive(Debug, thiserror::Error)]
pub enum DidPeerError {
    #[error("Not a well formed peer DID: {0}")]
    DidValidationError(String),
    #[error("'{0}' is not a peer DID numalgo")]
    InvalidNumalgoCharacter(char),
    #[error("Peer DID numalgo {0} is not supported")]
    UnsupportedNumalgo(char),
    #[error("Unknown element purpose prefix '{0}'")]
    UnsupportedPurpose(char),
    #[error("Key transform '{0}' is not supported, expected base58btc")]
    UnsupportedTransform(char),
    #[error("Invalid key type {key_type} for {purpose} key")]
    InvalidKeyType {
        key_type: KeyType,
        purpose: VerificationPurpose,
    },
    #[error("Unsupported JWK key type '{0}', expected OKP")]
    UnsupportedJwkKeyType(String),
    #[error("Invalid inception material: {0}")]
    InvalidInceptionMaterial(String),
    #[error("Service segment is not valid base64url: {0}")]
    Base64DecodingError(#[from] base64::DecodeError),
    #[error("Service JSON handling failed: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Malformed key: {0}")]
    PublicKeyError(#[from] public_key::PublicKeyError),
    #[error("Unusable DID document: {0}")]
    DidDocumentError(#[from] did_doc::error::DidDocumentError),
}

impl DidPeerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DidPeerError::DidValidationError(_)
            | DidPeerError::InvalidNumalgoCharacter(_)
            | DidPeerError::InvalidInceptionMaterial(_) => ErrorKind::Structural,
            DidPeerError::Base64DecodingError(_)
            | DidPeerError::JsonError(_)
            | DidPeerError::PublicKeyError(_) => ErrorKind::Encoding,
            DidPeerError::UnsupportedNumalgo(_)
            | DidPeerError::UnsupportedPurpose(_)
            | DidPeerError::UnsupportedTransform(_)
            | DidPeerError::InvalidKeyType { .. }
            | DidPeerError::UnsupportedJwkKeyType(_) => ErrorKind::UnsupportedValue,
            DidPeerError::DidDocumentError(err) => err.kind(),
        }
    }
}
