use thiserror::Error;

use crate::schema::verification_method::{
    VerificationMaterialFormat, VerificationMethodType, VerificationPurpose,
};

/// Coarse classification shared by every error of the peer DID crates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field is absent or the overall shape of the input is wrong.
    Structural,
    /// A payload is not valid base58, multibase, base64, JSON or multicodec.
    Encoding,
    /// A well formed value this implementation does not support.
    UnsupportedValue,
}

#[derive(Debug, Error)]
pub enum DidDocumentError {
    #[error("No '{field}' field in {context}")]
    MissingField {
        field: &'static str,
        context: String,
    },
    #[error("Invalid '{field}' field: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("Unknown verification method type: {0}")]
    UnknownVerificationMethodType(String),
    #[error("Unsupported JWK curve: {0}")]
    UnsupportedJwkCurve(String),
    #[error("JWK with curve {crv} can not have key use '{key_use}'")]
    JwkKeyUseMismatch { crv: String, key_use: String },
    #[error(
        "Verification method type {method_type} expects a {expected} public key, got {actual}"
    )]
    MismatchedMaterialFormat {
        method_type: VerificationMethodType,
        expected: VerificationMaterialFormat,
        actual: VerificationMaterialFormat,
    },
    #[error("Expected {expected} verification method, got {actual}")]
    PurposeMismatch {
        expected: VerificationPurpose,
        actual: VerificationPurpose,
    },
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl DidDocumentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DidDocumentError::MissingField { .. } | DidDocumentError::InvalidField { .. } => {
                ErrorKind::Structural
            }
            DidDocumentError::JsonError(_) => ErrorKind::Encoding,
            DidDocumentError::UnknownVerificationMethodType(_)
            | DidDocumentError::UnsupportedJwkCurve(_)
            | DidDocumentError::JwkKeyUseMismatch { .. }
            | DidDocumentError::MismatchedMaterialFormat { .. }
            | DidDocumentError::PurposeMismatch { .. } => ErrorKind::UnsupportedValue,
        }
    }
}
