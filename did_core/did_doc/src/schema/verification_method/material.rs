use super::{PublicKeyField, VerificationMaterialFormat, VerificationMethodType, VerificationPurpose};
use crate::error::DidDocumentError;

/// A typed public key. The value is always in the format its type dictates.
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationMaterial {
    method_type: VerificationMethodType,
    public_key: PublicKeyField,
}

impl VerificationMaterial {
    pub fn new(
        method_type: impl Into<VerificationMethodType>,
        public_key: PublicKeyField,
    ) -> Result<Self, DidDocumentError> {
        let method_type = method_type.into();
        if public_key.format() != method_type.format() {
            return Err(DidDocumentError::MismatchedMaterialFormat {
                method_type,
                expected: method_type.format(),
                actual: public_key.format(),
            });
        }
        if let PublicKeyField::Jwk { public_key_jwk } = &public_key {
            let actual = public_key_jwk.verification_purpose()?;
            if actual != method_type.purpose() {
                return Err(DidDocumentError::PurposeMismatch {
                    expected: method_type.purpose(),
                    actual,
                });
            }
        }
        Ok(Self {
            method_type,
            public_key,
        })
    }

    pub fn method_type(&self) -> VerificationMethodType {
        self.method_type
    }

    pub fn format(&self) -> VerificationMaterialFormat {
        self.method_type.format()
    }

    pub fn purpose(&self) -> VerificationPurpose {
        self.method_type.purpose()
    }

    pub fn public_key(&self) -> &PublicKeyField {
        &self.public_key
    }
}
