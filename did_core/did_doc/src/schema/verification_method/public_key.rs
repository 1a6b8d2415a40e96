use serde_json::{Map, Value};

use super::VerificationMaterialFormat;
use crate::{error::DidDocumentError, schema::types::jsonwebkey::JsonWebKey};

/// Public key value of a verification method, one variant per wire format.
#[derive(Clone, Debug, PartialEq)]
pub enum PublicKeyField {
    Base58 { public_key_base58: String },
    Multibase { public_key_multibase: String },
    Jwk { public_key_jwk: JsonWebKey },
}

impl PublicKeyField {
    pub fn format(&self) -> VerificationMaterialFormat {
        match self {
            PublicKeyField::Base58 { .. } => VerificationMaterialFormat::Base58,
            PublicKeyField::Multibase { .. } => VerificationMaterialFormat::Multibase,
            PublicKeyField::Jwk { .. } => VerificationMaterialFormat::Jwk,
        }
    }

    pub fn field_name(&self) -> &'static str {
        self.format().field_name()
    }

    pub(crate) fn to_value(&self) -> Result<Value, DidDocumentError> {
        Ok(match self {
            PublicKeyField::Base58 { public_key_base58 } => {
                Value::String(public_key_base58.clone())
            }
            PublicKeyField::Multibase {
                public_key_multibase,
            } => Value::String(public_key_multibase.clone()),
            PublicKeyField::Jwk { public_key_jwk } => serde_json::to_value(public_key_jwk)?,
        })
    }

    pub(crate) fn from_method_fields(
        format: VerificationMaterialFormat,
        fields: &Map<String, Value>,
    ) -> Result<Self, DidDocumentError> {
        let field = format.field_name();
        let value = fields
            .get(field)
            .ok_or_else(|| DidDocumentError::MissingField {
                field,
                context: "verification method".to_string(),
            })?;
        let as_string = || {
            value
                .as_str()
                .map(ToString::to_string)
                .ok_or_else(|| DidDocumentError::InvalidField {
                    field,
                    reason: format!("expected a string, got {value}"),
                })
        };
        Ok(match format {
            VerificationMaterialFormat::Base58 => PublicKeyField::Base58 {
                public_key_base58: as_string()?,
            },
            VerificationMaterialFormat::Multibase => PublicKeyField::Multibase {
                public_key_multibase: as_string()?,
            },
            VerificationMaterialFormat::Jwk => PublicKeyField::Jwk {
                public_key_jwk: serde_json::from_value(value.clone())?,
            },
        })
    }
}
