mod material;
mod public_key;
mod verification_method_type;

use serde::{ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

pub use self::{
    material::VerificationMaterial,
    public_key::PublicKeyField,
    verification_method_type::{
        VerificationMaterialFormat, VerificationMethodType, VerificationMethodTypeAgreement,
        VerificationMethodTypeAuthentication, VerificationPurpose,
    },
};
use crate::{error::DidDocumentError, schema::utils::required_str};

/// A verification method of a DID document: `{id, type, controller, <publicKey*>}`.
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationMethod {
    id: String,
    controller: String,
    material: VerificationMaterial,
}

impl VerificationMethod {
    pub fn new(id: String, controller: String, material: VerificationMaterial) -> Self {
        Self {
            id,
            controller,
            material,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn material(&self) -> &VerificationMaterial {
        &self.material
    }

    pub fn verification_method_type(&self) -> VerificationMethodType {
        self.material.method_type()
    }

    pub fn public_key_field(&self) -> &PublicKeyField {
        self.material.public_key()
    }

    /// Parses a verification method out of its JSON form. `purpose` is the verification
    /// relationship the method was listed under, if known; a method whose type belongs to
    /// the other purpose is rejected.
    pub fn from_value(
        value: &Value,
        purpose: Option<VerificationPurpose>,
    ) -> Result<Self, DidDocumentError> {
        let fields = value
            .as_object()
            .ok_or_else(|| DidDocumentError::InvalidField {
                field: "verificationMethod",
                reason: format!("expected a JSON object, got {value}"),
            })?;
        let id = required_str(fields, "id", "verification method")?;
        let method_type = VerificationMethodType::from_method_fields(fields)?;
        let controller = required_str(fields, "controller", "verification method")?;
        if let Some(expected) = purpose {
            if method_type.purpose() != expected {
                return Err(DidDocumentError::PurposeMismatch {
                    expected,
                    actual: method_type.purpose(),
                });
            }
        }
        let public_key = PublicKeyField::from_method_fields(method_type.format(), fields)?;
        Ok(Self::new(
            id.to_string(),
            controller.to_string(),
            VerificationMaterial::new(method_type, public_key)?,
        ))
    }
}

impl Serialize for VerificationMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let public_key = self
            .public_key_field()
            .to_value()
            .map_err(serde::ser::Error::custom)?;
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("type", &self.verification_method_type())?;
        map.serialize_entry("controller", &self.controller)?;
        map.serialize_entry(self.public_key_field().field_name(), &public_key)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for VerificationMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value, None).map_err(serde::de::Error::custom)
    }
}
