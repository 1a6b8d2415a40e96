use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::DidDocumentError, schema::verification_method::VerificationPurpose};

/// Octet key pair JWK as carried by `JsonWebKey2020` verification methods. Only the members
/// needed to tell the key apart are modelled, everything else is kept in `extra`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JsonWebKey {
    kty: String,
    crv: String,
    x: String,
    #[serde(flatten)]
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde(default)]
    extra: HashMap<String, Value>,
}

impl JsonWebKey {
    pub const KTY_OKP: &'static str = "OKP";
    pub const CRV_ED25519: &'static str = "Ed25519";
    pub const CRV_X25519: &'static str = "X25519";

    pub fn new(jwk: &str) -> Result<Self, DidDocumentError> {
        Ok(serde_json::from_str(jwk)?)
    }

    pub fn okp(crv: &str, x: String) -> Self {
        Self {
            kty: Self::KTY_OKP.to_string(),
            crv: crv.to_string(),
            x,
            extra: HashMap::new(),
        }
    }

    pub fn kty(&self) -> &str {
        &self.kty
    }

    pub fn crv(&self) -> &str {
        &self.crv
    }

    pub fn x(&self) -> &str {
        &self.x
    }

    pub fn extra_field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Agreement for X25519 keys, authentication for Ed25519 keys. A `use` member that
    /// contradicts the curve is rejected.
    pub fn verification_purpose(&self) -> Result<VerificationPurpose, DidDocumentError> {
        let purpose = match self.crv.as_str() {
            Self::CRV_X25519 => VerificationPurpose::Agreement,
            Self::CRV_ED25519 => VerificationPurpose::Authentication,
            crv => return Err(DidDocumentError::UnsupportedJwkCurve(crv.to_string())),
        };
        match (self.extra_field("use").and_then(Value::as_str), purpose) {
            (None, _)
            | (Some("enc"), VerificationPurpose::Agreement)
            | (Some("sig"), VerificationPurpose::Authentication) => Ok(purpose),
            (Some(key_use), _) => Err(DidDocumentError::JwkKeyUseMismatch {
                crv: self.crv.clone(),
                key_use: key_use.to_string(),
            }),
        }
    }
}

impl FromStr for JsonWebKey {
    type Err = DidDocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for JsonWebKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let serialized = serde_json::to_string(&self).map_err(|_| fmt::Error)?;
        write!(f, "{serialized}")
    }
}
