use std::{fmt::Display, str::FromStr};

use public_key::KeyType;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{
    error::DidDocumentError,
    schema::{types::jsonwebkey::JsonWebKey, utils::required_str},
};

/// How the public key value of a verification method is written on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum VerificationMaterialFormat {
    Base58,
    #[default]
    Multibase,
    Jwk,
}

impl VerificationMaterialFormat {
    pub const fn field_name(self) -> &'static str {
        match self {
            VerificationMaterialFormat::Base58 => "publicKeyBase58",
            VerificationMaterialFormat::Multibase => "publicKeyMultibase",
            VerificationMaterialFormat::Jwk => "publicKeyJwk",
        }
    }
}

impl Display for VerificationMaterialFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationMaterialFormat::Base58 => write!(f, "base58"),
            VerificationMaterialFormat::Multibase => write!(f, "multibase"),
            VerificationMaterialFormat::Jwk => write!(f, "JWK"),
        }
    }
}

/// Verification relationship a key is published under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerificationPurpose {
    Authentication,
    Agreement,
}

impl Display for VerificationPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationPurpose::Authentication => write!(f, "authentication"),
            VerificationPurpose::Agreement => write!(f, "keyAgreement"),
        }
    }
}

impl From<VerificationPurpose> for KeyType {
    fn from(purpose: VerificationPurpose) -> Self {
        match purpose {
            VerificationPurpose::Authentication => KeyType::Ed25519,
            VerificationPurpose::Agreement => KeyType::X25519,
        }
    }
}

const JSON_WEB_KEY_2020: &str = "JsonWebKey2020";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerificationMethodTypeAgreement {
    /// https://w3id.org/security/suites/jws-2020/v1
    JsonWebKey2020,
    /// https://ns.did.ai/suites/x25519-2019/v1/
    X25519KeyAgreementKey2019,
    /// https://ns.did.ai/suites/x25519-2020/v1/
    X25519KeyAgreementKey2020,
}

impl VerificationMethodTypeAgreement {
    pub fn format(self) -> VerificationMaterialFormat {
        match self {
            Self::JsonWebKey2020 => VerificationMaterialFormat::Jwk,
            Self::X25519KeyAgreementKey2019 => VerificationMaterialFormat::Base58,
            Self::X25519KeyAgreementKey2020 => VerificationMaterialFormat::Multibase,
        }
    }
}

impl Display for VerificationMethodTypeAgreement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::JsonWebKey2020 => write!(f, "{JSON_WEB_KEY_2020}"),
            Self::X25519KeyAgreementKey2019 => write!(f, "X25519KeyAgreementKey2019"),
            Self::X25519KeyAgreementKey2020 => write!(f, "X25519KeyAgreementKey2020"),
        }
    }
}

impl FromStr for VerificationMethodTypeAgreement {
    type Err = DidDocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            JSON_WEB_KEY_2020 => Ok(Self::JsonWebKey2020),
            "X25519KeyAgreementKey2019" => Ok(Self::X25519KeyAgreementKey2019),
            "X25519KeyAgreementKey2020" => Ok(Self::X25519KeyAgreementKey2020),
            _ => Err(DidDocumentError::UnknownVerificationMethodType(
                s.to_string(),
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerificationMethodTypeAuthentication {
    /// https://w3id.org/security/suites/jws-2020/v1
    JsonWebKey2020,
    /// https://w3id.org/security/suites/ed25519-2018/v1
    Ed25519VerificationKey2018,
    /// https://w3id.org/security/suites/ed25519-2020/v1
    Ed25519VerificationKey2020,
}

impl VerificationMethodTypeAuthentication {
    pub fn format(self) -> VerificationMaterialFormat {
        match self {
            Self::JsonWebKey2020 => VerificationMaterialFormat::Jwk,
            Self::Ed25519VerificationKey2018 => VerificationMaterialFormat::Base58,
            Self::Ed25519VerificationKey2020 => VerificationMaterialFormat::Multibase,
        }
    }
}

impl Display for VerificationMethodTypeAuthentication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::JsonWebKey2020 => write!(f, "{JSON_WEB_KEY_2020}"),
            Self::Ed25519VerificationKey2018 => write!(f, "Ed25519VerificationKey2018"),
            Self::Ed25519VerificationKey2020 => write!(f, "Ed25519VerificationKey2020"),
        }
    }
}

impl FromStr for VerificationMethodTypeAuthentication {
    type Err = DidDocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            JSON_WEB_KEY_2020 => Ok(Self::JsonWebKey2020),
            "Ed25519VerificationKey2018" => Ok(Self::Ed25519VerificationKey2018),
            "Ed25519VerificationKey2020" => Ok(Self::Ed25519VerificationKey2020),
            _ => Err(DidDocumentError::UnknownVerificationMethodType(
                s.to_string(),
            )),
        }
    }
}

/// Verification method types usable in a peer DID document, partitioned by purpose.
/// `JsonWebKey2020` appears on both sides and is told apart by the purpose it was found under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerificationMethodType {
    Agreement(VerificationMethodTypeAgreement),
    Authentication(VerificationMethodTypeAuthentication),
}

impl VerificationMethodType {
    pub fn from_parts(format: VerificationMaterialFormat, purpose: VerificationPurpose) -> Self {
        match (purpose, format) {
            (VerificationPurpose::Agreement, VerificationMaterialFormat::Base58) => {
                VerificationMethodTypeAgreement::X25519KeyAgreementKey2019.into()
            }
            (VerificationPurpose::Agreement, VerificationMaterialFormat::Multibase) => {
                VerificationMethodTypeAgreement::X25519KeyAgreementKey2020.into()
            }
            (VerificationPurpose::Agreement, VerificationMaterialFormat::Jwk) => {
                VerificationMethodTypeAgreement::JsonWebKey2020.into()
            }
            (VerificationPurpose::Authentication, VerificationMaterialFormat::Base58) => {
                VerificationMethodTypeAuthentication::Ed25519VerificationKey2018.into()
            }
            (VerificationPurpose::Authentication, VerificationMaterialFormat::Multibase) => {
                VerificationMethodTypeAuthentication::Ed25519VerificationKey2020.into()
            }
            (VerificationPurpose::Authentication, VerificationMaterialFormat::Jwk) => {
                VerificationMethodTypeAuthentication::JsonWebKey2020.into()
            }
        }
    }

    pub fn format(&self) -> VerificationMaterialFormat {
        match self {
            VerificationMethodType::Agreement(agreement) => agreement.format(),
            VerificationMethodType::Authentication(authentication) => authentication.format(),
        }
    }

    pub fn purpose(&self) -> VerificationPurpose {
        match self {
            VerificationMethodType::Agreement(_) => VerificationPurpose::Agreement,
            VerificationMethodType::Authentication(_) => VerificationPurpose::Authentication,
        }
    }

    /// The material format this type dictates, together with the field carrying the value.
    pub fn public_key_format(&self) -> (VerificationMaterialFormat, &'static str) {
        let format = self.format();
        (format, format.field_name())
    }

    /// Recovers the type of a verification method from its JSON members. `JsonWebKey2020`
    /// requires the `publicKeyJwk` member and is classified by its curve, every other type
    /// name is looked up among agreement types first, then authentication types.
    pub fn from_method_fields(fields: &Map<String, Value>) -> Result<Self, DidDocumentError> {
        let method_type = required_str(fields, "type", "verification method")?;
        if method_type == JSON_WEB_KEY_2020 {
            let field = VerificationMaterialFormat::Jwk.field_name();
            let jwk = fields
                .get(field)
                .ok_or_else(|| DidDocumentError::MissingField {
                    field,
                    context: format!("{JSON_WEB_KEY_2020} verification method"),
                })?;
            let jwk: JsonWebKey = serde_json::from_value(jwk.clone())?;
            return Ok(Self::from_parts(
                VerificationMaterialFormat::Jwk,
                jwk.verification_purpose()?,
            ));
        }
        if let Ok(agreement) = method_type.parse::<VerificationMethodTypeAgreement>() {
            return Ok(agreement.into());
        }
        method_type
            .parse::<VerificationMethodTypeAuthentication>()
            .map(Into::into)
    }
}

impl From<VerificationMethodTypeAgreement> for VerificationMethodType {
    fn from(value: VerificationMethodTypeAgreement) -> Self {
        Self::Agreement(value)
    }
}

impl From<VerificationMethodTypeAuthentication> for VerificationMethodType {
    fn from(value: VerificationMethodTypeAuthentication) -> Self {
        Self::Authentication(value)
    }
}

impl From<&VerificationMethodType> for KeyType {
    fn from(value: &VerificationMethodType) -> Self {
        value.purpose().into()
    }
}

impl Display for VerificationMethodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationMethodType::Agreement(agreement) => write!(f, "{agreement}"),
            VerificationMethodType::Authentication(authentication) => {
                write!(f, "{authentication}")
            }
        }
    }
}

impl Serialize for VerificationMethodType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
