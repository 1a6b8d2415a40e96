use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use did_doc::{
    error::DidDocumentError,
    schema::{
        types::jsonwebkey::JsonWebKey,
        verification_method::{
            PublicKeyField, VerificationMaterial, VerificationMaterialFormat, VerificationMethod,
            VerificationMethodType, VerificationPurpose,
        },
    },
};
use public_key::{Key, KeyType};

use crate::{
    error::DidPeerError,
    helpers::{MULTIBASE_BASE58BTC, URL_SAFE_LENIENT},
};

/// Decodes a multibase encoded key, such as the body of a `did:peer:0` or an `E`/`V` segment
/// stripped of its purpose code, into a verification method of the requested purpose.
pub(crate) fn verification_method_from_element(
    element: &str,
    did: &str,
    purpose: VerificationPurpose,
    encoding: VerificationMaterialFormat,
) -> Result<VerificationMethod, DidPeerError> {
    let key = key_from_fingerprint(element)?;
    let material = material_from_key(&key, purpose, encoding)?;
    // fragment is the encoded key without its multibase code
    let id = format!("{did}#{}", &element[MULTIBASE_BASE58BTC.len_utf8()..]);
    Ok(VerificationMethod::new(id, did.to_string(), material))
}

pub(crate) fn material_from_key(
    key: &Key,
    purpose: VerificationPurpose,
    encoding: VerificationMaterialFormat,
) -> Result<VerificationMaterial, DidPeerError> {
    check_key_type(key, purpose)?;
    let public_key = match encoding {
        VerificationMaterialFormat::Base58 => PublicKeyField::Base58 {
            public_key_base58: key.base58(),
        },
        VerificationMaterialFormat::Multibase => PublicKeyField::Multibase {
            public_key_multibase: key.fingerprint(),
        },
        VerificationMaterialFormat::Jwk => PublicKeyField::Jwk {
            public_key_jwk: JsonWebKey::okp(
                jwk_curve(key.key_type()),
                URL_SAFE_NO_PAD.encode(key.key()),
            ),
        },
    };
    Ok(VerificationMaterial::new(
        VerificationMethodType::from_parts(encoding, purpose),
        public_key,
    )?)
}

/// Recovers the raw key of a material that is expected to be published under `purpose`.
pub(crate) fn key_from_material(
    material: &VerificationMaterial,
    purpose: VerificationPurpose,
) -> Result<Key, DidPeerError> {
    if material.purpose() != purpose {
        return Err(DidDocumentError::PurposeMismatch {
            expected: purpose,
            actual: material.purpose(),
        }
        .into());
    }
    let key_type = KeyType::from(purpose);
    let key = match material.public_key() {
        PublicKeyField::Base58 { public_key_base58 } => {
            Key::from_base58(public_key_base58, key_type)?
        }
        PublicKeyField::Multibase {
            public_key_multibase,
        } => {
            let key = key_from_fingerprint(public_key_multibase)?;
            check_key_type(&key, purpose)?;
            key
        }
        PublicKeyField::Jwk { public_key_jwk } => {
            if public_key_jwk.kty() != JsonWebKey::KTY_OKP {
                return Err(DidPeerError::UnsupportedJwkKeyType(
                    public_key_jwk.kty().to_string(),
                ));
            }
            Key::new(URL_SAFE_LENIENT.decode(public_key_jwk.x())?, key_type)?
        }
    };
    Ok(key)
}

fn key_from_fingerprint(fingerprint: &str) -> Result<Key, DidPeerError> {
    match fingerprint.chars().next() {
        Some(MULTIBASE_BASE58BTC) => Ok(Key::from_fingerprint(fingerprint)?),
        Some(transform) => Err(DidPeerError::UnsupportedTransform(transform)),
        None => Err(DidPeerError::DidValidationError(
            "Empty encoded key".to_string(),
        )),
    }
}

fn check_key_type(key: &Key, purpose: VerificationPurpose) -> Result<(), DidPeerError> {
    if *key.key_type() == KeyType::from(purpose) {
        Ok(())
    } else {
        Err(DidPeerError::InvalidKeyType {
            key_type: *key.key_type(),
            purpose,
        })
    }
}

fn jwk_curve(key_type: &KeyType) -> &'static str {
    match key_type {
        KeyType::Ed25519 => JsonWebKey::CRV_ED25519,
        KeyType::X25519 => JsonWebKey::CRV_X25519,
    }
}
